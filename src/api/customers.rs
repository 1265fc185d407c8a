//! Customer endpoints, including the customer-to-plan subscription routes.

use crate::{
    api::{ApiJson, ApiPath, ApiQuery, AppState},
    core::{customer, subscription},
    entities::{CustomerModel, CustomerPlanModel},
    errors::{Error, Result},
    models::{CustomerUpdate, NewCustomer, PlanStatusQuery, Subscription},
};
use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

/// `POST /customers`
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewCustomer>,
) -> Result<Json<CustomerModel>> {
    let created = customer::create_customer(&state.database, body).await?;
    Ok(Json(created))
}

/// `GET /customers`
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<CustomerModel>>> {
    Ok(Json(customer::get_all_customers(&state.database).await?))
}

/// `GET /customer/{id}`
pub async fn get_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<CustomerModel>> {
    customer::get_customer_by_id(&state.database, id)
        .await?
        .map(Json)
        .ok_or(Error::NotFound { entity: "Customer" })
}

/// `DELETE /customer/{id}`
pub async fn delete_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Value>> {
    customer::delete_customer(&state.database, id).await?;
    Ok(Json(json!({ "detail": "Customer deleted" })))
}

/// `PATCH /customer/{id}` - answers 201 on success.
pub async fn update_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(body): ApiJson<CustomerUpdate>,
) -> Result<(StatusCode, Json<CustomerModel>)> {
    let updated = customer::update_customer(&state.database, id, body).await?;
    Ok((StatusCode::CREATED, Json(updated)))
}

/// `POST /customers/{customer_id}/plans/{plan_id}?plan_status=`
pub async fn subscribe_customer(
    State(state): State<AppState>,
    ApiPath((customer_id, plan_id)): ApiPath<(i64, i64)>,
    ApiQuery(query): ApiQuery<PlanStatusQuery>,
) -> Result<(StatusCode, Json<CustomerPlanModel>)> {
    let row =
        subscription::subscribe(&state.database, customer_id, plan_id, query.plan_status).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /customers/{customer_id}/plans?plan_status=`
pub async fn list_customer_plans(
    State(state): State<AppState>,
    ApiPath(customer_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PlanStatusQuery>,
) -> Result<Json<Vec<Subscription>>> {
    let rows =
        subscription::list_subscriptions(&state.database, customer_id, query.plan_status).await?;
    Ok(Json(rows))
}
