//! Plan endpoints.

use crate::{
    api::{ApiJson, AppState},
    core::plan,
    entities::PlanModel,
    errors::Result,
    models::NewPlan,
};
use axum::{Json, extract::State};

/// `POST /plans`
pub async fn create_plan(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewPlan>,
) -> Result<Json<PlanModel>> {
    Ok(Json(plan::create_plan(&state.database, body).await?))
}

/// `GET /plans`
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<PlanModel>>> {
    Ok(Json(plan::get_all_plans(&state.database).await?))
}
