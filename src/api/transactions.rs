//! Transaction endpoints.

use crate::{
    api::{ApiJson, AppState},
    core::transaction,
    entities::TransactionModel,
    errors::Result,
    models::NewTransaction,
};
use axum::{Json, extract::State, http::StatusCode};

/// `POST /transactions` - answers 201 on success.
pub async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<NewTransaction>,
) -> Result<(StatusCode, Json<TransactionModel>)> {
    let created = transaction::create_transaction(&state.database, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /transactions`
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionModel>>> {
    Ok(Json(transaction::get_all_transactions(&state.database).await?))
}
