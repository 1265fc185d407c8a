//! Endpoints outside the customer/plan model: a greeting and a local-time lookup.

use crate::{api::ApiPath, core::timezone, errors::Result};
use axum::Json;
use serde_json::{Value, json};

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// `GET /time/{iso_code}`
pub async fn time(ApiPath(iso_code): ApiPath<String>) -> Result<Json<Value>> {
    let now = timezone::time_in(&iso_code, chrono::Utc::now())?;
    Ok(Json(json!({ "time": now.to_rfc3339() })))
}
