//! Invoice endpoint.

use crate::{api::ApiJson, core::invoice, models::Invoice};
use axum::Json;

/// `POST /invoices` - echoes the validated invoice.
pub async fn create_invoice(ApiJson(body): ApiJson<Invoice>) -> Json<Invoice> {
    Json(invoice::create_invoice(body))
}
