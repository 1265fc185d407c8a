//! Extractors whose rejections come back as 422 `{"detail": ...}` instead of
//! axum's plain-text defaults.

use crate::errors::Error;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameters
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

/// Query string
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);
