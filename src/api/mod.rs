//! HTTP layer - axum router, handlers and the mapping from domain errors to responses.
//!
//! Handlers are thin: they extract and shape-check input, call into [`crate::core`],
//! and serialize the result. Each request borrows the shared connection pool for its
//! own duration only.

/// Customer and subscription endpoints
pub mod customers;
/// Greeting and timezone endpoints
pub mod general;
/// Invoice echo endpoint
pub mod invoices;
/// Plan endpoints
pub mod plans;
/// Transaction endpoints
pub mod transactions;

mod error;
mod extract;


pub use extract::{ApiJson, ApiPath, ApiQuery};

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

/// Shared data available to all handlers.
/// Holds the database pool; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around the given connection pool.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(general::root))
        .route("/time/{iso_code}", get(general::time))
        .route(
            "/customers",
            post(customers::create_customer).get(customers::list_customers),
        )
        .route(
            "/customer/{id}",
            get(customers::get_customer)
                .delete(customers::delete_customer)
                .patch(customers::update_customer),
        )
        .route(
            "/customers/{customer_id}/plans",
            get(customers::list_customer_plans),
        )
        .route(
            "/customers/{customer_id}/plans/{plan_id}",
            post(customers::subscribe_customer),
        )
        .route("/plans", post(plans::create_plan).get(plans::list_plans))
        .route(
            "/transactions",
            post(transactions::create_transaction).get(transactions::list_transactions),
        )
        .route("/invoices", post(invoices::create_invoice))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
