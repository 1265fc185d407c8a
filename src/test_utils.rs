//! Shared test utilities for customer-hub.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{customer, plan, subscription, transaction},
    entities::{self, PlanStatus},
    errors::Result,
    models::{NewCustomer, NewPlan, NewTransaction},
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test customer with only a name.
pub async fn create_test_customer(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::customer::Model> {
    create_custom_customer(db, name, None, None).await
}

/// Creates a test customer with an email and age.
pub async fn create_custom_customer(
    db: &DatabaseConnection,
    name: &str,
    email: Option<&str>,
    age: Option<i32>,
) -> Result<entities::customer::Model> {
    customer::create_customer(
        db,
        NewCustomer {
            name: name.to_string(),
            description: None,
            email: email.map(str::to_string),
            age,
        },
    )
    .await
}

/// Creates a test plan with sensible defaults.
///
/// # Defaults
/// * `price`: 1000
/// * `description`: None
pub async fn create_test_plan(db: &DatabaseConnection, name: &str) -> Result<entities::plan::Model> {
    plan::create_plan(
        db,
        NewPlan {
            name: name.to_string(),
            price: 1000,
            description: None,
        },
    )
    .await
}

/// Subscribes a customer to a plan with status `active`.
pub async fn create_test_subscription(
    db: &DatabaseConnection,
    customer_id: i64,
    plan_id: i64,
) -> Result<entities::customer_plan::Model> {
    subscription::subscribe(db, customer_id, plan_id, PlanStatus::Active).await
}

/// Creates a test transaction with description `"Test transaction"`.
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    customer_id: i64,
    amount: i64,
) -> Result<entities::transaction::Model> {
    create_custom_transaction(db, customer_id, amount, "Test transaction").await
}

/// Creates a test transaction with custom parameters.
pub async fn create_custom_transaction(
    db: &DatabaseConnection,
    customer_id: i64,
    amount: i64,
    description: &str,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(
        db,
        NewTransaction {
            customer_id,
            amount,
            description: description.to_string(),
        },
    )
    .await
}

/// Sets up a complete test environment with one customer.
/// Returns (db, customer) for common test scenarios.
pub async fn setup_with_customer() -> Result<(DatabaseConnection, entities::customer::Model)> {
    let db = setup_test_db().await?;
    let customer = create_test_customer(&db, "Ana").await?;
    Ok((db, customer))
}

/// Sets up a test environment with a customer and a plan.
/// Returns (db, customer, plan) for subscription tests.
pub async fn setup_with_customer_and_plan() -> Result<(
    DatabaseConnection,
    entities::customer::Model,
    entities::plan::Model,
)> {
    let (db, customer) = setup_with_customer().await?;
    let plan = create_test_plan(&db, "Basic").await?;
    Ok((db, customer, plan))
}
