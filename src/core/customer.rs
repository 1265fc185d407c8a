//! Customer business logic - Create, read, partially update and delete customers.
//!
//! Deleting a customer also removes the rows that reference it (subscriptions and
//! transactions) in the same store transaction, so no orphans are left behind.

use crate::{
    entities::{Customer, CustomerPlan, Transaction, customer, customer_plan, transaction},
    errors::{Error, Result},
    models::{CustomerUpdate, NewCustomer},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

const MAX_AGE: i32 = 150;

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("Customer name cannot be empty"));
    }
    Ok(())
}

fn validate_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(email) if !email.contains('@') => Err(Error::validation(format!(
            "'{email}' is not a valid email address"
        ))),
        _ => Ok(()),
    }
}

fn validate_age(age: Option<i32>) -> Result<()> {
    match age {
        Some(age) if !(0..=MAX_AGE).contains(&age) => Err(Error::validation(format!(
            "Age must be between 0 and {MAX_AGE}, got {age}"
        ))),
        _ => Ok(()),
    }
}

/// Creates a new customer after validating the profile fields.
///
/// The name must not be blank. All fields are stored exactly as given.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The email is present but has no `@`
/// - The age is present but outside `0..=150`
/// - The database insert operation fails
pub async fn create_customer(db: &DatabaseConnection, new: NewCustomer) -> Result<customer::Model> {
    validate_name(&new.name)?;
    validate_email(new.email.as_deref())?;
    validate_age(new.age)?;

    let customer = customer::ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        email: Set(new.email),
        age: Set(new.age),
        ..Default::default()
    };

    let result = customer.insert(db).await?;
    info!("Created customer {} ({})", result.id, result.name);
    Ok(result)
}

/// Finds a customer by its unique ID.
pub async fn get_customer_by_id<C>(db: &C, customer_id: i64) -> Result<Option<customer::Model>>
where
    C: ConnectionTrait,
{
    Customer::find_by_id(customer_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every customer, ordered by ID.
pub async fn get_all_customers(db: &DatabaseConnection) -> Result<Vec<customer::Model>> {
    Customer::find()
        .order_by_asc(customer::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Applies a partial update to an existing customer.
///
/// Only the fields present in `update` change. A nullable field sent as `null`
/// is cleared; `name` cannot be cleared. Field checks run before the lookup, so a
/// malformed body is reported even for a missing customer.
///
/// # Errors
/// Returns [`Error::Validation`] for a bad field and [`Error::NotFound`] when the
/// customer does not exist.
pub async fn update_customer(
    db: &DatabaseConnection,
    customer_id: i64,
    update: CustomerUpdate,
) -> Result<customer::Model> {
    let name = match &update.name {
        Some(Some(name)) => {
            validate_name(name)?;
            Some(name.clone())
        }
        Some(None) => return Err(Error::validation("Customer name cannot be null")),
        None => None,
    };
    if let Some(email) = &update.email {
        validate_email(email.as_deref())?;
    }
    if let Some(age) = update.age {
        validate_age(age)?;
    }

    let existing = get_customer_by_id(db, customer_id)
        .await?
        .ok_or(Error::NotFound { entity: "Customer" })?;

    if name.is_none() && update.is_empty() {
        return Ok(existing);
    }

    let mut customer: customer::ActiveModel = existing.into();
    if let Some(name) = name {
        customer.name = Set(name);
    }
    if let Some(description) = update.description {
        customer.description = Set(description);
    }
    if let Some(email) = update.email {
        customer.email = Set(email);
    }
    if let Some(age) = update.age {
        customer.age = Set(age);
    }

    let result = customer.update(db).await?;
    info!("Updated customer {customer_id}");
    Ok(result)
}

/// Deletes a customer together with its subscriptions and transactions.
///
/// Everything runs inside one store transaction; on any failure nothing is removed.
/// Returns the deleted customer.
///
/// # Errors
/// Returns [`Error::NotFound`] when the customer does not exist.
pub async fn delete_customer(db: &DatabaseConnection, customer_id: i64) -> Result<customer::Model> {
    let txn = db.begin().await?;

    let customer = get_customer_by_id(&txn, customer_id)
        .await?
        .ok_or(Error::NotFound { entity: "Customer" })?;

    let subscriptions = CustomerPlan::delete_many()
        .filter(customer_plan::Column::CustomerId.eq(customer_id))
        .exec(&txn)
        .await?;
    let transactions = Transaction::delete_many()
        .filter(transaction::Column::CustomerId.eq(customer_id))
        .exec(&txn)
        .await?;
    Customer::delete_by_id(customer_id).exec(&txn).await?;

    txn.commit().await?;

    info!(
        "Deleted customer {customer_id} with {} subscriptions and {} transactions",
        subscriptions.rows_affected, transactions.rows_affected
    );
    Ok(customer)
}
