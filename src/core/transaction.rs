//! Transaction business logic - Records and lists financial transactions.
//!
//! A transaction must reference an existing customer at creation time. The
//! existence check and the insert share one store transaction so a concurrent
//! customer delete cannot slip between them.

use crate::{
    core::customer::get_customer_by_id,
    entities::{Transaction, transaction},
    errors::{Error, Result},
    models::NewTransaction,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Creates a new transaction for an existing customer.
///
/// # Arguments
/// * `new.customer_id` - The customer to charge
/// * `new.amount` - Amount in minor units (positive or negative, never zero)
/// * `new.description` - Description of the transaction
///
/// # Errors
/// Returns [`Error::InvalidAmount`] for a zero amount and [`Error::NotFound`]
/// when the customer does not exist. Nothing is persisted in either case.
pub async fn create_transaction(
    db: &DatabaseConnection,
    new: NewTransaction,
) -> Result<transaction::Model> {
    if new.amount == 0 {
        return Err(Error::InvalidAmount { amount: new.amount });
    }

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    get_customer_by_id(&txn, new.customer_id)
        .await?
        .ok_or(Error::NotFound { entity: "Customer" })?;

    let transaction_model = transaction::ActiveModel {
        customer_id: Set(new.customer_id),
        amount: Set(new.amount),
        description: Set(new.description),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    let result = transaction_model.insert(&txn).await?;

    txn.commit().await?;

    info!(
        "Recorded transaction {} of {} for customer {}",
        result.id, result.amount, result.customer_id
    );
    Ok(result)
}

/// Retrieves every transaction, ordered by ID.
pub async fn get_all_transactions(db: &DatabaseConnection) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .order_by_asc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all transactions for one customer, newest first.
pub async fn get_transactions_for_customer(
    db: &DatabaseConnection,
    customer_id: i64,
) -> Result<Vec<transaction::Model>> {
    Transaction::find()
        .filter(transaction::Column::CustomerId.eq(customer_id))
        .order_by_desc(transaction::Column::CreatedAt)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
