//! Subscription business logic - Links customers to plans and queries those links.
//!
//! A subscription is a `customer_plans` row carrying a [`PlanStatus`]. Rows are
//! append-only here: subscribing twice creates two rows.

use crate::{
    core::{customer::get_customer_by_id, plan::get_plan_by_id},
    entities::{CustomerPlan, Plan, PlanStatus, customer_plan},
    errors::{Error, Result},
    models::Subscription,
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, warn};

/// Subscribes a customer to a plan with the given status.
///
/// Both records are looked up inside the same store transaction as the insert.
/// A missing customer and a missing plan are reported the same way.
///
/// # Errors
/// Returns [`Error::NotFound`] (`"Customer or plan not found"`) when either record
/// is absent; no row is written in that case.
pub async fn subscribe(
    db: &DatabaseConnection,
    customer_id: i64,
    plan_id: i64,
    status: PlanStatus,
) -> Result<customer_plan::Model> {
    let txn = db.begin().await?;

    let customer = get_customer_by_id(&txn, customer_id).await?;
    let plan = get_plan_by_id(&txn, plan_id).await?;
    if customer.is_none() || plan.is_none() {
        warn!("Subscribe rejected: customer {customer_id} or plan {plan_id} missing");
        return Err(Error::NotFound {
            entity: "Customer or plan",
        });
    }

    let subscription = customer_plan::ActiveModel {
        customer_id: Set(customer_id),
        plan_id: Set(plan_id),
        status: Set(status),
        ..Default::default()
    };
    let result = subscription.insert(&txn).await?;

    txn.commit().await?;

    info!(
        "Customer {customer_id} subscribed to plan {plan_id} as {status:?} (row {})",
        result.id
    );
    Ok(result)
}

/// Lists a customer's subscriptions whose status equals `status`, each joined with
/// its plan.
///
/// # Errors
/// Returns [`Error::NotFound`] when the customer does not exist.
pub async fn list_subscriptions(
    db: &DatabaseConnection,
    customer_id: i64,
    status: PlanStatus,
) -> Result<Vec<Subscription>> {
    get_customer_by_id(db, customer_id)
        .await?
        .ok_or(Error::NotFound { entity: "Customer" })?;

    let rows = CustomerPlan::find()
        .filter(customer_plan::Column::CustomerId.eq(customer_id))
        .filter(customer_plan::Column::Status.eq(status))
        .order_by_asc(customer_plan::Column::Id)
        .find_also_related(Plan)
        .all(db)
        .await?;

    // Every row references a plan that existed at insert time and plans are never deleted.
    Ok(rows
        .into_iter()
        .filter_map(|(row, plan)| plan.map(|plan| Subscription::new(row, plan)))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_subscribe_creates_row() -> Result<()> {
        let (db, customer, plan) = setup_with_customer_and_plan().await?;

        let row = subscribe(&db, customer.id, plan.id, PlanStatus::Active).await?;
        assert_eq!(row.customer_id, customer.id);
        assert_eq!(row.plan_id, plan.id);
        assert_eq!(row.status, PlanStatus::Active);

        let stored = CustomerPlan::find_by_id(row.id).one(&db).await?.unwrap();
        assert_eq!(stored, row);

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_missing_customer_writes_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let plan = create_test_plan(&db, "Basic").await?;

        let result = subscribe(&db, 999, plan.id, PlanStatus::Active).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Customer or plan"
            }
        ));
        assert!(CustomerPlan::find().all(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribe_missing_plan_writes_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let customer = create_test_customer(&db, "Ana").await?;

        let result = subscribe(&db, customer.id, 999, PlanStatus::Pending).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "Customer or plan"
            }
        ));
        assert!(CustomerPlan::find().all(&db).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_subscribing_twice_creates_duplicate_rows() -> Result<()> {
        let (db, customer, plan) = setup_with_customer_and_plan().await?;

        let first = subscribe(&db, customer.id, plan.id, PlanStatus::Active).await?;
        let second = subscribe(&db, customer.id, plan.id, PlanStatus::Active).await?;
        assert_ne!(first.id, second.id);

        let rows = list_subscriptions(&db, customer.id, PlanStatus::Active).await?;
        assert_eq!(rows.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_filters_by_exact_status() -> Result<()> {
        let (db, customer, basic) = setup_with_customer_and_plan().await?;
        let premium = create_test_plan(&db, "Premium").await?;
        let other = create_test_customer(&db, "Luis").await?;

        let active = subscribe(&db, customer.id, basic.id, PlanStatus::Active).await?;
        subscribe(&db, customer.id, premium.id, PlanStatus::Cancelled).await?;
        subscribe(&db, customer.id, premium.id, PlanStatus::Pending).await?;
        subscribe(&db, other.id, basic.id, PlanStatus::Active).await?;

        let rows = list_subscriptions(&db, customer.id, PlanStatus::Active).await?;
        assert_eq!(rows, vec![Subscription::new(active, basic)]);

        let cancelled = list_subscriptions(&db, customer.id, PlanStatus::Cancelled).await?;
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].plan, premium);
        assert!(cancelled.iter().all(|s| s.status == PlanStatus::Cancelled));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_for_missing_customer_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = list_subscriptions(&db, 7, PlanStatus::Active).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "Customer" }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_with_no_matches_is_empty() -> Result<()> {
        let (db, customer, plan) = setup_with_customer_and_plan().await?;
        subscribe(&db, customer.id, plan.id, PlanStatus::Pending).await?;

        let rows = list_subscriptions(&db, customer.id, PlanStatus::Active).await?;
        assert!(rows.is_empty());

        Ok(())
    }
}
