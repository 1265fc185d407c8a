//! Plan business logic - Create and list subscription tiers.
//!
//! Plans are never updated or deleted once created.

use crate::{
    entities::{Plan, plan},
    errors::{Error, Result},
    models::NewPlan,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Creates a new plan, performing input validation.
///
/// # Errors
/// Returns an error if:
/// - The plan name is empty or whitespace-only
/// - The price is negative
/// - The database insert operation fails
pub async fn create_plan(db: &DatabaseConnection, new: NewPlan) -> Result<plan::Model> {
    if new.name.trim().is_empty() {
        return Err(Error::validation("Plan name cannot be empty"));
    }

    if new.price < 0 {
        return Err(Error::InvalidAmount { amount: new.price });
    }

    let plan = plan::ActiveModel {
        name: Set(new.name),
        price: Set(new.price),
        description: Set(new.description),
        ..Default::default()
    };

    let result = plan.insert(db).await?;
    info!("Created plan {} ({})", result.id, result.name);
    Ok(result)
}

/// Retrieves every plan, ordered by ID.
pub async fn get_all_plans(db: &DatabaseConnection) -> Result<Vec<plan::Model>> {
    Plan::find()
        .order_by_asc(plan::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a plan by its unique ID.
pub async fn get_plan_by_id<C>(db: &C, plan_id: i64) -> Result<Option<plan::Model>>
where
    C: ConnectionTrait,
{
    Plan::find_by_id(plan_id).one(db).await.map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_plan_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_plan(
            &db,
            NewPlan {
                name: String::new(),
                price: 100,
                description: None,
            },
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        let result = create_plan(
            &db,
            NewPlan {
                name: "Basic".to_string(),
                price: -5,
                description: None,
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -5 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_list_plans() -> Result<()> {
        let db = setup_test_db().await?;

        let basic = create_test_plan(&db, "Basic").await?;
        let premium = create_plan(
            &db,
            NewPlan {
                name: "  Premium ".to_string(),
                price: 2500,
                description: Some("Everything".to_string()),
            },
        )
        .await?;

        assert_eq!(premium.name, "  Premium ");
        assert_eq!(premium.price, 2500);

        let plans = get_all_plans(&db).await?;
        assert_eq!(plans, vec![basic.clone(), premium]);

        let found = get_plan_by_id(&db, basic.id).await?;
        assert_eq!(found, Some(basic));
        assert!(get_plan_by_id(&db, 999).await?.is_none());

        Ok(())
    }
}
