//! Customer plan entity - Links a customer to a plan with a status.
//!
//! The same (customer, plan) pair may appear any number of times; each row is
//! one subscription event and carries its own `status`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// Subscription is in force
    #[sea_orm(string_value = "active")]
    Active,
    /// Requested but not yet in force
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Ended by the customer or operator
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// Customer plan database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer_plans")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the subscribed customer
    pub customer_id: i64,
    /// ID of the plan subscribed to
    pub plan_id: i64,
    /// Current status of this subscription row
    pub status: PlanStatus,
}

/// Defines relationships between `CustomerPlan` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each subscription belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
    /// Each subscription points at one plan
    #[sea_orm(
        belongs_to = "super::plan::Entity",
        from = "Column::PlanId",
        to = "super::plan::Column::Id"
    )]
    Plan,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
