//! Plan entity - A subscription tier customers can be linked to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plan database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the tier (e.g. "Basic", "Premium")
    pub name: String,
    /// Price in minor currency units
    pub price: i64,
    /// What the tier includes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Defines relationships between Plan and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One plan is referenced by many subscriptions
    #[sea_orm(has_many = "super::customer_plan::Entity")]
    CustomerPlans,
}

impl Related<super::customer_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerPlans.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
