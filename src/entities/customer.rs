//! Customer entity - A person or organisation that can hold plans and transactions.
//!
//! Optional profile fields are left out of the JSON body when unset.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Store-assigned identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form notes about the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer has many plan subscriptions
    #[sea_orm(has_many = "super::customer_plan::Entity")]
    CustomerPlans,
    /// One customer has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::customer_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerPlans.def()
    }
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
