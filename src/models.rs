//! Request and response payloads that are not persisted entities.
//!
//! Persisted records are serialized straight from the `entities` models; the types
//! here describe what clients send in and the composite shapes sent back.

use crate::entities::{CustomerPlanModel, PlanModel, PlanStatus};
use serde::{Deserialize, Serialize};

/// Body of `POST /customers`
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    /// Display name, must not be blank
    pub name: String,
    /// Free-form notes
    pub description: Option<String>,
    /// Contact email
    pub email: Option<String>,
    /// Age in years
    pub age: Option<i32>,
}

/// Body of `PATCH /customer/{id}`.
///
/// The outer `Option` records whether the field was sent at all; the inner one
/// whether it was sent as `null`. Only fields that were sent are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    /// New display name; `null` is rejected
    #[serde(default, deserialize_with = "serde_with::rust::double_option::deserialize")]
    pub name: Option<Option<String>>,
    /// New notes, or `null` to clear them
    #[serde(default, deserialize_with = "serde_with::rust::double_option::deserialize")]
    pub description: Option<Option<String>>,
    /// New email, or `null` to clear it
    #[serde(default, deserialize_with = "serde_with::rust::double_option::deserialize")]
    pub email: Option<Option<String>>,
    /// New age, or `null` to clear it
    #[serde(default, deserialize_with = "serde_with::rust::double_option::deserialize")]
    pub age: Option<Option<i32>>,
}

impl CustomerUpdate {
    /// True when the request carried no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.email.is_none()
            && self.age.is_none()
    }
}

/// Body of `POST /plans`
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlan {
    /// Name of the tier
    pub name: String,
    /// Price in minor currency units
    pub price: i64,
    /// What the tier includes
    pub description: Option<String>,
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    /// Customer the transaction is charged to
    pub customer_id: i64,
    /// Amount in minor currency units
    pub amount: i64,
    /// Human-readable description
    pub description: String,
}

/// Query string carrying the subscription status filter
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlanStatusQuery {
    /// Status to create with, or to filter by
    pub plan_status: PlanStatus,
}

/// A customer's subscription row with the plan it points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    /// ID of the association row
    pub id: i64,
    /// ID of the subscribed customer
    pub customer_id: i64,
    /// ID of the plan
    pub plan_id: i64,
    /// Status of this row
    pub status: PlanStatus,
    /// The plan itself
    pub plan: PlanModel,
}

impl Subscription {
    /// Joins an association row with its plan.
    #[must_use]
    pub fn new(row: CustomerPlanModel, plan: PlanModel) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            plan_id: row.plan_id,
            status: row.status,
            plan,
        }
    }
}

/// Customer block of an invoice.
///
/// Optional fields keep the distinction between absent and `null` so the invoice
/// is echoed exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCustomer {
    /// Identifier of the customer
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form notes
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    /// Contact email
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    /// Age in years
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<Option<i32>>,
}

/// A line on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTransaction {
    /// Identifier of the transaction
    pub id: i64,
    /// Amount in minor currency units
    pub amount: i64,
    /// Human-readable description
    pub description: String,
}

/// Transient invoice; validated and echoed back, never stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Caller-assigned invoice number
    pub id: i64,
    /// Customer being invoiced
    pub customer: InvoiceCustomer,
    /// Lines on the invoice
    pub transactions: Vec<InvoiceTransaction>,
    /// Total stated by the caller
    pub total: i64,
}

impl Invoice {
    /// Sum of the amounts of every line, or `None` if it does not fit in an `i64`.
    #[must_use]
    pub fn amount_total(&self) -> Option<i64> {
        self.transactions
            .iter()
            .try_fold(0_i64, |sum, line| sum.checked_add(line.amount))
    }
}
