//! Core business logic - framework-agnostic operations over the record store.

/// Customer create/read/update/delete
pub mod customer;
/// Invoice validation echo
pub mod invoice;
/// Subscription plans
pub mod plan;
/// Customer-to-plan subscriptions and the status-filtered query
pub mod subscription;
/// Country code to local time lookup
pub mod timezone;
/// Customer transactions
pub mod transaction;
