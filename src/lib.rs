//! `customer-hub` - HTTP record management for customers, plans and transactions
//!
//! This crate exposes customers, subscription plans, the customer-to-plan
//! association with its status, customer transactions and an invoice echo over a
//! JSON HTTP API backed by `SQLite`.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc, // Will add gradually
)]

/// HTTP interface - axum router, handlers and error responses
pub mod api;
/// Configuration management for database and server settings
pub mod config;
/// Core business logic - framework-agnostic customer, plan, subscription and transaction operations
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Request and response payloads
pub mod models;

#[cfg(test)]
pub mod test_utils;
