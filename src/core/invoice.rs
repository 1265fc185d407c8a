//! Invoice logic - Invoices are validated on the way in and echoed back.
//!
//! Nothing is persisted and no identifier is assigned.

use crate::models::Invoice;
use tracing::debug;

/// Accepts an already shape-checked invoice and returns it unchanged.
#[must_use]
pub fn create_invoice(invoice: Invoice) -> Invoice {
    match invoice.amount_total() {
        Some(computed) if computed != invoice.total => debug!(
            "Invoice {} states total {} but its lines sum to {computed}",
            invoice.id, invoice.total
        ),
        None => debug!("Invoice {} line amounts overflow when summed", invoice.id),
        Some(_) => {}
    }
    invoice
}
