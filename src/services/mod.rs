//! Business logic layer
//!
//! The collaborators around the balance engine: the ledger aggregate that
//! feeds it, and the expansion service that pre-processes installment and
//! recurring expenses into per-month records.

pub mod expansion;
pub mod ledger;

pub use expansion::{expand_installment_expense, expand_recurring_expense};
pub use ledger::Ledger;
