//! Balance & Projection Engine
//!
//! Pure functions that ingest collections of income, expense, and debt
//! records for a target month and produce a three-tier balance breakdown
//! plus a forward-looking monthly projection. The engine never reads the
//! clock and never performs I/O: results depend only on the inputs.
//!
//! Module boundary, to avoid double or missed expansion:
//!
//! - **Expenses arrive pre-expanded.** Installment and recurring expenses
//!   must be turned into one virtual record per applicable month by
//!   [`crate::services::expansion`] before calling the engine. The engine
//!   does no recurrence handling for expenses.
//! - **Debts are expanded here.** The engine itself decides which debts are
//!   active in a month and which installments fall in future months.
//! - Incomes carry their own recurrence flag and are filtered here.

pub mod balance;
pub mod projection;

pub use balance::{calculate_balances, BalanceBreakdown, BalanceDetails};
pub use projection::{calculate_monthly_projection, MonthlyProjection};
