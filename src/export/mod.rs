//! Export module for Fincast
//!
//! Provides CSV export of ledger records (spreadsheet-compatible). Report
//! CSVs live with the reports themselves.

pub mod csv;

pub use csv::{export_debts_csv, export_expenses_csv, export_incomes_csv};
