//! Fincast - Personal finance tracking and forecasting
//!
//! This library provides the core functionality for the Fincast
//! application. Users record incomes, expenses, debts, savings goals, and
//! credit-card purchases; Fincast derives a three-tier balance breakdown
//! (gross, committed, saved, free) for any month and projects the free
//! balance over a multi-month horizon.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (incomes, expenses, debts, goals, cards)
//! - `engine`: The pure balance & projection calculations
//! - `services`: Business logic layer (ledger aggregate, expense expansion)
//! - `reports`: Dashboard and forecast reports
//! - `display`: Terminal formatting helpers
//! - `export`: CSV export
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fincast::engine::calculate_balances;
//! use fincast::models::{Income, Money, Month};
//!
//! let incomes = vec![Income::recurring(
//!     "Salary",
//!     Money::from_units(5000),
//!     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//! )];
//! let month = Month::new(2025, 3).unwrap();
//!
//! let breakdown =
//!     calculate_balances(&incomes, &[], &[], month, Money::zero(), Money::zero());
//! assert_eq!(breakdown.free_balance, Money::from_units(5000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;

pub use error::FincastError;
