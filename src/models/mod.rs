//! Core data models for Fincast
//!
//! This module contains all the data structures that represent the
//! personal-finance domain: incomes, expenses, debts, savings goals,
//! and credit-card purchases, plus the money and month value types.

pub mod card;
pub mod debt;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod month;

pub use card::CardPurchase;
pub use debt::Debt;
pub use expense::{Expense, ExpenseTag, InstallmentPosition};
pub use goal::SavingsGoal;
pub use ids::{CardPurchaseId, DebtId, ExpenseId, GoalId, IncomeId};
pub use income::Income;
pub use money::Money;
pub use month::Month;
