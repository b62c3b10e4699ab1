//! Income record model
//!
//! An income is either a one-off receipt tied to a single date or a
//! recurring receipt that repeats every month from its first occurrence
//! onward, with no end condition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::month::Month;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A single income record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    #[serde(default)]
    pub description: String,
    pub amount: Money,
    /// Date of the (first) occurrence
    pub date: NaiveDate,
    /// Recurring incomes repeat every month at or after their first month
    #[serde(default)]
    pub is_recurring: bool,
}

impl Income {
    /// Create a new one-off income
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: IncomeId::new(),
            description: description.into(),
            amount,
            date,
            is_recurring: false,
        }
    }

    /// Create a new recurring income starting at the given date
    pub fn recurring(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            is_recurring: true,
            ..Self::new(description, amount, date)
        }
    }

    /// The month of the first occurrence
    pub fn first_month(&self) -> Month {
        Month::containing(self.date)
    }

    /// Whether this income counts toward the given month's totals
    ///
    /// One-off incomes count only in the month containing their date.
    /// Recurring incomes count in their first month and every month after.
    pub fn counts_in(&self, month: Month) -> bool {
        if self.is_recurring {
            self.first_month() <= month
        } else {
            month.contains(self.date)
        }
    }

    /// Validate the income record
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        Ok(())
    }
}
