//! Expense record model
//!
//! Expenses carry no recurrence logic of their own: the expansion service
//! turns installment and recurring expenses into one virtual record per
//! applicable month before they reach the balance engine. A virtual record
//! remembers its position in the schedule via [`InstallmentPosition`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Classification tag for an expense
///
/// `Essential` is the fixed marker the engine uses to total essential/fixed
/// spend in the balance details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseTag {
    /// Essential/fixed spend (rent, utilities, groceries)
    Essential,
    /// Discretionary spend
    Discretionary,
}

/// Position of a virtual record within an installment schedule (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPosition {
    pub index: u32,
    pub total: u32,
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount,
    InvalidInstallmentPosition { index: u32, total: u32 },
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::InvalidInstallmentPosition { index, total } => {
                write!(f, "Invalid installment position {} of {}", index, total)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(default)]
    pub description: String,
    pub amount: Money,
    pub date: NaiveDate,
    /// Optional classification; `Essential` feeds the fixed-spend total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ExpenseTag>,
    /// Set on virtual records produced by the expansion service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment: Option<InstallmentPosition>,
}

impl Expense {
    /// Create a new untagged expense
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            date,
            tag: None,
            installment: None,
        }
    }

    /// Create a new tagged expense
    pub fn tagged(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        tag: ExpenseTag,
    ) -> Self {
        Self {
            tag: Some(tag),
            ..Self::new(description, amount, date)
        }
    }

    /// Whether this expense carries the essential/fixed-spend marker
    pub fn is_essential(&self) -> bool {
        self.tag == Some(ExpenseTag::Essential)
    }

    /// Validate the expense record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if let Some(pos) = self.installment {
            if pos.index == 0 || pos.total == 0 || pos.index > pos.total {
                return Err(ExpenseValidationError::InvalidInstallmentPosition {
                    index: pos.index,
                    total: pos.total,
                });
            }
        }
        Ok(())
    }
}
