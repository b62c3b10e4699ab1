//! Credit-card purchase model
//!
//! The balance engine receives a single aggregate: the month's credit-card
//! installment burden. This model is the concrete collaborator behind that
//! number: each purchase spreads its total over a window of consecutive
//! months starting at the purchase month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::CardPurchaseId;
use super::money::Money;
use super::month::Month;

/// Validation errors for card purchases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    NegativeAmount,
    ZeroInstallments,
}

impl std::fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Card purchase amount cannot be negative"),
            Self::ZeroInstallments => {
                write!(f, "Card purchase must have at least one installment")
            }
        }
    }
}

impl std::error::Error for CardValidationError {}

/// A credit-card purchase, possibly split into installments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardPurchase {
    pub id: CardPurchaseId,
    #[serde(default)]
    pub description: String,
    pub total_amount: Money,
    pub date: NaiveDate,
    /// Number of monthly installments; 1 for a one-off purchase
    pub installments: u32,
}

impl CardPurchase {
    /// Create a new purchase
    pub fn new(
        description: impl Into<String>,
        total_amount: Money,
        date: NaiveDate,
        installments: u32,
    ) -> Self {
        Self {
            id: CardPurchaseId::new(),
            description: description.into(),
            total_amount,
            date,
            installments,
        }
    }

    /// The first month of the installment window
    pub fn first_month(&self) -> Month {
        Month::containing(self.date)
    }

    /// This purchase's share for the given month, zero outside its window
    ///
    /// The total is split into even cent shares with the remainder folded
    /// into the first installment, so the shares sum back to the total.
    pub fn share_for(&self, month: Month) -> Money {
        if self.installments == 0 {
            return Money::zero();
        }
        let first = self.first_month();
        if month < first || month >= first.add_months(self.installments as i32) {
            return Money::zero();
        }
        let shares = self.total_amount.split_even(self.installments);
        let offset = (i64::from(month.year) * 12 + i64::from(month.month))
            - (i64::from(first.year) * 12 + i64::from(first.month));
        shares[offset as usize]
    }

    /// Validate the purchase
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.total_amount.is_negative() {
            return Err(CardValidationError::NegativeAmount);
        }
        if self.installments == 0 {
            return Err(CardValidationError::ZeroInstallments);
        }
        Ok(())
    }
}
