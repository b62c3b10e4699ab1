//! Debt record model
//!
//! Debts are the one record family the balance engine expands by itself:
//! an installment debt is active for as many months as it has installments,
//! while a non-installment debt recurs indefinitely once created.
//!
//! Elapsed months are counted with a fixed 30-day-per-month approximation
//! (floor of elapsed days over 30), not calendar month arithmetic. The
//! figures drift near month boundaries; this is documented behavior carried
//! over from the product and must not be silently changed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use super::money::Money;
use super::month::Month;

/// Fixed month length used for elapsed-month counting
const DAYS_PER_MONTH: i64 = 30;

/// Validation errors for debt records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    NegativeTotalAmount,
    NegativeInstallmentAmount,
    ZeroInstallmentCount,
    CurrentInstallmentPastTotal { current: u32, total: u32 },
}

impl std::fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeTotalAmount => write!(f, "Debt total amount cannot be negative"),
            Self::NegativeInstallmentAmount => {
                write!(f, "Debt installment amount cannot be negative")
            }
            Self::ZeroInstallmentCount => {
                write!(f, "Installment debt must have at least one installment")
            }
            Self::CurrentInstallmentPastTotal { current, total } => {
                write!(f, "Current installment {} exceeds total {}", current, total)
            }
        }
    }
}

impl std::error::Error for DebtValidationError {}

/// A single debt record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    #[serde(default)]
    pub description: String,
    pub total_amount: Money,
    /// Monthly payment; debts imported without one contribute zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_amount: Option<Money>,
    pub created_at: NaiveDate,
    /// Installment debts end after `total_installments` months;
    /// non-installment debts recur indefinitely
    #[serde(default)]
    pub is_installment: bool,
    #[serde(default)]
    pub total_installments: u32,
    /// 1-based index of the installment currently being paid, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_installment: Option<u32>,
}

impl Debt {
    /// Create a new installment debt
    pub fn installment(
        description: impl Into<String>,
        total_amount: Money,
        installment_amount: Money,
        total_installments: u32,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: DebtId::new(),
            description: description.into(),
            total_amount,
            installment_amount: Some(installment_amount),
            created_at,
            is_installment: true,
            total_installments,
            current_installment: None,
        }
    }

    /// Create a new recurring (open-ended) debt
    pub fn recurring(
        description: impl Into<String>,
        monthly_amount: Money,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: DebtId::new(),
            description: description.into(),
            total_amount: monthly_amount,
            installment_amount: Some(monthly_amount),
            created_at,
            is_installment: false,
            total_installments: 0,
            current_installment: None,
        }
    }

    /// Whole months elapsed between creation and the given month's start
    ///
    /// Uses the fixed 30-day unit with floor division, so a creation date
    /// inside the target month yields a negative count.
    pub fn months_elapsed_at(&self, month: Month) -> i64 {
        let days = (month.start_date() - self.created_at).num_days();
        days.div_euclid(DAYS_PER_MONTH)
    }

    /// Installments not yet paid, counting the current one as unpaid
    ///
    /// A missing current index means no installment has been paid yet.
    pub fn remaining_installments(&self) -> u32 {
        self.total_installments
            .saturating_sub(self.current_installment.unwrap_or(0))
    }

    /// Whether this debt is active in the given month
    ///
    /// A debt created after the month's end is never active. Installment
    /// debts stay active while `months_elapsed < total_installments`;
    /// non-installment debts are always active once created.
    pub fn is_active_in(&self, month: Month) -> bool {
        if self.created_at > month.end_date() {
            return false;
        }
        if self.is_installment {
            self.months_elapsed_at(month) < i64::from(self.total_installments)
        } else {
            true
        }
    }

    /// The per-installment amount, or zero when absent
    pub fn installment_or_zero(&self) -> Money {
        self.installment_amount.unwrap_or_else(Money::zero)
    }

    /// Validate the debt record
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.total_amount.is_negative() {
            return Err(DebtValidationError::NegativeTotalAmount);
        }
        if self.installment_amount.is_some_and(|a| a.is_negative()) {
            return Err(DebtValidationError::NegativeInstallmentAmount);
        }
        if self.is_installment {
            if self.total_installments == 0 {
                return Err(DebtValidationError::ZeroInstallmentCount);
            }
            if let Some(current) = self.current_installment {
                if current > self.total_installments {
                    return Err(DebtValidationError::CurrentInstallmentPastTotal {
                        current,
                        total: self.total_installments,
                    });
                }
            }
        }
        Ok(())
    }
}
