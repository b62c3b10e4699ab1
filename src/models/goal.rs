//! Savings goal model
//!
//! The balance engine only ever sees the aggregate of all goal current
//! amounts; individual goals exist for the dashboard and progress display.

use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// Validation errors for savings goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    NegativeTargetAmount,
    NegativeCurrentAmount,
}

impl std::fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeTargetAmount => write!(f, "Goal target amount cannot be negative"),
            Self::NegativeCurrentAmount => write!(f, "Goal saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

/// A savings goal with a target and the amount set aside so far
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Money,
    #[serde(default)]
    pub current_amount: Money,
}

impl SavingsGoal {
    /// Create a new goal with nothing saved yet
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
        }
    }

    /// Create a goal with an amount already saved
    pub fn with_saved(name: impl Into<String>, target_amount: Money, saved: Money) -> Self {
        Self {
            current_amount: saved,
            ..Self::new(name, target_amount)
        }
    }

    /// Progress toward the target as a percentage (0.0 when the target is zero)
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.is_zero() {
            return 0.0;
        }
        (self.current_amount.cents() as f64 / self.target_amount.cents() as f64) * 100.0
    }

    /// Whether the goal has been fully funded
    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTargetAmount);
        }
        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrentAmount);
        }
        Ok(())
    }
}
