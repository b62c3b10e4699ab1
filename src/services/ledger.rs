//! In-memory ledger aggregate
//!
//! Owns the record collections the engine consumes, plus the goal and
//! credit-card collections whose aggregates feed into the committed and
//! saved balances. The ledger also knows how to load and save a JSON
//! snapshot, which is all the persistence this application has.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{
    calculate_balances, calculate_monthly_projection, BalanceBreakdown, MonthlyProjection,
};
use crate::error::{FincastError, FincastResult};
use crate::models::{CardPurchase, Debt, Expense, Income, Money, Month, SavingsGoal};

/// All ledger records, as loaded from a snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub incomes: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub card_purchases: Vec<CardPurchase>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Total money currently held across all savings goals
    pub fn goals_saved(&self) -> Money {
        self.goals.iter().map(|g| g.current_amount).sum()
    }

    /// Credit-card installment burden for the given month
    pub fn card_installments_for(&self, month: Month) -> Money {
        self.card_purchases.iter().map(|p| p.share_for(month)).sum()
    }

    /// Balance breakdown for a month, with goal and card aggregates wired in
    pub fn breakdown_for(&self, month: Month) -> BalanceBreakdown {
        calculate_balances(
            &self.incomes,
            &self.expenses,
            &self.debts,
            month,
            self.goals_saved(),
            self.card_installments_for(month),
        )
    }

    /// Cash-flow forecast starting at `start_month`
    pub fn forecast(&self, start_month: Month, months_ahead: u32) -> Vec<MonthlyProjection> {
        calculate_monthly_projection(
            &self.incomes,
            &self.expenses,
            &self.debts,
            start_month,
            months_ahead,
        )
    }

    /// Validate every record in the ledger
    pub fn validate(&self) -> FincastResult<()> {
        for income in &self.incomes {
            income
                .validate()
                .map_err(|e| FincastError::Validation(format!("income '{}': {}", income.description, e)))?;
        }
        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| FincastError::Validation(format!("expense '{}': {}", expense.description, e)))?;
        }
        for debt in &self.debts {
            debt.validate()
                .map_err(|e| FincastError::Validation(format!("debt '{}': {}", debt.description, e)))?;
        }
        for goal in &self.goals {
            goal.validate()
                .map_err(|e| FincastError::Validation(format!("goal '{}': {}", goal.name, e)))?;
        }
        for purchase in &self.card_purchases {
            purchase
                .validate()
                .map_err(|e| FincastError::Validation(format!("card purchase '{}': {}", purchase.description, e)))?;
        }
        Ok(())
    }

    /// Load and validate a ledger snapshot from a JSON file
    pub fn load(path: &Path) -> FincastResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FincastError::Io(format!("Failed to read ledger file: {}", e)))?;

        let ledger: Ledger = serde_json::from_str(&contents)
            .map_err(|e| FincastError::Json(format!("Failed to parse ledger file: {}", e)))?;

        ledger.validate()?;
        Ok(ledger)
    }

    /// Save the ledger snapshot as pretty-printed JSON
    pub fn save(&self, path: &Path) -> FincastResult<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FincastError::Json(format!("Failed to serialize ledger: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| FincastError::Io(format!("Failed to write ledger file: {}", e)))?;

        Ok(())
    }
}
