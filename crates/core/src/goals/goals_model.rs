//! Savings goal domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a savings goal ("piggy bank").
///
/// Read-only to the calculator; creation and editing belong to the goal
/// store. A `target_amount` of zero means the goal is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    /// ISO currency code the goal is denominated in.
    pub currency: String,
    /// Display ordering within the user's goal list.
    pub order: i32,
    pub object_group: Option<String>,
}

impl SavingsGoal {
    /// Validates the goal's invariants.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if self.target_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "target amount must not be negative, got {}",
                self.target_amount
            ))
            .into());
        }
        Ok(())
    }

    /// Whether the goal has no target amount cap.
    pub fn is_unbounded(&self) -> bool {
        self.target_amount.is_zero()
    }
}

/// Association between a goal and one of its funding accounts, carrying the
/// share of the goal's savings attributed to that account.
///
/// Invariant: the sum of all links' `current_amount` for a goal equals the
/// goal's total saved amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingLink {
    pub goal_id: String,
    pub account_id: String,
    pub current_amount: Decimal,
}

/// A goal paired with its computed current amount, for list views that
/// annotate the goal name with the saved balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithAmount {
    pub goal: SavingsGoal,
    pub current_amount: Decimal,
    /// `"{name} ({formatted amount})"`, e.g. `"Vacation (EUR 250.00)"`.
    pub display_name: String,
}

/// Attachment metadata attached to a goal. Pass-through only; the
/// calculator never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub notes_text: String,
    pub file_exists: bool,
}
