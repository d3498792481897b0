//! Goal event domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A deposit to or withdrawal from a goal. Positive amounts are deposits,
/// negative amounts withdrawals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    pub id: String,
    pub goal_id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    /// Ledger transaction group the event originated from, if any.
    pub transaction_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
