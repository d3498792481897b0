//! Serializable view of a goal event for presentation layers.

use chrono::{NaiveDate, SecondsFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::events_model::GoalEvent;
use crate::money::Currency;

/// A goal event shaped for display: the amount is rounded to the goal
/// currency's decimal places and timestamps are RFC 3339 strings. This is
/// formatting only; no transport contract is implied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalEventView {
    pub id: String,
    pub goal_id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub currency_code: String,
    pub created_at: String,
    pub updated_at: String,
}

impl GoalEventView {
    pub fn from_event(event: &GoalEvent, currency: &Currency) -> Self {
        GoalEventView {
            id: event.id.clone(),
            goal_id: event.goal_id.clone(),
            date: event.date,
            amount: currency.round(event.amount),
            currency_code: currency.code.clone(),
            created_at: event.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: event.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
