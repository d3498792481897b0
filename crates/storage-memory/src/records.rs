//! Stored record types and their conversions to domain models.
//!
//! Amount fields are raw strings, matching how a text-column backend stores
//! them. Conversion applies the domain parsing rules: a blank stored
//! current amount reads as zero, anything else malformed is a validation
//! error, never a silent zero.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use nestegg_core::accounts::Account;
use nestegg_core::errors::Result;
use nestegg_core::events::GoalEvent;
use nestegg_core::goals::{FundingLink, SavingsGoal};
use nestegg_core::money::{parse_amount, parse_stored_amount};

/// Stored savings goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: String,
    pub target_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub currency: String,
    pub order: i32,
    pub object_group: Option<String>,
    pub note: Option<String>,
}

impl TryFrom<&GoalRecord> for SavingsGoal {
    type Error = nestegg_core::Error;

    fn try_from(record: &GoalRecord) -> Result<SavingsGoal> {
        let goal = SavingsGoal {
            id: record.id.clone(),
            name: record.name.clone(),
            target_amount: parse_amount(&record.target_amount)?,
            target_date: record.target_date,
            start_date: record.start_date,
            currency: record.currency.clone(),
            order: record.order,
            object_group: record.object_group.clone(),
        };
        goal.validate()?;
        Ok(goal)
    }
}

/// Stored goal-to-account funding link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FundingLinkRecord {
    pub user_id: String,
    pub goal_id: String,
    pub account_id: String,
    /// Raw stored amount; blank means never funded.
    pub current_amount: String,
}

impl TryFrom<&FundingLinkRecord> for FundingLink {
    type Error = nestegg_core::Error;

    fn try_from(record: &FundingLinkRecord) -> Result<FundingLink> {
        Ok(FundingLink {
            goal_id: record.goal_id.clone(),
            account_id: record.account_id.clone(),
            current_amount: parse_stored_amount(&record.current_amount)?,
        })
    }
}

/// Stored account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub currency: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<&AccountRecord> for Account {
    fn from(record: &AccountRecord) -> Account {
        Account {
            id: record.id.clone(),
            name: record.name.clone(),
            currency: record.currency.clone(),
            is_active: record.is_active,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Stored goal event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub user_id: String,
    pub goal_id: String,
    pub date: NaiveDate,
    pub amount: String,
    pub transaction_group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<&EventRecord> for GoalEvent {
    type Error = nestegg_core::Error;

    fn try_from(record: &EventRecord) -> Result<GoalEvent> {
        Ok(GoalEvent {
            id: record.id.clone(),
            goal_id: record.goal_id.clone(),
            date: record.date,
            amount: parse_amount(&record.amount)?,
            transaction_group_id: record.transaction_group_id.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Stored end-of-day balance of an account in one currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRecord {
    pub user_id: String,
    pub account_id: String,
    pub currency: String,
    pub date: NaiveDate,
    pub balance: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn link_record(amount: &str) -> FundingLinkRecord {
        FundingLinkRecord {
            user_id: "u1".to_string(),
            goal_id: "g1".to_string(),
            account_id: "a1".to_string(),
            current_amount: amount.to_string(),
        }
    }

    #[test]
    fn test_blank_link_amount_reads_as_zero() {
        let link = FundingLink::try_from(&link_record("")).unwrap();
        assert_eq!(link.current_amount, dec!(0));
    }

    #[test]
    fn test_malformed_link_amount_is_an_error() {
        assert!(FundingLink::try_from(&link_record("not-a-number")).is_err());
    }

    #[test]
    fn test_goal_record_conversion_validates() {
        let record = GoalRecord {
            id: "g1".to_string(),
            user_id: "u1".to_string(),
            name: "Vacation".to_string(),
            target_amount: "-5".to_string(),
            target_date: None,
            start_date: None,
            currency: "EUR".to_string(),
            order: 1,
            object_group: None,
            note: None,
        };
        assert!(SavingsGoal::try_from(&record).is_err());
    }
}
