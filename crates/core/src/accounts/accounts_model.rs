//! Account domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing an account that can fund savings goals.
///
/// The calculator only cares about an account's identity and currency;
/// balances come from the [`BalanceProviderTrait`] collaborator.
///
/// [`BalanceProviderTrait`]: crate::accounts::BalanceProviderTrait
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
