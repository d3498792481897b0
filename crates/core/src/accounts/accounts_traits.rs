use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::accounts_model::Account;
use crate::errors::Result;
use crate::users::UserId;

/// Trait for account repository operations.
///
/// Read-only: account lifecycle is owned by the embedding application.
pub trait AccountRepositoryTrait: Send + Sync {
    /// Returns the account with the given id, or `Error::NotFound`.
    fn get_by_id(&self, user: &UserId, account_id: &str) -> Result<Account>;

    /// Lists the user's accounts.
    fn list(&self, user: &UserId) -> Result<Vec<Account>>;
}

/// Trait for resolving an account's balance as of a date.
///
/// Implementations are expected to perform I/O (ledger queries, currency
/// conversion), hence the async seam. An unknown account or currency is an
/// error; a provider must never report a silent zero.
#[async_trait]
pub trait BalanceProviderTrait: Send + Sync {
    /// Exact decimal balance of `account` at end of `date`, expressed in
    /// `currency`. Converts if the account's native currency differs.
    async fn balance_as_of(
        &self,
        user: &UserId,
        account: &Account,
        date: NaiveDate,
        currency: &str,
    ) -> Result<Decimal>;
}
