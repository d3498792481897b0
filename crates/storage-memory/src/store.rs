//! The in-memory store and its trait implementations.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use nestegg_core::accounts::{Account, AccountRepositoryTrait, BalanceProviderTrait};
use nestegg_core::errors::{Error, Result};
use nestegg_core::events::GoalEvent;
use nestegg_core::goals::{Attachment, FundingLink, GoalRepositoryTrait, SavingsGoal};
use nestegg_core::money::parse_amount;
use nestegg_core::users::UserId;

use crate::records::{
    AccountRecord, BalanceRecord, EventRecord, FundingLinkRecord, GoalRecord,
};

#[derive(Default)]
struct Inner {
    goals: Vec<GoalRecord>,
    links: Vec<FundingLinkRecord>,
    accounts: Vec<AccountRecord>,
    events: Vec<EventRecord>,
    balances: Vec<BalanceRecord>,
    attachments: Vec<(String, String, Attachment)>,
}

/// In-memory store implementing the core repository and balance-provider
/// traits. All reads convert stored records to domain models, so parsing
/// errors in stored data surface on access, not on insert.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Inserts a goal record, generating an id when none is set. Returns
    /// the generated or given id.
    pub fn add_goal(&self, mut record: GoalRecord) -> String {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }
        let id = record.id.clone();
        self.inner.write().unwrap().goals.push(record);
        id
    }

    pub fn add_link(&self, record: FundingLinkRecord) {
        self.inner.write().unwrap().links.push(record);
    }

    pub fn add_account(&self, record: AccountRecord) {
        self.inner.write().unwrap().accounts.push(record);
    }

    /// Inserts an event record, generating an id when none is set. Returns
    /// the generated or given id.
    pub fn add_event(&self, mut record: EventRecord) -> String {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }
        let id = record.id.clone();
        self.inner.write().unwrap().events.push(record);
        id
    }

    pub fn add_balance(&self, record: BalanceRecord) {
        self.inner.write().unwrap().balances.push(record);
    }

    pub fn add_attachment(&self, user: &UserId, goal_id: &str, attachment: Attachment) {
        self.inner.write().unwrap().attachments.push((
            user.as_str().to_string(),
            goal_id.to_string(),
            attachment,
        ));
    }

    fn goals_sorted(&self, user: &UserId) -> Result<Vec<SavingsGoal>> {
        let inner = self.inner.read().unwrap();
        let mut goals = inner
            .goals
            .iter()
            .filter(|g| g.user_id == user.as_str())
            .map(SavingsGoal::try_from)
            .collect::<Result<Vec<_>>>()?;
        goals.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
        Ok(goals)
    }
}

impl GoalRepositoryTrait for MemoryStore {
    fn load_goals(&self, user: &UserId) -> Result<Vec<SavingsGoal>> {
        self.goals_sorted(user)
    }

    fn find_goal(&self, user: &UserId, goal_id: &str) -> Result<Option<SavingsGoal>> {
        let inner = self.inner.read().unwrap();
        inner
            .goals
            .iter()
            .find(|g| g.user_id == user.as_str() && g.id == goal_id)
            .map(SavingsGoal::try_from)
            .transpose()
    }

    fn find_goal_by_name(&self, user: &UserId, name: &str) -> Result<Option<SavingsGoal>> {
        let inner = self.inner.read().unwrap();
        inner
            .goals
            .iter()
            .find(|g| g.user_id == user.as_str() && g.name == name)
            .map(SavingsGoal::try_from)
            .transpose()
    }

    fn search_goals(&self, user: &UserId, query: &str, limit: usize) -> Result<Vec<SavingsGoal>> {
        let needle = query.trim().to_lowercase();
        let goals = self.goals_sorted(user)?;
        Ok(goals
            .into_iter()
            .filter(|g| needle.is_empty() || g.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect())
    }

    fn links_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Vec<FundingLink>> {
        let inner = self.inner.read().unwrap();
        let mut links = inner
            .links
            .iter()
            .filter(|l| l.user_id == user.as_str() && l.goal_id == goal_id)
            .map(FundingLink::try_from)
            .collect::<Result<Vec<_>>>()?;
        links.sort_by(|a, b| a.account_id.cmp(&b.account_id));
        Ok(links)
    }

    fn goals_for_account(&self, user: &UserId, account_id: &str) -> Result<Vec<SavingsGoal>> {
        let goal_ids: Vec<String> = {
            let inner = self.inner.read().unwrap();
            inner
                .links
                .iter()
                .filter(|l| l.user_id == user.as_str() && l.account_id == account_id)
                .map(|l| l.goal_id.clone())
                .collect()
        };
        Ok(self
            .goals_sorted(user)?
            .into_iter()
            .filter(|g| goal_ids.contains(&g.id))
            .collect())
    }

    fn events_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Vec<GoalEvent>> {
        let inner = self.inner.read().unwrap();
        let mut events = inner
            .events
            .iter()
            .filter(|e| e.user_id == user.as_str() && e.goal_id == goal_id)
            .map(GoalEvent::try_from)
            .collect::<Result<Vec<_>>>()?;
        // Newest first; id as a tiebreak for same-day events.
        events.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(events)
    }

    fn note_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Option<String>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .goals
            .iter()
            .find(|g| g.user_id == user.as_str() && g.id == goal_id)
            .and_then(|g| g.note.clone()))
    }

    fn attachments_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Vec<Attachment>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .attachments
            .iter()
            .filter(|(uid, gid, _)| uid == user.as_str() && gid == goal_id)
            .map(|(_, _, a)| a.clone())
            .collect())
    }
}

impl AccountRepositoryTrait for MemoryStore {
    fn get_by_id(&self, user: &UserId, account_id: &str) -> Result<Account> {
        let inner = self.inner.read().unwrap();
        inner
            .accounts
            .iter()
            .find(|a| a.user_id == user.as_str() && a.id == account_id)
            .map(Account::from)
            .ok_or_else(|| Error::NotFound(format!("account {}", account_id)))
    }

    fn list(&self, user: &UserId) -> Result<Vec<Account>> {
        let inner = self.inner.read().unwrap();
        let mut accounts: Vec<Account> = inner
            .accounts
            .iter()
            .filter(|a| a.user_id == user.as_str())
            .map(Account::from)
            .collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }
}

#[async_trait]
impl BalanceProviderTrait for MemoryStore {
    /// Most recent stored balance at or before the requested date, in the
    /// requested currency. The store does not convert currencies; a missing
    /// entry for the requested currency is a hard error.
    async fn balance_as_of(
        &self,
        user: &UserId,
        account: &Account,
        date: NaiveDate,
        currency: &str,
    ) -> Result<Decimal> {
        let inner = self.inner.read().unwrap();
        let record = inner
            .balances
            .iter()
            .filter(|b| {
                b.user_id == user.as_str()
                    && b.account_id == account.id
                    && b.currency == currency
                    && b.date <= date
            })
            .max_by_key(|b| b.date);

        match record {
            Some(record) => {
                let balance = parse_amount(&record.balance)?;
                debug!(
                    "Balance of account {} on {} is {} {}",
                    account.id, record.date, currency, balance
                );
                Ok(balance)
            }
            None => Err(Error::MissingDependency(format!(
                "no {} balance known for account {} on or before {}",
                currency, account.id, date
            ))),
        }
    }
}
