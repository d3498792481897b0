use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use chrono_tz::Tz;
use log::debug;
use rust_decimal::Decimal;

use super::calculator;
use super::goals_model::{Attachment, FundingLink, GoalWithAmount, SavingsGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::accounts::{Account, BalanceProviderTrait};
use crate::errors::{Error, Result};
use crate::events::{GoalEvent, GoalEventView};
use crate::money::Currency;
use crate::users::UserId;
use crate::utils::time_utils::{today_in, DEFAULT_VALUATION_TZ};

/// Service for reading savings goals and running the ledger calculator
/// over them.
///
/// Holds no state between calls beyond its collaborators; safe to share
/// across threads.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
    balance_provider: Arc<dyn BalanceProviderTrait>,
    valuation_tz: Tz,
}

impl GoalService {
    pub fn new(
        goal_repository: Arc<dyn GoalRepositoryTrait>,
        balance_provider: Arc<dyn BalanceProviderTrait>,
    ) -> Self {
        GoalService {
            goal_repository,
            balance_provider,
            valuation_tz: DEFAULT_VALUATION_TZ,
        }
    }

    /// Overrides the timezone used to resolve "today" for forecasts.
    pub fn with_timezone(mut self, tz: Tz) -> Self {
        self.valuation_tz = tz;
        self
    }

    fn links(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<FundingLink>> {
        self.goal_repository.links_for_goal(user, &goal.id)
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user: &UserId) -> Result<Vec<SavingsGoal>> {
        self.goal_repository.load_goals(user)
    }

    /// Finds a goal by id first, then by name.
    fn find_goal(
        &self,
        user: &UserId,
        goal_id: Option<&str>,
        name: Option<&str>,
    ) -> Result<Option<SavingsGoal>> {
        debug!("Searching for goal information.");
        if let Some(id) = goal_id {
            if let Some(goal) = self.goal_repository.find_goal(user, id)? {
                debug!("Found goal based on #{}, will return it.", id);
                return Ok(Some(goal));
            }
        }
        if let Some(name) = name {
            if let Some(goal) = self.goal_repository.find_goal_by_name(user, name)? {
                debug!("Found goal based on \"{}\", will return it.", name);
                return Ok(Some(goal));
            }
        }
        debug!("Found nothing.");
        Ok(None)
    }

    fn search_goals(&self, user: &UserId, query: &str, limit: usize) -> Result<Vec<SavingsGoal>> {
        self.goal_repository.search_goals(user, query, limit)
    }

    /// Goals annotated with their saved amount in the display name.
    fn goals_with_amount(&self, user: &UserId) -> Result<Vec<GoalWithAmount>> {
        let goals = self.goal_repository.load_goals(user)?;
        goals
            .into_iter()
            .map(|goal| {
                let amount = self.current_amount(user, &goal, None)?;
                let currency = Currency::known(&goal.currency);
                let display_name = format!("{} ({})", goal.name, currency.format(amount));
                Ok(GoalWithAmount {
                    goal,
                    current_amount: amount,
                    display_name,
                })
            })
            .collect()
    }

    /// Current amount saved in a goal, optionally restricted to one
    /// funding account.
    fn current_amount(
        &self,
        user: &UserId,
        goal: &SavingsGoal,
        account_id: Option<&str>,
    ) -> Result<Decimal> {
        let links = self.links(user, goal)?;
        let sum = calculator::current_amount(&links, account_id);
        debug!(
            "Current amount in goal #{} (\"{}\") is {}",
            goal.id, goal.name, sum
        );
        Ok(sum)
    }

    /// Suggested amount the user should save per month, or zero.
    fn suggested_monthly_amount(&self, user: &UserId, goal: &SavingsGoal) -> Result<Decimal> {
        let current = self.current_amount(user, goal, None)?;
        let today = today_in(self.valuation_tz);
        let currency = Currency::known(&goal.currency);
        Ok(calculator::suggested_monthly_amount(
            goal, current, today, &currency,
        ))
    }

    /// What is left on an account after subtracting every goal funded from
    /// it. May be negative when the account is over-committed.
    async fn left_on_account(
        &self,
        user: &UserId,
        account: &Account,
        as_of: NaiveDate,
    ) -> Result<Decimal> {
        debug!(
            "left_on_account(\"{}\", {})",
            account.name,
            as_of.format("%Y-%m-%d")
        );
        let mut balance = self
            .balance_provider
            .balance_as_of(user, account, as_of, &account.currency)
            .await?;
        debug!("Balance is: {}", balance);

        for goal in self.goal_repository.goals_for_account(user, &account.id)? {
            let amount = self.current_amount(user, &goal, Some(&account.id))?;
            balance -= amount;
            debug!(
                "Goal #{} with amount {}, balance is now {}",
                goal.id, amount, balance
            );
        }
        debug!("Final balance is: {}", balance);
        Ok(balance)
    }

    fn get_events(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<GoalEvent>> {
        self.goal_repository.events_for_goal(user, &goal.id)
    }

    /// Events shaped for display, amounts rounded to the goal currency.
    fn event_views(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<GoalEventView>> {
        let currency = Currency::known(&goal.currency);
        let events = self.get_events(user, goal)?;
        Ok(events
            .iter()
            .map(|event| GoalEventView::from_event(event, &currency))
            .collect())
    }

    fn get_note_text(&self, user: &UserId, goal: &SavingsGoal) -> Result<String> {
        Ok(self
            .goal_repository
            .note_for_goal(user, &goal.id)?
            .unwrap_or_default())
    }

    fn get_attachments(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<Attachment>> {
        self.goal_repository.attachments_for_goal(user, &goal.id)
    }

    /// Retired entry point of the repetition-based exact-amount feature.
    ///
    /// Always fails with [`Error::LegacyDisabled`]. The clamping rule the
    /// feature was built on survives as
    /// [`clamp_transaction`](crate::goals::clamp_transaction).
    fn exact_amount(
        &self,
        _user: &UserId,
        _goal: &SavingsGoal,
        _transaction_group_id: &str,
    ) -> Result<Decimal> {
        Err(Error::LegacyDisabled(
            "goal repetitions are end-of-life".to_string(),
        ))
    }
}
