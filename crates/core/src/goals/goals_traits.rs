use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::goals_model::{Attachment, FundingLink, GoalWithAmount, SavingsGoal};
use crate::accounts::Account;
use crate::errors::Result;
use crate::events::{GoalEvent, GoalEventView};
use crate::users::UserId;

/// Trait for goal repository operations.
///
/// All reads are scoped to an explicit [`UserId`]; implementations must not
/// resolve identity from ambient state. Goal lifecycle (create/edit/delete)
/// is owned by the store, so the contract here is read-only.
pub trait GoalRepositoryTrait: Send + Sync {
    /// The user's goals, ordered by `order` ascending, then name.
    fn load_goals(&self, user: &UserId) -> Result<Vec<SavingsGoal>>;

    /// Finds a goal by id, or `None`.
    fn find_goal(&self, user: &UserId, goal_id: &str) -> Result<Option<SavingsGoal>>;

    /// Finds a goal by exact name, or `None`.
    fn find_goal_by_name(&self, user: &UserId, name: &str) -> Result<Option<SavingsGoal>>;

    /// Case-insensitive substring search on goal names, same ordering as
    /// [`load_goals`](Self::load_goals), truncated to `limit`. An empty
    /// query matches everything.
    fn search_goals(&self, user: &UserId, query: &str, limit: usize) -> Result<Vec<SavingsGoal>>;

    /// Funding links of a goal. Ordered by account id for deterministic
    /// tests; callers must not rely on order for correctness.
    fn links_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Vec<FundingLink>>;

    /// Goals funded from the given account.
    fn goals_for_account(&self, user: &UserId, account_id: &str) -> Result<Vec<SavingsGoal>>;

    /// Events of a goal, newest first (date descending, id descending).
    fn events_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Vec<GoalEvent>>;

    /// The goal's note text, if any.
    fn note_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Option<String>>;

    /// Attachment metadata for a goal. Pass-through.
    fn attachments_for_goal(&self, user: &UserId, goal_id: &str) -> Result<Vec<Attachment>>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user: &UserId) -> Result<Vec<SavingsGoal>>;
    fn find_goal(
        &self,
        user: &UserId,
        goal_id: Option<&str>,
        name: Option<&str>,
    ) -> Result<Option<SavingsGoal>>;
    fn search_goals(&self, user: &UserId, query: &str, limit: usize) -> Result<Vec<SavingsGoal>>;
    fn goals_with_amount(&self, user: &UserId) -> Result<Vec<GoalWithAmount>>;
    fn current_amount(
        &self,
        user: &UserId,
        goal: &SavingsGoal,
        account_id: Option<&str>,
    ) -> Result<Decimal>;
    fn suggested_monthly_amount(&self, user: &UserId, goal: &SavingsGoal) -> Result<Decimal>;
    async fn left_on_account(
        &self,
        user: &UserId,
        account: &Account,
        as_of: NaiveDate,
    ) -> Result<Decimal>;
    fn get_events(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<GoalEvent>>;
    fn event_views(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<GoalEventView>>;
    fn get_note_text(&self, user: &UserId, goal: &SavingsGoal) -> Result<String>;
    fn get_attachments(&self, user: &UserId, goal: &SavingsGoal) -> Result<Vec<Attachment>>;
    fn exact_amount(
        &self,
        user: &UserId,
        goal: &SavingsGoal,
        transaction_group_id: &str,
    ) -> Result<Decimal>;
}
