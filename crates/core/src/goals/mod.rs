//! Goals module - domain models, the savings ledger calculator, services,
//! and traits.

pub mod calculator;
mod goals_model;
#[cfg(test)]
mod goals_model_tests;
mod goals_service;
mod goals_traits;

pub use calculator::{clamp_contribution, clamp_transaction, FlowDirection};
pub use goals_model::{Attachment, FundingLink, GoalWithAmount, SavingsGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
