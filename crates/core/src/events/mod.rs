//! Events module - goal deposit/withdrawal records and their display views.

mod events_model;
mod events_view;

pub use events_model::GoalEvent;
pub use events_view::GoalEventView;
