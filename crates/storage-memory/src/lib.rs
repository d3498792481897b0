//! In-memory storage implementation for the savings goal domain.
//!
//! This crate implements the repository and balance-provider traits defined
//! in `nestegg-core` against plain in-process collections. Records keep
//! their amounts as raw strings, as a real storage backend would, and are
//! converted to domain models on every read. It is the reference store used
//! by integration tests and by embedders that load goal data from an
//! external system of record.

mod records;
mod store;

pub use records::{
    AccountRecord, BalanceRecord, EventRecord, FundingLinkRecord, GoalRecord,
};
pub use store::MemoryStore;
