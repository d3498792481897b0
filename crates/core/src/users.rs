//! Tenant identity.
//!
//! The original design resolved the "current user" from ambient framework
//! state. Here the identity is an explicit value passed into every
//! collaborator call; the calculator itself never reads ambient identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the user (tenant) whose goals and accounts are being read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
