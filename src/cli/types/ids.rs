//! ID types for quarterback records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a quarterback row.
///
/// Comes from the payload's id column when present. Rows without one get a
/// generated token, which differs between two ingestions of the same player.
///
/// # Examples
///
/// ```rust
/// use qb_matchup::PlayerId;
///
/// let id = PlayerId::new("3139477");
/// assert_eq!(id.as_str(), "3139477");
/// assert!(!id.is_generated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(String);

const GENERATED_PREFIX: &str = "gen-";

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random token for a row that carries no identifier.
    pub fn generate() -> Self {
        Self(format!("{GENERATED_PREFIX}{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_generated(&self) -> bool {
        self.0.starts_with(GENERATED_PREFIX)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
