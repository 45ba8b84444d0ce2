//! Week numbers for the NFL regular season.

use crate::error::{MatchupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for week numbers. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Week(u16);

impl Week {
    /// Returns `None` for week 0.
    pub fn new(week: u16) -> Option<Self> {
        (week > 0).then_some(Self(week))
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Whether a row tagged `row_week` falls inside the cutoff `self`.
    /// Rows without a week are season aggregates and always count.
    pub fn includes(&self, row_week: Option<Week>) -> bool {
        row_week.map_or(true, |w| w <= *self)
    }
}

/// Human label for an optional cutoff: `All` or `Week N`.
pub fn cutoff_label(cutoff: Option<Week>) -> String {
    match cutoff {
        Some(w) => format!("Week {}", w),
        None => "All".to_string(),
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = MatchupError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Week::new)
            .ok_or_else(|| MatchupError::InvalidWeek {
                value: s.to_string(),
            })
    }
}
