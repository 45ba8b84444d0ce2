//! Quarterback season totals.

use serde::Serialize;

use crate::cli::types::PlayerId;

/// One quarterback's season line.
///
/// Every counting stat is optional: `None` means the source cell was missing
/// or unparseable, which is not the same thing as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeasonRecord {
    pub id: PlayerId,
    pub name: String,
    pub team: Option<String>,

    pub completions: Option<u32>,
    pub attempts: Option<u32>,
    pub passing_yards: Option<i32>,
    pub passing_touchdowns: Option<u32>,
    pub interceptions: Option<u32>,
    pub passer_rating: Option<f64>,
    pub rushing_yards: Option<i32>,
    pub rushing_touchdowns: Option<u32>,
    pub receiving_receptions: Option<u32>,
    pub receiving_yards: Option<i32>,
    pub receiving_touchdowns: Option<u32>,

    pub rank: Option<u32>,
    pub total_points: Option<f64>,
}

impl PlayerSeasonRecord {
    /// A record with identity only and every stat unknown.
    pub fn new(id: PlayerId, name: impl Into<String>, team: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            completions: None,
            attempts: None,
            passing_yards: None,
            passing_touchdowns: None,
            interceptions: None,
            passer_rating: None,
            rushing_yards: None,
            rushing_touchdowns: None,
            receiving_receptions: None,
            receiving_yards: None,
            receiving_touchdowns: None,
            rank: None,
            total_points: None,
        }
    }

    /// Completion percentage, when both completions and attempts are known.
    pub fn completion_pct(&self) -> Option<f64> {
        match (self.completions, self.attempts) {
            (Some(c), Some(a)) if a > 0 => Some(c as f64 / a as f64 * 100.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_pct() {
        let mut qb = PlayerSeasonRecord::new(PlayerId::new("1"), "Test QB", None);
        assert_eq!(qb.completion_pct(), None);

        qb.completions = Some(300);
        qb.attempts = Some(400);
        assert_eq!(qb.completion_pct(), Some(75.0));

        qb.attempts = Some(0);
        assert_eq!(qb.completion_pct(), None);
    }
}
