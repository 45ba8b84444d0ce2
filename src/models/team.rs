//! Team defensive rows, one per team per week.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::Week;

/// Defensive statistics for one team in one week, or a season aggregate
/// row when `week` is `None`.
///
/// `stats` is keyed by the lower-cased header text of the source payload.
/// Header spellings drift between data releases, so nothing here names a
/// metric; see [`crate::predict::aliases`] for how metrics are located.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamWeekStats {
    pub id: String,
    pub team: String,
    pub week: Option<Week>,
    pub stats: BTreeMap<String, f64>,
}

impl TeamWeekStats {
    pub fn new(team: impl Into<String>, week: Option<Week>, stats: BTreeMap<String, f64>) -> Self {
        let team = team.into();
        let id = match week {
            Some(w) => format!("{}-w{}", team, w),
            None => team.clone(),
        };
        Self {
            id,
            team,
            week,
            stats,
        }
    }

    pub fn stat(&self, key: &str) -> Option<f64> {
        self.stats.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_includes_week() {
        let row = TeamWeekStats::new("Bills", Week::new(4), BTreeMap::new());
        assert_eq!(row.id, "Bills-w4");
    }

    #[test]
    fn test_id_without_week_is_team() {
        let row = TeamWeekStats::new("Bills", None, BTreeMap::new());
        assert_eq!(row.id, "Bills");
    }
}
