//! Averaging team rows through a week cutoff.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::{cli::types::Week, models::TeamWeekStats};

/// One team's rows averaged into a single synthetic row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamAggregate {
    pub team: String,
    pub cutoff: Option<Week>,
    /// Number of rows that went into the average.
    pub rows: u32,
    pub metrics: BTreeMap<String, f64>,
}

impl TeamAggregate {
    /// Games used to turn season totals into per-game figures.
    pub fn weeks_count(&self) -> u32 {
        self.rows.max(1)
    }
}

/// Rows for `team` (exact name) whose week falls inside `cutoff`.
/// Without a cutoff every row for the team is selected.
pub fn rows_through<'a>(
    teams: &'a [TeamWeekStats],
    team: &'a str,
    cutoff: Option<Week>,
) -> impl Iterator<Item = &'a TeamWeekStats> + 'a {
    teams.iter().filter(move |row| {
        row.team == team && cutoff.map_or(true, |c| c.includes(row.week))
    })
}

/// Per-key mean over a set of metric maps. A key only averages over the
/// maps that carry it.
pub fn average_metrics<'a, I>(maps: I) -> BTreeMap<String, f64>
where
    I: IntoIterator<Item = &'a BTreeMap<String, f64>>,
{
    let mut sums: BTreeMap<&'a str, (f64, u32)> = BTreeMap::new();
    for map in maps {
        for (key, value) in map {
            let entry = sums.entry(key.as_str()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(key, (sum, n))| (key.to_string(), sum / n as f64))
        .collect()
}

/// Average `team`'s rows through `cutoff`. `None` when no row qualifies.
pub fn aggregate_team(
    teams: &[TeamWeekStats],
    team: &str,
    cutoff: Option<Week>,
) -> Option<TeamAggregate> {
    let rows: Vec<&TeamWeekStats> = rows_through(teams, team, cutoff).collect();
    if rows.is_empty() {
        return None;
    }

    Some(TeamAggregate {
        team: team.to_string(),
        cutoff,
        rows: rows.len() as u32,
        metrics: average_metrics(rows.iter().map(|row| &row.stats)),
    })
}

/// League-wide baseline: every team aggregated through the cutoff, then
/// each metric averaged across the teams that report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueAverages {
    pub cutoff: Option<Week>,
    pub teams: u32,
    pub averages: BTreeMap<String, f64>,
}

impl LeagueAverages {
    pub fn compute(teams: &[TeamWeekStats], cutoff: Option<Week>) -> Self {
        let names: BTreeSet<&str> = teams.iter().map(|row| row.team.as_str()).collect();
        let aggregates: Vec<TeamAggregate> = names
            .into_iter()
            .filter_map(|name| aggregate_team(teams, name, cutoff))
            .collect();

        Self {
            cutoff,
            teams: aggregates.len() as u32,
            averages: average_metrics(aggregates.iter().map(|agg| &agg.metrics)),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.averages.get(key).copied()
    }
}
