//! Lookups the front end runs over the loaded collections.

use std::collections::BTreeSet;

use crate::{
    cli::types::Week,
    error::{MatchupError, Result},
    models::{PlayerSeasonRecord, TeamWeekStats},
};

/// Quarterbacks whose name or team contains `query`, ignoring case.
/// An empty query keeps everyone. Payload order is preserved.
pub fn filter_players<'a>(
    players: &'a [PlayerSeasonRecord],
    query: &str,
) -> Vec<&'a PlayerSeasonRecord> {
    let needle = query.trim().to_lowercase();
    players
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.team
                    .as_deref()
                    .is_some_and(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Find one quarterback by id, then exact name, then partial name.
pub fn find_player<'a>(
    players: &'a [PlayerSeasonRecord],
    needle: &str,
) -> Result<&'a PlayerSeasonRecord> {
    let wanted = needle.trim();
    let lower = wanted.to_lowercase();

    players
        .iter()
        .find(|p| p.id.as_str() == wanted)
        .or_else(|| players.iter().find(|p| p.name.to_lowercase() == lower))
        .or_else(|| {
            players
                .iter()
                .find(|p| !lower.is_empty() && p.name.to_lowercase().contains(&lower))
        })
        .ok_or_else(|| MatchupError::PlayerNotFound {
            name: needle.to_string(),
        })
}

/// Distinct team names, sorted.
pub fn team_names(teams: &[TeamWeekStats]) -> Vec<&str> {
    teams
        .iter()
        .map(|row| row.team.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct weeks present, sorted, optionally for a single team.
pub fn available_weeks(teams: &[TeamWeekStats], team: Option<&str>) -> Vec<Week> {
    teams
        .iter()
        .filter(|row| team.map_or(true, |t| row.team == t))
        .filter_map(|row| row.week)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First team, in row order, that is not the quarterback's own team.
pub fn default_opponent<'a>(
    player: &PlayerSeasonRecord,
    teams: &'a [TeamWeekStats],
) -> Option<&'a str> {
    teams
        .iter()
        .map(|row| row.team.as_str())
        .find(|team| Some(*team) != player.team.as_deref())
}

/// The opponent's row for `week`, or its last row in payload order when no
/// week is given.
pub fn snapshot_row<'a>(
    teams: &'a [TeamWeekStats],
    team: &str,
    week: Option<Week>,
) -> Option<&'a TeamWeekStats> {
    let mut rows = teams.iter().filter(|row| row.team == team);
    match week {
        Some(week) => rows.find(|row| row.week == Some(week)),
        None => rows.last(),
    }
}
