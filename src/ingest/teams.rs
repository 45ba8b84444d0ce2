//! Team defensive payload.
//!
//! Unlike the quarterback payload, only the team and week columns are
//! located, by header text. Every column but the team is kept generically,
//! keyed by its lower-cased header, when its cell is numeric.

use std::collections::BTreeMap;
use tracing::debug;

use super::{numeric::parse_number, records::LogicalRecords};
use crate::{cli::types::Week, models::TeamWeekStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyColumns {
    team: usize,
    week: Option<usize>,
}

fn locate_key_columns(headers: &[String]) -> KeyColumns {
    let team = headers
        .iter()
        .position(|h| h.contains("team"))
        .or_else(|| headers.iter().position(|h| h == "tm"))
        .unwrap_or(0);
    let week = headers
        .iter()
        .position(|h| h.contains("week"))
        .or_else(|| headers.iter().position(|h| h == "wk"))
        .filter(|idx| *idx != team);

    KeyColumns { team, week }
}

fn parse_week(cell: &str) -> Option<Week> {
    let value = parse_number(cell)?;
    if value.fract() != 0.0 || value < 1.0 || value > u16::MAX as f64 {
        return None;
    }
    Week::new(value as u16)
}

/// Parse the team defensive payload, rows in payload order.
pub fn parse_team_stats(text: &str) -> Vec<TeamWeekStats> {
    let mut records = LogicalRecords::new(text);
    let headers: Vec<String> = records
        .header()
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let keys = locate_key_columns(&headers);

    let rows: Vec<_> = records
        .by_ref()
        .map(|fields| {
            let team = fields.get(keys.team).map(|s| s.trim()).unwrap_or("");
            let week = keys
                .week
                .and_then(|idx| fields.get(idx))
                .and_then(|cell| parse_week(cell));

            let stats: BTreeMap<String, f64> = headers
                .iter()
                .zip(fields.iter())
                .enumerate()
                .filter(|(idx, _)| *idx != keys.team)
                .filter_map(|(_, (header, cell))| parse_number(cell).map(|v| (header.clone(), v)))
                .collect();

            TeamWeekStats::new(team, week, stats)
        })
        .collect();

    debug!(
        rows = rows.len(),
        dropped = records.dropped(),
        team_column = keys.team,
        week_column = ?keys.week,
        "parsed team defensive payload"
    );
    rows
}
