//! Quarterback season payload.

use tracing::debug;

use super::{
    numeric::{parse_count, parse_number, parse_signed},
    records::LogicalRecords,
};
use crate::{cli::types::PlayerId, models::PlayerSeasonRecord};

/// Column positions of the quarterback payload.
///
/// The player dataset is mapped by position, not by header name. The
/// default matches the published layout:
/// `id,name,team,cmp,att,pass_yds,pass_td,int,rate,rush_yds,rush_td,rec,rec_yds,rec_td,rank,fpts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerColumns {
    pub id: usize,
    pub name: usize,
    pub team: usize,
    pub completions: usize,
    pub attempts: usize,
    pub passing_yards: usize,
    pub passing_touchdowns: usize,
    pub interceptions: usize,
    pub passer_rating: usize,
    pub rushing_yards: usize,
    pub rushing_touchdowns: usize,
    pub receiving_receptions: usize,
    pub receiving_yards: usize,
    pub receiving_touchdowns: usize,
    pub rank: usize,
    pub total_points: usize,
}

impl Default for PlayerColumns {
    fn default() -> Self {
        Self {
            id: 0,
            name: 1,
            team: 2,
            completions: 3,
            attempts: 4,
            passing_yards: 5,
            passing_touchdowns: 6,
            interceptions: 7,
            passer_rating: 8,
            rushing_yards: 9,
            rushing_touchdowns: 10,
            receiving_receptions: 11,
            receiving_yards: 12,
            receiving_touchdowns: 13,
            rank: 14,
            total_points: 15,
        }
    }
}

/// Parse the quarterback payload with the default column layout.
pub fn parse_players(text: &str) -> Vec<PlayerSeasonRecord> {
    parse_players_with(text, &PlayerColumns::default())
}

/// Parse the quarterback payload, rows in payload order.
pub fn parse_players_with(text: &str, columns: &PlayerColumns) -> Vec<PlayerSeasonRecord> {
    let mut records = LogicalRecords::new(text);
    let players: Vec<_> = records
        .by_ref()
        .map(|fields| player_from_fields(&fields, columns))
        .collect();

    debug!(
        players = players.len(),
        dropped = records.dropped(),
        "parsed quarterback payload"
    );
    players
}

fn player_from_fields(fields: &[String], columns: &PlayerColumns) -> PlayerSeasonRecord {
    let cell = |idx: usize| fields.get(idx).map(|s| s.trim()).unwrap_or("");

    let id = match cell(columns.id) {
        "" => PlayerId::generate(),
        raw => PlayerId::new(raw),
    };
    let team = match cell(columns.team) {
        "" => None,
        raw => Some(raw.to_string()),
    };

    PlayerSeasonRecord {
        id,
        name: cell(columns.name).to_string(),
        team,
        completions: parse_count(cell(columns.completions)),
        attempts: parse_count(cell(columns.attempts)),
        passing_yards: parse_signed(cell(columns.passing_yards)),
        passing_touchdowns: parse_count(cell(columns.passing_touchdowns)),
        interceptions: parse_count(cell(columns.interceptions)),
        passer_rating: parse_number(cell(columns.passer_rating)),
        rushing_yards: parse_signed(cell(columns.rushing_yards)),
        rushing_touchdowns: parse_count(cell(columns.rushing_touchdowns)),
        receiving_receptions: parse_count(cell(columns.receiving_receptions)),
        receiving_yards: parse_signed(cell(columns.receiving_yards)),
        receiving_touchdowns: parse_count(cell(columns.receiving_touchdowns)),
        rank: parse_count(cell(columns.rank)),
        total_points: parse_number(cell(columns.total_points)),
    }
}
