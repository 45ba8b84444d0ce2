//! `players`: list quarterbacks.

use super::common::{or_dash, CommandContext};
use crate::{cli::SourceArgs, models::PlayerSeasonRecord, query::filter_players, Result};

#[derive(Debug, Clone, Default)]
pub struct PlayersParams {
    pub query: Option<String>,
    pub as_json: bool,
}

/// One text line per quarterback.
pub fn format_player_line(player: &PlayerSeasonRecord) -> String {
    format!(
        "{:<24} {:<5} {:>6} yds {:>3} TD {:>3} INT  rating {}",
        player.name,
        player.team.as_deref().unwrap_or("-"),
        or_dash(player.passing_yards),
        or_dash(player.passing_touchdowns),
        or_dash(player.interceptions),
        or_dash(player.passer_rating.map(|r| format!("{:.1}", r))),
    )
}

pub async fn handle_players(source: &SourceArgs, params: PlayersParams) -> Result<()> {
    let context = CommandContext::new(source).await?;
    let snapshot = context.snapshot();
    let players = filter_players(&snapshot.players, params.query.as_deref().unwrap_or(""));

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No quarterbacks found.");
        return Ok(());
    }

    for player in players {
        println!("{}", format_player_line(player));
    }
    Ok(())
}
