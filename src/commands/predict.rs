//! `predict`: one quarterback against one opponent.

use super::common::{or_dash, CommandContext};
use crate::{
    cli::{types::Week, SourceArgs},
    error::MatchupError,
    models::MatchupPrediction,
    predict::{MatchupContext, MatchupPredictor, MetricAliases},
    query::{default_opponent, find_player, snapshot_row},
    state::StatsSnapshot,
    Result,
};

/// Parameters for the predict command
#[derive(Debug, Clone, Default)]
pub struct PredictParams {
    /// Player id or name.
    pub player: String,
    /// Defaults to the first team that is not the player's own.
    pub opponent: Option<String>,
    pub week: Option<Week>,
    /// Use one opponent row as-is instead of averaging.
    pub snapshot: bool,
    pub as_json: bool,
}

/// Resolve the player and opponent, then predict against the loaded rows.
pub fn run_predict(
    snapshot: &StatsSnapshot,
    aliases: &MetricAliases,
    params: &PredictParams,
) -> Result<MatchupPrediction> {
    let player = find_player(&snapshot.players, &params.player)?;
    let opponent = match params.opponent.as_deref() {
        Some(opponent) => opponent.trim().to_string(),
        None => default_opponent(player, &snapshot.teams)
            .ok_or(MatchupError::NoTeamData)?
            .to_string(),
    };

    let predictor = MatchupPredictor::new(&snapshot.teams, aliases);
    if !params.snapshot {
        return Ok(predictor.predict(player, &opponent, params.week));
    }

    Ok(match snapshot_row(&snapshot.teams, &opponent, params.week) {
        Some(row) => predictor.predict_snapshot(player, row),
        None => MatchupContext::no_data(&opponent, params.week).project(player),
    })
}

/// Summary plus a short factor line when a projection was made.
pub fn format_prediction(prediction: &MatchupPrediction) -> String {
    match prediction.final_factor {
        Some(factor) => format!(
            "{}\n  factor {:.3} over {} games, {} yds, {} TDs",
            prediction.summary,
            factor,
            prediction.weeks_count,
            or_dash(prediction.predicted_passing_yards.map(|y| format!("{:.1}", y))),
            or_dash(prediction.predicted_passing_tds.map(|t| format!("{:.2}", t))),
        ),
        None => prediction.summary.clone(),
    }
}

pub async fn handle_predict(source: &SourceArgs, params: PredictParams) -> Result<()> {
    let context = CommandContext::new(source).await?;
    let snapshot = context.snapshot();
    let prediction = run_predict(&snapshot, &context.config.aliases, &params)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("{}", format_prediction(&prediction));
    }
    Ok(())
}
