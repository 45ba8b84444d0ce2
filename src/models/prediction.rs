//! Matchup prediction output.

use serde::Serialize;

use crate::{cli::types::Week, predict::aliases::DefensiveMetric};

/// How far the predictor got before producing a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionOutcome {
    /// A factor was computed and applied.
    Projected,
    /// The opponent has no rows within the cutoff.
    NoData,
    /// The opponent has rows but none of the weighted metrics were usable.
    InsufficientData,
}

/// Predicted per-game passing output against one opponent.
///
/// Recomputed on every request. The numeric fields are `None` when the
/// opponent could not be assessed or when the quarterback's own season
/// total is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupPrediction {
    pub predicted_passing_yards: Option<f64>,
    pub predicted_passing_tds: Option<f64>,
    pub summary: String,

    pub opponent: String,
    pub cutoff: Option<Week>,
    pub outcome: PredictionOutcome,
    pub final_factor: Option<f64>,
    pub weeks_count: u32,
    pub metrics_used: Vec<DefensiveMetric>,
}

impl MatchupPrediction {
    pub fn is_projected(&self) -> bool {
        self.outcome == PredictionOutcome::Projected
    }
}
