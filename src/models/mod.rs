//! Typed records produced by ingestion and consumed by the predictor.

pub mod player;
pub mod prediction;
pub mod team;

pub use player::PlayerSeasonRecord;
pub use prediction::{MatchupPrediction, PredictionOutcome};
pub use team::TeamWeekStats;
