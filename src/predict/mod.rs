//! Matchup prediction.
//!
//! The predictor compares an opponent's defensive metrics with the league
//! average for the same cutoff and turns the ratios into a single factor:
//!
//! 1. [`aggregate`] averages the opponent's rows through the cutoff, and
//!    every team's rows for the league baseline.
//! 2. [`aliases`] locates each logical metric among the payload's headers.
//! 3. [`blend`] turns the located metrics into a weighted factor.
//! 4. [`matchup`] applies the factor to the quarterback's per-game numbers
//!    and writes the summary.
//!
//! Missing data never errors; it degrades into a prediction with empty
//! numbers and an explanation.

pub mod aggregate;
pub mod aliases;
pub mod blend;
pub mod matchup;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate_team, LeagueAverages, TeamAggregate};
pub use aliases::{DefensiveMetric, MetricAliases, ResolvedMetrics};
pub use blend::{Blend, MetricFactor};
pub use matchup::{MatchupContext, MatchupPredictor, RankedMatchup};
