//! Quarterback projection against one opponent.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

use super::{
    aggregate::{aggregate_team, rows_through, LeagueAverages},
    aliases::{DefensiveMetric, MetricAliases},
    blend::{blend, Blend},
};
use crate::{
    cli::types::{time::cutoff_label, Week},
    models::{MatchupPrediction, PlayerSeasonRecord, PredictionOutcome, TeamWeekStats},
};

/// Predictor over one loaded set of team rows.
#[derive(Debug, Clone, Copy)]
pub struct MatchupPredictor<'a> {
    teams: &'a [TeamWeekStats],
    aliases: &'a MetricAliases,
}

#[derive(Debug, Clone, PartialEq)]
enum Assessment {
    NoData,
    Insufficient,
    Ready(Blend),
}

/// Opponent assessment computed once and applied to any number of
/// quarterbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupContext {
    opponent: String,
    cutoff: Option<Week>,
    weeks_count: u32,
    assessment: Assessment,
}

/// One row of a ranking: a quarterback and their projection.
#[derive(Debug, Clone, Serialize)]
pub struct RankedMatchup<'p> {
    pub player: &'p PlayerSeasonRecord,
    pub prediction: MatchupPrediction,
}

impl<'a> MatchupPredictor<'a> {
    pub fn new(teams: &'a [TeamWeekStats], aliases: &'a MetricAliases) -> Self {
        Self { teams, aliases }
    }

    /// Assess `opponent` using its rows through `cutoff`, averaged.
    pub fn prepare(&self, opponent: &str, cutoff: Option<Week>) -> MatchupContext {
        let Some(aggregate) = aggregate_team(self.teams, opponent, cutoff) else {
            debug!(opponent, cutoff = ?cutoff, "no rows for opponent");
            return MatchupContext::no_data(opponent, cutoff);
        };

        let league = LeagueAverages::compute(self.teams, cutoff);
        self.assess(
            opponent,
            cutoff,
            aggregate.weeks_count(),
            &aggregate.metrics,
            &league,
        )
    }

    /// Assess the opponent from one row taken as-is, with no averaging.
    ///
    /// The row's week is the cutoff for the league baseline and for the
    /// games count, so a snapshot of week 5 compares against the league
    /// through week 5 and divides season totals by the opponent's row count
    /// through week 5.
    pub fn prepare_snapshot(&self, row: &TeamWeekStats) -> MatchupContext {
        let cutoff = row.week;
        let weeks_count = (rows_through(self.teams, &row.team, cutoff).count() as u32).max(1);
        let league = LeagueAverages::compute(self.teams, cutoff);
        self.assess(&row.team, cutoff, weeks_count, &row.stats, &league)
    }

    fn assess(
        &self,
        opponent: &str,
        cutoff: Option<Week>,
        weeks_count: u32,
        metrics: &std::collections::BTreeMap<String, f64>,
        league: &LeagueAverages,
    ) -> MatchupContext {
        let assessment = match blend(metrics, league, self.aliases) {
            Some(blend) => {
                debug!(
                    opponent,
                    final_factor = blend.final_factor,
                    metrics = blend.factors.len(),
                    "opponent assessed"
                );
                Assessment::Ready(blend)
            }
            None => Assessment::Insufficient,
        };

        MatchupContext {
            opponent: opponent.to_string(),
            cutoff,
            weeks_count,
            assessment,
        }
    }

    /// Predict `player`'s per-game passing output against `opponent`.
    pub fn predict(
        &self,
        player: &PlayerSeasonRecord,
        opponent: &str,
        cutoff: Option<Week>,
    ) -> MatchupPrediction {
        self.prepare(opponent, cutoff).project(player)
    }

    /// Same as [`MatchupPredictor::predict`] for a caller holding one row.
    pub fn predict_snapshot(
        &self,
        player: &PlayerSeasonRecord,
        row: &TeamWeekStats,
    ) -> MatchupPrediction {
        self.prepare_snapshot(row).project(player)
    }

    /// Project every quarterback against one opponent, best projection
    /// first. Quarterbacks with unknown yardage go last, in input order.
    pub fn rank<'p>(
        &self,
        players: &'p [PlayerSeasonRecord],
        opponent: &str,
        cutoff: Option<Week>,
    ) -> Vec<RankedMatchup<'p>> {
        let context = self.prepare(opponent, cutoff);

        let mut ranked: Vec<RankedMatchup<'p>> = players
            .par_iter()
            .map(|player| RankedMatchup {
                player,
                prediction: context.project(player),
            })
            .collect();

        ranked.sort_by(|a, b| {
            match (
                a.prediction.predicted_passing_yards,
                b.prediction.predicted_passing_yards,
            ) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        ranked
    }
}

impl MatchupContext {
    /// Context for an opponent with no usable rows.
    pub fn no_data(opponent: &str, cutoff: Option<Week>) -> Self {
        Self {
            opponent: opponent.to_string(),
            cutoff,
            weeks_count: 1,
            assessment: Assessment::NoData,
        }
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn cutoff(&self) -> Option<Week> {
        self.cutoff
    }

    pub fn weeks_count(&self) -> u32 {
        self.weeks_count
    }

    pub fn final_factor(&self) -> Option<f64> {
        match &self.assessment {
            Assessment::Ready(blend) => Some(blend.final_factor),
            _ => None,
        }
    }

    pub fn blend(&self) -> Option<&Blend> {
        match &self.assessment {
            Assessment::Ready(blend) => Some(blend),
            _ => None,
        }
    }

    /// Apply the assessment to one quarterback's season totals.
    pub fn project(&self, player: &PlayerSeasonRecord) -> MatchupPrediction {
        let label = cutoff_label(self.cutoff);

        let blend = match &self.assessment {
            Assessment::NoData => {
                return self.unprojected(
                    PredictionOutcome::NoData,
                    format!(
                        "No data available for {} (cutoff: {}).",
                        self.opponent, label
                    ),
                )
            }
            Assessment::Insufficient => {
                return self.unprojected(
                    PredictionOutcome::InsufficientData,
                    format!(
                        "Insufficient defensive data for {} (cutoff: {}): none of {} could be matched.",
                        self.opponent,
                        label,
                        metric_list(&DefensiveMetric::BLENDED),
                    ),
                )
            }
            Assessment::Ready(blend) => blend,
        };

        let weeks = self.weeks_count as f64;
        let final_factor = blend.final_factor;
        let td_factor = blend.td_factor.unwrap_or(final_factor);

        let yards_per_game = player.passing_yards.map(|y| y as f64 / weeks);
        let tds_per_game = player.passing_touchdowns.map(|t| t as f64 / weeks);
        let predicted_yards = yards_per_game.map(|y| y * final_factor);
        let predicted_tds = tds_per_game.map(|t| t * td_factor);

        let yards_text = match (predicted_yards, yards_per_game) {
            (Some(pred), Some(avg)) => format!(
                "{:.1} passing yards per game ({:+.1}% vs {:.1} season average)",
                pred,
                (final_factor - 1.0) * 100.0,
                avg
            ),
            _ => "passing yards unknown".to_string(),
        };
        let tds_text = match predicted_tds {
            Some(tds) => format!("{:.2} passing TDs per game", tds),
            None => "passing TDs unknown".to_string(),
        };
        let metrics_used = blend.metrics_used();

        let summary = format!(
            "{} vs {}: {}, {}. Metrics used: {}. Cutoff: {}.",
            player.name,
            self.opponent,
            yards_text,
            tds_text,
            metric_list(&metrics_used),
            label
        );

        MatchupPrediction {
            predicted_passing_yards: predicted_yards,
            predicted_passing_tds: predicted_tds,
            summary,
            opponent: self.opponent.clone(),
            cutoff: self.cutoff,
            outcome: PredictionOutcome::Projected,
            final_factor: Some(final_factor),
            weeks_count: self.weeks_count,
            metrics_used,
        }
    }

    fn unprojected(&self, outcome: PredictionOutcome, summary: String) -> MatchupPrediction {
        MatchupPrediction {
            predicted_passing_yards: None,
            predicted_passing_tds: None,
            summary,
            opponent: self.opponent.clone(),
            cutoff: self.cutoff,
            outcome,
            final_factor: None,
            weeks_count: self.weeks_count,
            metrics_used: Vec::new(),
        }
    }
}

fn metric_list(metrics: &[DefensiveMetric]) -> String {
    metrics
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ")
}
