//! Weighted blend of per-metric factors.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{
    aggregate::LeagueAverages,
    aliases::{DefensiveMetric, Direction, MetricAliases},
};

/// One metric's contribution to the blend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricFactor {
    pub metric: DefensiveMetric,
    /// Header key the metric was found under.
    pub key: String,
    pub opponent: f64,
    pub league: f64,
    pub factor: f64,
    pub weight: f64,
}

/// Blended matchup factor for one opponent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blend {
    pub factors: Vec<MetricFactor>,
    pub final_factor: f64,
    /// Dedicated touchdown factor, when the touchdown metric is usable.
    pub td_factor: Option<f64>,
}

impl Blend {
    pub fn metrics_used(&self) -> Vec<DefensiveMetric> {
        let mut used: Vec<DefensiveMetric> = self.factors.iter().map(|f| f.metric).collect();
        if self.td_factor.is_some() {
            used.push(DefensiveMetric::PassingTouchdownsAllowed);
        }
        used
    }
}

/// Direction-adjusted ratio of opponent to league.
///
/// The value in the denominator must be positive: the league average for
/// allowed metrics, the opponent's own value for forced ones.
pub fn metric_factor(metric: DefensiveMetric, opponent: f64, league: f64) -> Option<f64> {
    match metric.direction() {
        Direction::Allowed => (league > 0.0).then(|| opponent / league),
        Direction::Forced => (opponent > 0.0).then(|| league / opponent),
    }
}

/// Blend every usable weighted metric. `None` when no metric is usable.
///
/// The result is `Σ(factor·weight) / Σ(weight)` over the usable metrics, so
/// missing metrics shrink the denominator rather than counting as neutral.
pub fn blend(
    opponent: &BTreeMap<String, f64>,
    league: &LeagueAverages,
    aliases: &MetricAliases,
) -> Option<Blend> {
    let resolved = aliases.resolve_all(opponent);

    let usable = |metric: DefensiveMetric| -> Option<(String, f64, f64, f64)> {
        let key = resolved.key(metric)?;
        let opp = *opponent.get(key)?;
        let avg = league.get(key)?;
        let factor = metric_factor(metric, opp, avg)?;
        Some((key.to_string(), opp, avg, factor))
    };

    let factors: Vec<MetricFactor> = DefensiveMetric::BLENDED
        .iter()
        .filter_map(|metric| {
            let weight = metric.blend_weight()?;
            let (key, opponent_value, league_value, factor) = usable(*metric)?;
            Some(MetricFactor {
                metric: *metric,
                key,
                opponent: opponent_value,
                league: league_value,
                factor,
                weight,
            })
        })
        .collect();

    if factors.is_empty() {
        return None;
    }

    let weighted: f64 = factors.iter().map(|f| f.factor * f.weight).sum();
    let total_weight: f64 = factors.iter().map(|f| f.weight).sum();
    let td_factor = usable(DefensiveMetric::PassingTouchdownsAllowed).map(|(_, _, _, f)| f);

    Some(Blend {
        factors,
        final_factor: weighted / total_weight,
        td_factor,
    })
}
