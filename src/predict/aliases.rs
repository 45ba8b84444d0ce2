//! Ranked alias table mapping logical defensive metrics to payload headers.
//!
//! The team payload has no fixed schema; the same statistic shows up as
//! `pass_yds`, `Pass Yards Allowed` or `passyd` depending on the release.
//! Each logical metric carries an ordered list of aliases. An alias is a set
//! of substrings that must all appear in the lower-cased header. Aliases are
//! tried in order and the first header (in sorted order) matching the
//! current alias wins.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// A defensive statistic the predictor knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveMetric {
    PassingYardsAllowed,
    CompletionRateAllowed,
    Sacks,
    InterceptionsForced,
    PassingTouchdownsAllowed,
}

/// Which way a metric pushes the matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// More allowed means an easier matchup: factor = opponent / league.
    Allowed,
    /// More forced means a harder matchup: factor = league / opponent.
    Forced,
}

impl DefensiveMetric {
    pub const ALL: [DefensiveMetric; 5] = [
        DefensiveMetric::PassingYardsAllowed,
        DefensiveMetric::CompletionRateAllowed,
        DefensiveMetric::Sacks,
        DefensiveMetric::InterceptionsForced,
        DefensiveMetric::PassingTouchdownsAllowed,
    ];

    /// Metrics that feed the blended factor, in blend order.
    pub const BLENDED: [DefensiveMetric; 4] = [
        DefensiveMetric::PassingYardsAllowed,
        DefensiveMetric::CompletionRateAllowed,
        DefensiveMetric::Sacks,
        DefensiveMetric::InterceptionsForced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DefensiveMetric::PassingYardsAllowed => "passing yards allowed",
            DefensiveMetric::CompletionRateAllowed => "completion rate allowed",
            DefensiveMetric::Sacks => "sacks",
            DefensiveMetric::InterceptionsForced => "interceptions forced",
            DefensiveMetric::PassingTouchdownsAllowed => "passing TDs allowed",
        }
    }

    /// Weight in the blended factor. Touchdowns get their own factor instead.
    pub fn blend_weight(self) -> Option<f64> {
        match self {
            DefensiveMetric::PassingYardsAllowed => Some(0.6),
            DefensiveMetric::CompletionRateAllowed => Some(0.2),
            DefensiveMetric::Sacks => Some(0.1),
            DefensiveMetric::InterceptionsForced => Some(0.1),
            DefensiveMetric::PassingTouchdownsAllowed => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            DefensiveMetric::Sacks | DefensiveMetric::InterceptionsForced => Direction::Forced,
            _ => Direction::Allowed,
        }
    }

    fn default_aliases(self) -> &'static [&'static [&'static str]] {
        match self {
            DefensiveMetric::PassingYardsAllowed => &[&["pass", "yd"], &["pass", "yard"], &["pass"]],
            DefensiveMetric::CompletionRateAllowed => &[&["comp"], &["completion"], &["pct"]],
            DefensiveMetric::Sacks => &[&["sack"]],
            DefensiveMetric::InterceptionsForced => &[&["int"], &["intercept"]],
            DefensiveMetric::PassingTouchdownsAllowed => {
                &[&["pass", "td"], &["pass", "tds"], &["pass", "touchdown"]]
            }
        }
    }
}

impl fmt::Display for DefensiveMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered substring aliases per logical metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricAliases {
    table: BTreeMap<DefensiveMetric, Vec<Vec<String>>>,
}

impl Default for MetricAliases {
    fn default() -> Self {
        let table = DefensiveMetric::ALL
            .iter()
            .map(|metric| {
                let aliases = metric
                    .default_aliases()
                    .iter()
                    .map(|alias| alias.iter().map(|s| s.to_string()).collect())
                    .collect();
                (*metric, aliases)
            })
            .collect();
        Self { table }
    }
}

impl MetricAliases {
    /// Default table with per-metric replacements applied.
    pub fn with_overrides(overrides: BTreeMap<DefensiveMetric, Vec<Vec<String>>>) -> Self {
        let mut aliases = Self::default();
        for (metric, list) in overrides {
            aliases.set(metric, list);
        }
        aliases
    }

    pub fn aliases(&self, metric: DefensiveMetric) -> &[Vec<String>] {
        self.table.get(&metric).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the aliases of one metric. Patterns are lower-cased, and
    /// empty aliases are discarded since they would match any header.
    pub fn set(&mut self, metric: DefensiveMetric, aliases: Vec<Vec<String>>) {
        let aliases = aliases
            .into_iter()
            .map(|alias| {
                alias
                    .into_iter()
                    .map(|p| p.trim().to_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|alias| !alias.is_empty())
            .collect();
        self.table.insert(metric, aliases);
    }

    /// First header matching `metric`'s aliases, in alias priority order.
    pub fn resolve<'a, I>(&self, metric: DefensiveMetric, names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut names: Vec<(&'a str, String)> = names
            .into_iter()
            .map(|name| (name, name.to_lowercase()))
            .collect();
        names.sort();

        self.aliases(metric).iter().find_map(|alias| {
            names
                .iter()
                .find(|(_, lower)| alias.iter().all(|p| lower.contains(p.as_str())))
                .map(|(name, _)| *name)
        })
    }

    /// Resolve every logical metric against one metric map.
    pub fn resolve_all<'a>(&self, stats: &'a BTreeMap<String, f64>) -> ResolvedMetrics<'a> {
        let keys = DefensiveMetric::ALL
            .iter()
            .filter_map(|metric| {
                self.resolve(*metric, stats.keys().map(String::as_str))
                    .map(|key| (*metric, key))
            })
            .collect();
        ResolvedMetrics { keys }
    }
}

/// Header keys located for each logical metric.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedMetrics<'a> {
    keys: BTreeMap<DefensiveMetric, &'a str>,
}

impl<'a> ResolvedMetrics<'a> {
    pub fn key(&self, metric: DefensiveMetric) -> Option<&'a str> {
        self.keys.get(&metric).copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(keys: &[&str]) -> BTreeMap<String, f64> {
        keys.iter().map(|k| (k.to_string(), 1.0)).collect()
    }

    #[test]
    fn test_default_table_covers_every_metric() {
        let aliases = MetricAliases::default();
        for metric in DefensiveMetric::ALL {
            assert!(!aliases.aliases(metric).is_empty(), "{metric} has no aliases");
        }
        assert_eq!(
            aliases.aliases(DefensiveMetric::PassingYardsAllowed)[0],
            vec!["pass", "yd"]
        );
    }

    #[test]
    fn test_alias_priority_beats_header_order() {
        let aliases = MetricAliases::default();
        // "pass att" sorts first but only matches the bare ["pass"] fallback.
        let stats = stats(&["pass att", "pass yds"]);
        let resolved = aliases.resolve_all(&stats);
        assert_eq!(resolved.key(DefensiveMetric::PassingYardsAllowed), Some("pass yds"));
    }

    #[test]
    fn test_fallback_alias_used_when_primary_missing() {
        let aliases = MetricAliases::default();
        let stats = stats(&["passing yards"]);
        assert_eq!(
            aliases.resolve(DefensiveMetric::PassingYardsAllowed, stats.keys().map(String::as_str)),
            Some("passing yards")
        );

        let stats = stats_with_pct();
        assert_eq!(
            aliases.resolve(DefensiveMetric::CompletionRateAllowed, stats.keys().map(String::as_str)),
            Some("opp pct")
        );
    }

    fn stats_with_pct() -> BTreeMap<String, f64> {
        stats(&["opp pct", "sacks"])
    }

    #[test]
    fn test_unmatched_metric_is_absent() {
        let aliases = MetricAliases::default();
        let stats = stats(&["rushing yards", "points"]);
        let resolved = aliases.resolve_all(&stats);
        assert_eq!(resolved.key(DefensiveMetric::Sacks), None);
        assert_eq!(resolved.key(DefensiveMetric::PassingTouchdownsAllowed), None);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let aliases = MetricAliases::default();
        assert_eq!(
            aliases.resolve(DefensiveMetric::Sacks, ["Total Sacks"]),
            Some("Total Sacks")
        );
    }

    #[test]
    fn test_override_replaces_metric_aliases() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            DefensiveMetric::InterceptionsForced,
            vec![vec!["Picks".to_string()], vec![]],
        );
        let aliases = MetricAliases::with_overrides(overrides);

        assert_eq!(
            aliases.aliases(DefensiveMetric::InterceptionsForced),
            &[vec!["picks".to_string()]]
        );
        assert_eq!(
            aliases.resolve(DefensiveMetric::InterceptionsForced, ["int", "def picks"]),
            Some("def picks")
        );
        assert_eq!(
            aliases.aliases(DefensiveMetric::Sacks),
            MetricAliases::default().aliases(DefensiveMetric::Sacks)
        );
    }

    #[test]
    fn test_serde_round_trip_uses_metric_names() {
        let json = serde_json::to_value(MetricAliases::default()).unwrap();
        assert_eq!(json["sacks"], serde_json::json!([["sack"]]));

        let parsed: MetricAliases = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, MetricAliases::default());
    }
}
