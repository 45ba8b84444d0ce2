//! Unit tests for the matchup predictor

use super::*;
use crate::{
    cli::types::{PlayerId, Week},
    models::{PlayerSeasonRecord, PredictionOutcome, TeamWeekStats},
};
use std::collections::BTreeMap;

fn row(team: &str, week: Option<u16>, stats: &[(&str, f64)]) -> TeamWeekStats {
    let stats: BTreeMap<String, f64> = stats.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    TeamWeekStats::new(team, week.and_then(Week::new), stats)
}

fn qb(name: &str, yards: Option<i32>, tds: Option<u32>) -> PlayerSeasonRecord {
    let mut player = PlayerSeasonRecord::new(PlayerId::new(name), name, Some("KC".to_string()));
    player.passing_yards = yards;
    player.passing_touchdowns = tds;
    player
}

fn week(n: u16) -> Option<Week> {
    Week::new(n)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn test_aggregate_averages_rows_carrying_each_metric() {
        let teams = vec![
            row("Bills", Some(1), &[("sacks", 2.0), ("int", 1.0)]),
            row("Bills", Some(2), &[("sacks", 4.0)]),
        ];
        let agg = aggregate_team(&teams, "Bills", None).unwrap();

        assert_eq!(agg.rows, 2);
        assert_eq!(agg.metrics["sacks"], 3.0);
        assert_eq!(agg.metrics["int"], 1.0);
    }

    #[test]
    fn test_aggregate_team_name_is_case_sensitive() {
        let teams = vec![row("Bills", Some(1), &[("sacks", 2.0)])];
        assert!(aggregate_team(&teams, "bills", None).is_none());
    }

    #[test]
    fn test_aggregate_respects_cutoff() {
        let teams = vec![
            row("Bills", Some(1), &[("sacks", 2.0)]),
            row("Bills", Some(4), &[("sacks", 10.0)]),
            row("Bills", None, &[("sacks", 4.0)]),
        ];
        let agg = aggregate_team(&teams, "Bills", week(3)).unwrap();

        assert_eq!(agg.rows, 2);
        assert_eq!(agg.metrics["sacks"], 3.0);
    }

    #[test]
    fn test_weeks_count_is_at_least_one() {
        let teams = vec![row("Bills", None, &[("sacks", 2.0)])];
        let agg = aggregate_team(&teams, "Bills", None).unwrap();
        assert_eq!(agg.weeks_count(), 1);
    }

    #[test]
    fn test_league_average_skips_teams_without_metric() {
        let teams = vec![
            row("Bills", Some(1), &[("sacks", 2.0), ("int", 2.0)]),
            row("Bills", Some(2), &[("sacks", 4.0)]),
            row("Jets", Some(1), &[("sacks", 1.0)]),
        ];
        let league = LeagueAverages::compute(&teams, None);

        assert_eq!(league.teams, 2);
        // Bills aggregate 3.0, Jets 1.0.
        assert_eq!(league.get("sacks"), Some(2.0));
        // Only the Bills report interceptions.
        assert_eq!(league.get("int"), Some(2.0));
    }
}

#[cfg(test)]
mod blend_tests {
    use super::*;
    use crate::predict::blend::{blend, metric_factor};

    #[test]
    fn test_metric_factor_directions() {
        assert_eq!(metric_factor(DefensiveMetric::PassingYardsAllowed, 300.0, 250.0), Some(1.2));
        assert_eq!(metric_factor(DefensiveMetric::Sacks, 4.0, 3.0), Some(0.75));
        assert_eq!(metric_factor(DefensiveMetric::PassingYardsAllowed, 300.0, 0.0), None);
        assert_eq!(metric_factor(DefensiveMetric::InterceptionsForced, 0.0, 1.0), None);
    }

    #[test]
    fn test_blend_normalizes_by_present_weights() {
        let teams = vec![
            row("Bills", Some(1), &[("pass_yds", 300.0), ("sacks", 4.0)]),
            row("Jets", Some(1), &[("pass_yds", 200.0), ("sacks", 2.0)]),
        ];
        let league = LeagueAverages::compute(&teams, None);
        let result = blend(&teams[0].stats, &league, &MetricAliases::default()).unwrap();

        let expected = (1.2 * 0.6 + 0.75 * 0.1) / 0.7;
        assert!(close(result.final_factor, expected));
        assert_eq!(result.factors.len(), 2);
        assert_eq!(result.td_factor, None);
    }

    #[test]
    fn test_blend_none_without_usable_metrics() {
        let teams = vec![row("Bills", Some(1), &[("rush_yds", 120.0)])];
        let league = LeagueAverages::compute(&teams, None);
        assert!(blend(&teams[0].stats, &league, &MetricAliases::default()).is_none());
    }
}

#[cfg(test)]
mod matchup_tests {
    use super::*;

    fn even_league() -> Vec<TeamWeekStats> {
        let mut teams = Vec::new();
        for w in 1..=3 {
            teams.push(row("Bills", Some(w), &[("pass_yds", 250.0)]));
            teams.push(row("Jets", Some(w), &[("pass_yds", 250.0)]));
        }
        teams
    }

    #[test]
    fn test_unknown_opponent_degrades_to_no_data() {
        let teams = even_league();
        let aliases = MetricAliases::default();
        let prediction = MatchupPredictor::new(&teams, &aliases).predict(
            &qb("Patrick Mahomes", Some(3000), Some(24)),
            "Nowhere",
            None,
        );

        assert_eq!(prediction.outcome, PredictionOutcome::NoData);
        assert_eq!(prediction.predicted_passing_yards, None);
        assert_eq!(prediction.predicted_passing_tds, None);
        assert!(prediction.summary.contains("No data available"));
        assert!(prediction.summary.contains("Nowhere"));
    }

    #[test]
    fn test_league_average_opponent_is_neutral() {
        let teams = even_league();
        let aliases = MetricAliases::default();
        let prediction = MatchupPredictor::new(&teams, &aliases).predict(
            &qb("Patrick Mahomes", Some(3000), Some(24)),
            "Bills",
            None,
        );

        assert_eq!(prediction.weeks_count, 3);
        assert_eq!(prediction.final_factor, Some(1.0));
        assert_eq!(prediction.predicted_passing_yards, Some(3000.0 / 3.0));
        assert_eq!(prediction.predicted_passing_tds, Some(8.0));
        assert!(prediction.summary.contains("+0.0%"));
        assert!(prediction.summary.contains("Cutoff: All"));
        assert!(prediction.summary.contains("passing yards allowed"));
        assert_eq!(
            prediction.metrics_used,
            vec![DefensiveMetric::PassingYardsAllowed]
        );
    }

    #[test]
    fn test_more_yards_allowed_raises_projection() {
        let aliases = MetricAliases::default();
        let player = qb("Patrick Mahomes", Some(3000), Some(24));

        let baseline_teams = even_league();
        let baseline = MatchupPredictor::new(&baseline_teams, &aliases).predict(&player, "Bills", None);

        let mut generous_teams = even_league();
        for r in generous_teams.iter_mut().filter(|r| r.team == "Bills") {
            r.stats.insert("pass_yds".to_string(), 300.0);
        }
        let generous = MatchupPredictor::new(&generous_teams, &aliases).predict(&player, "Bills", None);

        assert!(generous.final_factor.unwrap() > baseline.final_factor.unwrap());
        assert!(generous.predicted_passing_yards.unwrap() > baseline.predicted_passing_yards.unwrap());
    }

    #[test]
    fn test_week_cutoff_excludes_later_rows() {
        let aliases = MetricAliases::default();
        let player = qb("Patrick Mahomes", Some(3000), Some(24));

        let without_week_four = even_league();
        let mut with_week_four = even_league();
        with_week_four.push(row("Bills", Some(4), &[("pass_yds", 999.0), ("sacks", 9.0)]));

        let a = MatchupPredictor::new(&without_week_four, &aliases).predict(&player, "Bills", week(3));
        let b = MatchupPredictor::new(&with_week_four, &aliases).predict(&player, "Bills", week(3));

        assert_eq!(a, b);
        assert_eq!(b.weeks_count, 3);
        assert!(b.summary.contains("Cutoff: Week 3"));
    }

    #[test]
    fn test_missing_metrics_degrade_to_insufficient_data() {
        let teams = vec![
            row("Bills", Some(1), &[("rush_yds", 120.0)]),
            row("Jets", Some(1), &[("rush_yds", 90.0)]),
        ];
        let aliases = MetricAliases::default();
        let prediction = MatchupPredictor::new(&teams, &aliases).predict(
            &qb("Patrick Mahomes", Some(3000), Some(24)),
            "Bills",
            None,
        );

        assert_eq!(prediction.outcome, PredictionOutcome::InsufficientData);
        assert_eq!(prediction.predicted_passing_yards, None);
        assert!(prediction.summary.contains("Insufficient defensive data"));
    }

    #[test]
    fn test_zero_sacks_cannot_be_a_denominator() {
        let teams = vec![
            row("Bills", Some(1), &[("sacks", 0.0)]),
            row("Jets", Some(1), &[("sacks", 3.0)]),
        ];
        let aliases = MetricAliases::default();
        let prediction = MatchupPredictor::new(&teams, &aliases).predict(
            &qb("Patrick Mahomes", Some(3000), Some(24)),
            "Bills",
            None,
        );
        assert_eq!(prediction.outcome, PredictionOutcome::InsufficientData);
    }

    #[test]
    fn test_dedicated_touchdown_factor() {
        let teams = vec![
            row("Bills", Some(1), &[("pass_yds", 250.0), ("pass_td", 3.0)]),
            row("Jets", Some(1), &[("pass_yds", 250.0), ("pass_td", 1.0)]),
        ];
        let aliases = MetricAliases::default();
        let prediction = MatchupPredictor::new(&teams, &aliases).predict(
            &qb("Patrick Mahomes", Some(3000), Some(20)),
            "Bills",
            None,
        );

        assert_eq!(prediction.final_factor, Some(1.0));
        assert_eq!(prediction.predicted_passing_tds, Some(30.0));
        assert!(prediction
            .metrics_used
            .contains(&DefensiveMetric::PassingTouchdownsAllowed));
    }

    #[test]
    fn test_unknown_season_totals_stay_unknown() {
        let teams = even_league();
        let aliases = MetricAliases::default();
        let prediction = MatchupPredictor::new(&teams, &aliases).predict(
            &qb("Rookie", None, None),
            "Bills",
            None,
        );

        assert_eq!(prediction.outcome, PredictionOutcome::Projected);
        assert_eq!(prediction.predicted_passing_yards, None);
        assert_eq!(prediction.predicted_passing_tds, None);
        assert!(prediction.summary.contains("passing yards unknown"));
    }

    #[test]
    fn test_snapshot_skips_averaging() {
        let teams = vec![
            row("Bills", Some(1), &[("pass_yds", 200.0)]),
            row("Bills", Some(2), &[("pass_yds", 300.0)]),
            row("Jets", Some(1), &[("pass_yds", 250.0)]),
            row("Jets", Some(2), &[("pass_yds", 250.0)]),
        ];
        let aliases = MetricAliases::default();
        let predictor = MatchupPredictor::new(&teams, &aliases);
        let player = qb("Patrick Mahomes", Some(3000), Some(20));

        let snapshot = predictor.predict_snapshot(&player, &teams[1]);
        assert_eq!(snapshot.weeks_count, 2);
        assert_eq!(snapshot.cutoff, week(2));
        assert!(close(snapshot.final_factor.unwrap(), 1.2));
        assert!(close(snapshot.predicted_passing_yards.unwrap(), 1800.0));

        let averaged = predictor.predict(&player, "Bills", week(2));
        assert_eq!(averaged.final_factor, Some(1.0));
        assert_eq!(averaged.predicted_passing_yards, Some(1500.0));
    }

    #[test]
    fn test_rank_orders_by_projected_yards() {
        let teams = even_league();
        let aliases = MetricAliases::default();
        let players = vec![
            qb("Middle", Some(3000), Some(20)),
            qb("Unknown", None, None),
            qb("Top", Some(4500), Some(35)),
            qb("Bottom", Some(1500), Some(8)),
        ];

        let ranked = MatchupPredictor::new(&teams, &aliases).rank(&players, "Bills", None);
        let names: Vec<&str> = ranked.iter().map(|r| r.player.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "Middle", "Bottom", "Unknown"]);
    }

    #[test]
    fn test_prepared_context_reused_across_players() {
        let teams = even_league();
        let aliases = MetricAliases::default();
        let context = MatchupPredictor::new(&teams, &aliases).prepare("Jets", week(2));

        assert_eq!(context.opponent(), "Jets");
        assert_eq!(context.weeks_count(), 2);
        assert_eq!(context.final_factor(), Some(1.0));
        let a = context.project(&qb("A", Some(1000), Some(4)));
        let b = context.project(&qb("B", Some(2000), Some(8)));
        assert_eq!(a.predicted_passing_yards, Some(500.0));
        assert_eq!(b.predicted_passing_yards, Some(1000.0));
    }
}
