//! Quarterback Matchup Library
//!
//! Loads public quarterback season stats and team defensive stats from two
//! CSV payloads and projects a quarterback's per-game passing output against
//! a chosen opponent.
//!
//! ## Features
//!
//! - **Tolerant Ingestion**: naive comma splitting with reassembly of records
//!   broken across lines; malformed rows are dropped, never fatal
//! - **Schema-free Team Stats**: defensive metrics are located through a
//!   configurable alias table instead of fixed column names
//! - **Matchup Projection**: weighted blend of opponent-vs-league factors,
//!   optionally cut off at a given week
//! - **Ranking**: every quarterback against one opponent, computed in parallel
//! - **Single-owner State**: fetches feed one owner task that publishes
//!   immutable snapshots
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qb_matchup::{MatchupPredictor, MetricAliases, StaticProvider, StatsStore, Week};
//!
//! # async fn example() -> qb_matchup::Result<()> {
//! let provider = StaticProvider::new(
//!     "id,name,team,cmp,att,pass_yds\n1,Josh Allen,BUF,300,450,3800\n",
//!     "team,week,pass yds,sacks\nJets,1,210,3\nBills,1,190,2\n",
//! );
//! let store = StatsStore::spawn();
//! store.refresh(&provider).await;
//!
//! let snapshot = store.snapshot();
//! let aliases = MetricAliases::default();
//! let predictor = MatchupPredictor::new(&snapshot.teams, &aliases);
//! let prediction = predictor.predict(&snapshot.players[0], "Jets", Week::new(1));
//! println!("{}", prediction.summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the two endpoints to avoid passing them in every command:
//! ```bash
//! export QB_MATCHUP_PLAYERS_URL=https://example.com/qbs.csv
//! export QB_MATCHUP_TEAMS_URL=https://example.com/defense.csv
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod predict;
pub mod query;
pub mod source;
pub mod state;

// Re-export commonly used types
pub use cli::types::{PlayerId, Week};
pub use config::Config;
pub use error::{MatchupError, Result};
pub use models::{MatchupPrediction, PlayerSeasonRecord, PredictionOutcome, TeamWeekStats};
pub use predict::{DefensiveMetric, MatchupPredictor, MetricAliases};
pub use source::{FileProvider, HttpProvider, StaticProvider, StatsProvider};
pub use state::{StateUpdate, StatsSnapshot, StatsStore};

pub const PLAYERS_URL_ENV_VAR: &str = "QB_MATCHUP_PLAYERS_URL";
pub const TEAMS_URL_ENV_VAR: &str = "QB_MATCHUP_TEAMS_URL";
