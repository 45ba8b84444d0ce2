//! Data providers for the two CSV payloads.
//!
//! The predictor never talks to the network itself. Callers pick a
//! [`StatsProvider`] (HTTP endpoints, local files, or fixed text) and the
//! state store pulls both payloads through it.

pub mod file;
pub mod http;

use std::future::Future;

use crate::{
    ingest::{parse_players, parse_team_stats},
    models::{PlayerSeasonRecord, TeamWeekStats},
    Result,
};

pub use file::{FileProvider, StaticProvider};
pub use http::HttpProvider;

/// Source of the raw quarterback and team-defense payloads.
///
/// Implementors supply the raw text; parsing is shared.
pub trait StatsProvider: Send + Sync {
    /// Raw quarterback season payload.
    fn players_csv(&self) -> impl Future<Output = Result<String>> + Send;

    /// Raw team defensive payload.
    fn team_stats_csv(&self) -> impl Future<Output = Result<String>> + Send;

    fn fetch_players(&self) -> impl Future<Output = Result<Vec<PlayerSeasonRecord>>> + Send {
        async move {
            let text = self.players_csv().await?;
            Ok(parse_players(&text))
        }
    }

    fn fetch_team_stats(&self) -> impl Future<Output = Result<Vec<TeamWeekStats>>> + Send {
        async move {
            let text = self.team_stats_csv().await?;
            Ok(parse_team_stats(&text))
        }
    }
}
