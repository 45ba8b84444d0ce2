//! Local providers: CSV files on disk, or text held in memory.

use std::path::PathBuf;

use super::StatsProvider;
use crate::Result;

/// Reads both payloads from local files on every fetch.
#[derive(Debug, Clone)]
pub struct FileProvider {
    players_path: PathBuf,
    team_stats_path: PathBuf,
}

impl FileProvider {
    pub fn new(players_path: impl Into<PathBuf>, team_stats_path: impl Into<PathBuf>) -> Self {
        Self {
            players_path: players_path.into(),
            team_stats_path: team_stats_path.into(),
        }
    }
}

impl StatsProvider for FileProvider {
    async fn players_csv(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.players_path).await?)
    }

    async fn team_stats_csv(&self) -> Result<String> {
        Ok(tokio::fs::read_to_string(&self.team_stats_path).await?)
    }
}

/// Fixed payloads, for tests and offline demos.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    pub players: String,
    pub team_stats: String,
}

impl StaticProvider {
    pub fn new(players: impl Into<String>, team_stats: impl Into<String>) -> Self {
        Self {
            players: players.into(),
            team_stats: team_stats.into(),
        }
    }
}

impl StatsProvider for StaticProvider {
    async fn players_csv(&self) -> Result<String> {
        Ok(self.players.clone())
    }

    async fn team_stats_csv(&self) -> Result<String> {
        Ok(self.team_stats.clone())
    }
}
