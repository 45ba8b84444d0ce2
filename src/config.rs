//! Endpoint and alias configuration.
//!
//! Values are layered: the JSON config file, then environment variables,
//! then command-line flags, later layers winning.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    error::{MatchupError, Result},
    predict::{DefensiveMetric, MetricAliases},
    PLAYERS_URL_ENV_VAR, TEAMS_URL_ENV_VAR,
};

/// Path: <config dir>/qb-matchup/config.json
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("qb-matchup").join("config.json")
}

/// On-disk config file. Every field is optional.
///
/// ```json
/// {
///   "players_url": "https://example.com/qbs.csv",
///   "team_stats_url": "https://example.com/defense.csv",
///   "aliases": { "interceptions_forced": [["def int"], ["picks"]] }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub players_url: Option<String>,
    pub team_stats_url: Option<String>,
    /// Per-metric alias lists replacing the defaults.
    pub aliases: BTreeMap<DefensiveMetric, Vec<Vec<String>>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| MatchupError::Config {
            message: format!("{}: {}", path.display(), e),
        })
    }

    /// Load `path` when given (it must exist), else the default location
    /// when it exists, else an empty config.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = default_config_path();
                if path.is_file() {
                    debug!(path = %path.display(), "loading config file");
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Effective configuration after layering.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub players_url: Option<String>,
    pub team_stats_url: Option<String>,
    pub aliases: MetricAliases,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub players_url: Option<String>,
    pub team_stats_url: Option<String>,
}

impl Config {
    /// Layer the file, the process environment and the flags.
    pub fn resolve(file: ConfigFile, cli: CliOverrides) -> Self {
        Self::resolve_with(file, cli, |key| std::env::var(key).ok())
    }

    /// Layer with an explicit environment lookup.
    pub fn resolve_with<F>(file: ConfigFile, cli: CliOverrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Self {
            players_url: non_empty(cli.players_url)
                .or_else(|| non_empty(env(PLAYERS_URL_ENV_VAR)))
                .or_else(|| non_empty(file.players_url)),
            team_stats_url: non_empty(cli.team_stats_url)
                .or_else(|| non_empty(env(TEAMS_URL_ENV_VAR)))
                .or_else(|| non_empty(file.team_stats_url)),
            aliases: MetricAliases::with_overrides(file.aliases),
        }
    }

    pub fn players_url(&self) -> Result<&str> {
        self.players_url
            .as_deref()
            .ok_or_else(|| MatchupError::MissingEndpoint {
                env_var: PLAYERS_URL_ENV_VAR.to_string(),
            })
    }

    pub fn team_stats_url(&self) -> Result<&str> {
        self.team_stats_url
            .as_deref()
            .ok_or_else(|| MatchupError::MissingEndpoint {
                env_var: TEAMS_URL_ENV_VAR.to_string(),
            })
    }
}
