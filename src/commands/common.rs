//! Shared setup for every command: configuration, provider selection and
//! the initial load into the state store.

use crate::{
    cli::SourceArgs,
    config::{CliOverrides, Config, ConfigFile},
    error::{MatchupError, Result},
    source::{FileProvider, HttpProvider, StatsProvider},
    state::{FetchOutcome, RefreshReport, StatsSnapshot, StatsStore},
};

/// The provider picked from the command-line source flags.
#[derive(Debug, Clone)]
pub enum SelectedProvider {
    Http(HttpProvider),
    File(FileProvider),
}

impl StatsProvider for SelectedProvider {
    async fn players_csv(&self) -> Result<String> {
        match self {
            SelectedProvider::Http(p) => p.players_csv().await,
            SelectedProvider::File(p) => p.players_csv().await,
        }
    }

    async fn team_stats_csv(&self) -> Result<String> {
        match self {
            SelectedProvider::Http(p) => p.team_stats_csv().await,
            SelectedProvider::File(p) => p.team_stats_csv().await,
        }
    }
}

/// Load the config file and layer env vars and flags over it.
pub fn load_config(source: &SourceArgs) -> Result<Config> {
    let file = ConfigFile::load_or_default(source.config.as_deref())?;
    Ok(Config::resolve(
        file,
        CliOverrides {
            players_url: source.players_url.clone(),
            team_stats_url: source.teams_url.clone(),
        },
    ))
}

/// Local files win over endpoints. Both files must be given together.
pub fn select_provider(source: &SourceArgs, config: &Config) -> Result<SelectedProvider> {
    match (&source.players_file, &source.teams_file) {
        (Some(players), Some(teams)) => Ok(SelectedProvider::File(FileProvider::new(
            players.clone(),
            teams.clone(),
        ))),
        (None, None) => Ok(SelectedProvider::Http(HttpProvider::new(
            config.players_url()?,
            config.team_stats_url()?,
        )?)),
        _ => Err(MatchupError::Config {
            message: "--players-file and --teams-file must be given together".to_string(),
        }),
    }
}

/// Context containing what every command needs after the initial load
pub struct CommandContext {
    pub config: Config,
    pub store: StatsStore,
    pub report: RefreshReport,
}

impl CommandContext {
    /// Resolve config, pick a provider and load both collections.
    pub async fn new(source: &SourceArgs) -> Result<Self> {
        let config = load_config(source)?;
        let provider = select_provider(source, &config)?;
        let context = Self::load(&provider, config).await;
        context.warn_failures();
        Ok(context)
    }

    /// Load through an explicit provider.
    pub async fn load<P: StatsProvider>(provider: &P, config: Config) -> Self {
        let store = StatsStore::spawn();
        let report = store.refresh(provider).await;
        Self {
            config,
            store,
            report,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        self.store.snapshot()
    }

    fn warn_failures(&self) {
        if let FetchOutcome::Failed { error } = &self.report.players {
            eprintln!("⚠ Could not load quarterback stats: {}", error);
        }
        if let FetchOutcome::Failed { error } = &self.report.teams {
            eprintln!("⚠ Could not load team defensive stats: {}", error);
        }
    }
}

/// `-` for a missing value.
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::MetricAliases;
    use std::path::PathBuf;

    fn config_with_urls() -> Config {
        Config {
            players_url: Some("http://localhost/qbs.csv".to_string()),
            team_stats_url: Some("http://localhost/defense.csv".to_string()),
            aliases: MetricAliases::default(),
        }
    }

    #[test]
    fn test_files_win_over_urls() {
        let source = SourceArgs {
            players_file: Some(PathBuf::from("qbs.csv")),
            teams_file: Some(PathBuf::from("defense.csv")),
            ..SourceArgs::default()
        };
        let provider = select_provider(&source, &config_with_urls()).unwrap();
        assert!(matches!(provider, SelectedProvider::File(_)));
    }

    #[test]
    fn test_urls_used_without_files() {
        let provider = select_provider(&SourceArgs::default(), &config_with_urls()).unwrap();
        match provider {
            SelectedProvider::Http(http) => {
                assert_eq!(http.players_url(), "http://localhost/qbs.csv")
            }
            other => panic!("Expected Http provider, got {:?}", other),
        }
    }

    #[test]
    fn test_single_file_is_rejected() {
        let source = SourceArgs {
            players_file: Some(PathBuf::from("qbs.csv")),
            ..SourceArgs::default()
        };
        let result = select_provider(&source, &config_with_urls());
        assert!(matches!(result, Err(MatchupError::Config { .. })));
    }

    #[test]
    fn test_missing_url_is_reported() {
        let config = Config {
            players_url: None,
            ..config_with_urls()
        };
        let result = select_provider(&SourceArgs::default(), &config);
        assert!(matches!(result, Err(MatchupError::MissingEndpoint { .. })));
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some(12)), "12");
        assert_eq!(or_dash::<u32>(None), "-");
    }
}
