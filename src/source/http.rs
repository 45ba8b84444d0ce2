//! HTTP provider: one best-effort GET per payload.

use reqwest::Client;
use tracing::debug;

use super::StatsProvider;
use crate::Result;

const USER_AGENT: &str = concat!("qb-matchup/", env!("CARGO_PKG_VERSION"));

/// Fetches both payloads from static CSV endpoints.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    players_url: String,
    team_stats_url: String,
}

impl HttpProvider {
    pub fn new(players_url: impl Into<String>, team_stats_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, players_url, team_stats_url))
    }

    pub fn with_client(
        client: Client,
        players_url: impl Into<String>,
        team_stats_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            players_url: players_url.into(),
            team_stats_url: team_stats_url.into(),
        }
    }

    pub fn players_url(&self) -> &str {
        &self.players_url
    }

    pub fn team_stats_url(&self) -> &str {
        &self.team_stats_url
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        debug!(url, "fetching payload");
        let text = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        debug!(url, bytes = text.len(), "payload received");
        Ok(text)
    }
}

impl StatsProvider for HttpProvider {
    async fn players_csv(&self) -> Result<String> {
        self.get_text(&self.players_url).await
    }

    async fn team_stats_csv(&self) -> Result<String> {
        self.get_text(&self.team_stats_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("qb-matchup/"));
    }

    #[test]
    fn test_urls_kept() {
        let provider = HttpProvider::new("http://a/players.csv", "http://a/teams.csv").unwrap();
        assert_eq!(provider.players_url(), "http://a/players.csv");
        assert_eq!(provider.team_stats_url(), "http://a/teams.csv");
    }
}
