//! Error types for the quarterback matchup toolkit

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MatchupError>;

#[derive(Error, Debug)]
pub enum MatchupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Endpoint not provided and {env_var} environment variable not set")]
    MissingEndpoint { env_var: String },

    #[error("Invalid week: {value} (weeks start at 1)")]
    InvalidWeek { value: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("No team defensive data loaded")]
    NoTeamData,

    #[error("State store is no longer running")]
    StoreClosed,
}
