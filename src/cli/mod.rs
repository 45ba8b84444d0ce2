//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::Week;

/// Where the two payloads come from. Shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Quarterback CSV endpoint (or set `QB_MATCHUP_PLAYERS_URL` env var).
    #[clap(long, global = true)]
    pub players_url: Option<String>,

    /// Team defense CSV endpoint (or set `QB_MATCHUP_TEAMS_URL` env var).
    #[clap(long, global = true)]
    pub teams_url: Option<String>,

    /// Read the quarterback CSV from a local file instead (needs `--teams-file`).
    #[clap(long, global = true)]
    pub players_file: Option<PathBuf>,

    /// Read the team defense CSV from a local file instead (needs `--players-file`).
    #[clap(long, global = true)]
    pub teams_file: Option<PathBuf>,

    /// Config file (default: `<config dir>/qb-matchup/config.json`).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List quarterbacks in payload order.
    Players {
        /// Case-insensitive substring of the name or team.
        #[clap(long, short)]
        query: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List teams with the weeks they have defensive data for.
    Teams {
        /// Only this team (exact name).
        #[clap(long, short)]
        team: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Predict one quarterback's per-game passing output against an opponent.
    Predict {
        /// Player id or name (exact, then substring match).
        #[clap(long, short)]
        player: String,

        /// Opponent team name. Defaults to the first team that is not the player's.
        #[clap(long, short)]
        opponent: Option<String>,

        /// Only use defensive rows through this week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Use the opponent's single row for `--week` (or its last row) without averaging.
        #[clap(long)]
        snapshot: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank every quarterback by projected passing yards against one opponent.
    Rank {
        /// Opponent team name.
        #[clap(long, short)]
        opponent: String,

        /// Only use defensive rows through this week.
        #[clap(long, short)]
        week: Option<Week>,

        /// Show at most this many quarterbacks.
        #[clap(long, short)]
        limit: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print the effective metric alias table.
    Aliases {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "qb-matchup",
    about = "Quarterback matchup projections from public CSV stats"
)]
pub struct QbMatchup {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Log debug diagnostics to stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
