//! Entry point: parse CLI, install logging and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use qb_matchup::{
    cli::{Commands, QbMatchup},
    commands::{
        aliases::handle_aliases,
        players::{handle_players, PlayersParams},
        predict::{handle_predict, PredictParams},
        rank::{handle_rank, RankParams},
        teams::{handle_teams, TeamsParams},
    },
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = QbMatchup::parse();
    init_logging(app.verbose);
    let source = app.source;

    match app.command {
        Commands::Players { query, json } => handle_players(
            &source,
            PlayersParams {
                query,
                as_json: json,
            },
        )
        .await
        .context("listing quarterbacks")?,

        Commands::Teams { team, json } => handle_teams(
            &source,
            TeamsParams {
                team,
                as_json: json,
            },
        )
        .await
        .context("listing teams")?,

        Commands::Predict {
            player,
            opponent,
            week,
            snapshot,
            json,
        } => handle_predict(
            &source,
            PredictParams {
                player: player.clone(),
                opponent,
                week,
                snapshot,
                as_json: json,
            },
        )
        .await
        .with_context(|| format!("predicting matchup for {}", player))?,

        Commands::Rank {
            opponent,
            week,
            limit,
            json,
        } => handle_rank(
            &source,
            RankParams {
                opponent: opponent.clone(),
                week,
                limit,
                as_json: json,
            },
        )
        .await
        .with_context(|| format!("ranking quarterbacks against {}", opponent))?,

        Commands::Aliases { json } => {
            handle_aliases(&source, json).context("reading alias configuration")?
        }
    }

    Ok(())
}
