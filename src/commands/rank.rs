//! `rank`: every quarterback against one opponent, best projection first.

use super::common::{or_dash, CommandContext};
use crate::{
    cli::{
        types::{time::cutoff_label, Week},
        SourceArgs,
    },
    predict::{MatchupPredictor, MetricAliases, RankedMatchup},
    state::StatsSnapshot,
    Result,
};

#[derive(Debug, Clone, Default)]
pub struct RankParams {
    pub opponent: String,
    pub week: Option<Week>,
    pub limit: Option<usize>,
    pub as_json: bool,
}

pub fn run_rank<'p>(
    snapshot: &'p StatsSnapshot,
    aliases: &MetricAliases,
    params: &RankParams,
) -> Vec<RankedMatchup<'p>> {
    let predictor = MatchupPredictor::new(&snapshot.teams, aliases);
    let mut ranked = predictor.rank(&snapshot.players, params.opponent.trim(), params.week);
    if let Some(limit) = params.limit {
        ranked.truncate(limit);
    }
    ranked
}

pub fn format_ranked_line(position: usize, entry: &RankedMatchup<'_>) -> String {
    format!(
        "{:>3}. {:<24} {:<5} {:>7} yds {:>5} TD",
        position,
        entry.player.name,
        entry.player.team.as_deref().unwrap_or("-"),
        or_dash(
            entry
                .prediction
                .predicted_passing_yards
                .map(|y| format!("{:.1}", y))
        ),
        or_dash(
            entry
                .prediction
                .predicted_passing_tds
                .map(|t| format!("{:.2}", t))
        ),
    )
}

pub async fn handle_rank(source: &SourceArgs, params: RankParams) -> Result<()> {
    let context = CommandContext::new(source).await?;
    let snapshot = context.snapshot();
    let ranked = run_rank(&snapshot, &context.config.aliases, &params);

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No quarterbacks loaded.");
        return Ok(());
    }

    // One shared assessment, so one explanation.
    if let Some(first) = ranked.first().filter(|e| !e.prediction.is_projected()) {
        println!("{}", first.prediction.summary);
        return Ok(());
    }

    println!(
        "Quarterbacks vs {} (cutoff: {})",
        params.opponent.trim(),
        cutoff_label(params.week)
    );
    for (i, entry) in ranked.iter().enumerate() {
        println!("{}", format_ranked_line(i + 1, entry));
    }
    Ok(())
}
