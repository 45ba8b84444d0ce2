//! `teams`: teams with the weeks they have defensive data for.

use serde::Serialize;

use super::common::CommandContext;
use crate::{
    cli::{types::Week, SourceArgs},
    models::TeamWeekStats,
    query::{available_weeks, team_names},
    Result,
};

#[derive(Debug, Clone, Default)]
pub struct TeamsParams {
    pub team: Option<String>,
    pub as_json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub team: String,
    pub rows: usize,
    pub weeks: Vec<Week>,
}

/// Summaries for every team, or only `team` when given.
pub fn summarize_teams(teams: &[TeamWeekStats], team: Option<&str>) -> Vec<TeamSummary> {
    team_names(teams)
        .into_iter()
        .filter(|name| team.map_or(true, |t| *name == t))
        .map(|name| TeamSummary {
            team: name.to_string(),
            rows: teams.iter().filter(|row| row.team == name).count(),
            weeks: available_weeks(teams, Some(name)),
        })
        .collect()
}

pub fn format_team_line(summary: &TeamSummary) -> String {
    let weeks = if summary.weeks.is_empty() {
        "season totals".to_string()
    } else {
        summary
            .weeks
            .iter()
            .map(|w| w.as_u16().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{:<24} {:>3} rows  weeks: {}", summary.team, summary.rows, weeks)
}

pub async fn handle_teams(source: &SourceArgs, params: TeamsParams) -> Result<()> {
    let context = CommandContext::new(source).await?;
    let snapshot = context.snapshot();
    let summaries = summarize_teams(&snapshot.teams, params.team.as_deref());

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No team defensive data found.");
        return Ok(());
    }

    for summary in &summaries {
        println!("{}", format_team_line(summary));
    }
    Ok(())
}
