//! `aliases`: the effective metric alias table.

use super::common::load_config;
use crate::{
    cli::SourceArgs,
    predict::{DefensiveMetric, MetricAliases},
    Result,
};

/// One line per metric: `label: alias | alias`, each alias's patterns
/// joined with `+`.
pub fn format_alias_table(aliases: &MetricAliases) -> Vec<String> {
    DefensiveMetric::ALL
        .iter()
        .map(|metric| {
            let patterns = aliases
                .aliases(*metric)
                .iter()
                .map(|alias| alias.join("+"))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("{:<24} {}", format!("{}:", metric.label()), patterns)
        })
        .collect()
}

/// Needs only the configuration; nothing is fetched.
pub fn handle_aliases(source: &SourceArgs, as_json: bool) -> Result<()> {
    let config = load_config(source)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config.aliases)?);
        return Ok(());
    }

    for line in format_alias_table(&config.aliases) {
        println!("{}", line);
    }
    Ok(())
}
