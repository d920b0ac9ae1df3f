use anyhow::Result;
use colored::*;
use serde_json::json;
use std::path::Path;

use daywatch::command::{self, CommandSpec, DaySelector, FeatureSelector, RunMode};
use daywatch::runner;
use daywatch::targets;
use daywatch::watcher;

use crate::cli::Cli;

mod list;
mod run;

/// Execute the parsed invocation and return the process exit code
pub fn run(cli: Cli, root: &Path) -> Result<i32> {
    if cli.list {
        return list::cmd_list(root, cli.json);
    }

    let Some(day) = DaySelector::parse(cli.day.as_deref()) else {
        eprintln!("No day supplied");
        return Ok(1);
    };
    let feature = FeatureSelector::parse(cli.feature.as_deref());

    let options = run::RunOptions {
        mode: if cli.once || cli.native {
            RunMode::Once
        } else {
            RunMode::Watch
        },
        native: cli.native,
        dry_run: cli.dry_run,
        json_mode: cli.json,
    };

    run::cmd_run(root, &day, &feature, options)
}

/// Soft check that the requested binary exists; never blocks the run
fn warn_if_unknown_target(root: &Path, day: &DaySelector) {
    let found = match targets::discover_days(root) {
        Ok(found) if !found.is_empty() => found,
        _ => return,
    };

    let name = day.bin_name();
    if targets::target_exists(&found, &name) {
        return;
    }

    match targets::suggest(&found, day.as_str()) {
        Some(alt) => eprintln!(
            "  {} No {} target in src/bin; did you mean {}?",
            "⚠".yellow(),
            name.cyan(),
            alt.cyan()
        ),
        None => eprintln!(
            "  {} No {} target in src/bin",
            "⚠".yellow(),
            name.cyan()
        ),
    }
}
