use anyhow::{Context, Result};
use ignore::WalkBuilder;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::command::BIN_PREFIX;

/// A per-day binary target found under `src/bin`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayTarget {
    pub name: String,
    pub day: u32,
    /// Relative to the project root
    pub path: PathBuf,
}

fn bin_dir(root: &Path) -> PathBuf {
    root.join("src").join("bin")
}

fn day_pattern() -> Result<Regex> {
    Regex::new(&format!(r"^{}(\d+)$", BIN_PREFIX)).context("invalid day target pattern")
}

/// Find every `dayNN.rs` / `dayNN/main.rs` binary, ordered by day number
pub fn discover_days(root: &Path) -> Result<Vec<DayTarget>> {
    let dir = bin_dir(root);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let pattern = day_pattern()?;
    let mut targets = Vec::new();

    let walker = WalkBuilder::new(&dir)
        .hidden(true)
        .git_ignore(true)
        .max_depth(Some(2))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }

        let relative = path.strip_prefix(&dir).unwrap_or(path);
        let name = match relative.components().count() {
            // src/bin/day05.rs
            1 => path.file_stem().and_then(|s| s.to_str()),
            // src/bin/day05/main.rs
            2 if path.file_name().and_then(|n| n.to_str()) == Some("main.rs") => relative
                .components()
                .next()
                .and_then(|c| c.as_os_str().to_str()),
            _ => None,
        };
        let Some(name) = name else { continue };

        let Some(day) = pattern
            .captures(name)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        else {
            continue;
        };

        targets.push(DayTarget {
            name: name.to_string(),
            day,
            path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
        });
    }

    targets.sort_by(|a, b| a.day.cmp(&b.day).then_with(|| a.name.cmp(&b.name)));
    Ok(targets)
}

pub fn target_exists(targets: &[DayTarget], name: &str) -> bool {
    targets.iter().any(|t| t.name == name)
}

/// Another spelling of the same numeric day, e.g. `day05` when `day5` was asked for
pub fn suggest(targets: &[DayTarget], day: &str) -> Option<String> {
    let wanted: u32 = day.parse().ok()?;
    let requested = format!("{}{}", BIN_PREFIX, day);
    targets
        .iter()
        .find(|t| t.day == wanted && t.name != requested)
        .map(|t| t.name.clone())
}
