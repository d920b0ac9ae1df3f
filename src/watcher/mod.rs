use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Component, Path};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::command::CommandSpec;
use crate::runner;

/// Minimum gap between the end of one test run and the start of the next
pub const DEBOUNCE: Duration = Duration::from_secs(1);

const TICK: Duration = Duration::from_millis(500);

const IGNORED_DIRS: &[&str] = &[".git", "target", "node_modules"];

/// True when every path of the event lives in a build or VCS directory of the project
pub fn is_ignored(project_root: &Path, event: &Event) -> bool {
    event.paths.iter().all(|p| {
        let relative = p.strip_prefix(project_root).unwrap_or(p);
        relative.components().any(|c| match c {
            Component::Normal(name) => IGNORED_DIRS.iter().any(|dir| name == *dir),
            _ => false,
        })
    })
}

fn is_change(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

fn run_once(spec: &CommandSpec) {
    let stamp = Local::now().format("%H:%M:%S");
    match runner::spawn_and_wait(spec) {
        Ok(status) if status.success() => {
            eprintln!("  {}  [{}] tests passed", "✓".green(), stamp);
        }
        Ok(status) => {
            eprintln!(
                "  {}  [{}] tests failed (exit {})",
                "✗".red(),
                stamp,
                runner::exit_code(status)
            );
        }
        Err(e) => {
            eprintln!("  {}  [{}] {:#}", "✗".red(), stamp, e);
        }
    }
}

/// Run `spec` now and again after every relevant change under `project_root`
pub fn watch_day(project_root: &Path, spec: &CommandSpec) -> Result<()> {
    watch_day_until(project_root, spec, || false)
}

/// Same as [`watch_day`], returning once `stop` reports true (checked every tick)
pub fn watch_day_until<F>(project_root: &Path, spec: &CommandSpec, stop: F) -> Result<()>
where
    F: Fn() -> bool,
{
    // event paths are reported under the watched path, so watch the canonical one
    let root = project_root
        .canonicalize()
        .unwrap_or_else(|_| project_root.to_path_buf());

    let (tx, rx) = mpsc::channel();

    let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
        if let Ok(event) = res {
            tx.send(event).ok();
        }
    })
    .context("failed to start file watcher")?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .with_context(|| format!("failed to watch {}", root.display()))?;

    run_once(spec);
    eprintln!("  👁  Watching for changes... (Ctrl+C to stop)");

    let mut last_run = Instant::now();
    // edits seen since the last run started; survives the debounce window
    let mut pending = false;

    while !stop() {
        match rx.recv_timeout(TICK) {
            Ok(event) => {
                if is_change(&event.kind) && !is_ignored(&root, &event) {
                    pending = true;
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if pending && last_run.elapsed() >= DEBOUNCE {
            pending = false;
            eprintln!("  ⟳  Change detected, re-running tests...");
            run_once(spec);
            last_run = Instant::now();
        }
    }

    Ok(())
}
