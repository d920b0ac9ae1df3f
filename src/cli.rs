use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daywatch",
    version,
    about = "Watch-and-test launcher for per-day Advent of Code binaries",
    long_about = "Re-runs the tests of one dayNN binary in release mode whenever sources change.\nWraps `cargo watch`, or a built-in watcher with --native."
)]
pub struct Cli {
    /// Day to test; selects the `day<DAY>` binary target
    pub day: Option<String>,

    /// Cargo feature(s) to enable for the build under test
    pub feature: Option<String>,

    /// Project root directory (defaults to current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Run the tests once instead of watching
    #[arg(long)]
    pub once: bool,

    /// Use the built-in file watcher instead of `cargo watch`
    #[arg(long, conflicts_with = "once")]
    pub native: bool,

    /// Print the command that would run and exit
    #[arg(long)]
    pub dry_run: bool,

    /// List the day targets found under src/bin
    #[arg(long)]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
