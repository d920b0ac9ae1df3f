use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::Cli;

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match get_project_root(&cli).and_then(|root| commands::run(cli, &root)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("  {} {:#}", "✗".red(), e);
            1
        }
    };

    std::process::exit(code);
}
