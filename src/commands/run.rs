use super::*;

pub(super) struct RunOptions {
    pub mode: RunMode,
    pub native: bool,
    pub dry_run: bool,
    pub json_mode: bool,
}

fn mode_label(options: &RunOptions) -> &'static str {
    if options.native {
        "native"
    } else {
        options.mode.as_str()
    }
}

pub(super) fn cmd_run(
    root: &Path,
    day: &DaySelector,
    feature: &FeatureSelector,
    options: RunOptions,
) -> Result<i32> {
    let spec: CommandSpec = command::build_command(day, feature, options.mode).cwd(root);

    if options.dry_run {
        if options.json_mode {
            println!(
                "{}",
                json!({
                    "command": "dry-run",
                    "day": day.as_str(),
                    "feature": feature.as_str(),
                    "target": day.bin_name(),
                    "mode": mode_label(&options),
                    "spec": spec.to_json(),
                })
            );
        } else {
            println!("{}", spec.display());
        }
        return Ok(0);
    }

    warn_if_unknown_target(root, day);

    if options.native {
        eprintln!(
            "\n  {} {} {}\n",
            "daywatch".cyan().bold(),
            "—".dimmed(),
            day.bin_name().white().bold()
        );
        watcher::watch_day(root, &spec)?;
        return Ok(0);
    }

    if options.mode == RunMode::Watch && !runner::cargo_watch_available() {
        eprintln!(
            "  {} cargo-watch not found on PATH; install it or use {}",
            "⚠".yellow(),
            "--native".cyan()
        );
    }

    match runner::run(&spec) {
        Ok(code) => Ok(code),
        Err(e) => {
            eprintln!("  {} {:#}", "✗".red(), e);
            Ok(runner::FALLBACK_EXIT_CODE)
        }
    }
}
