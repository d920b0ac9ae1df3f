use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Prefix every per-day binary target shares (`day` + selector)
pub const BIN_PREFIX: &str = "day";

/// Environment override applied to every test run
pub const BACKTRACE_ENV: (&str, &str) = ("RUST_BACKTRACE", "0");

/// The day a run targets. Never empty; the contents are otherwise taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySelector(String);

impl DaySelector {
    /// Returns `None` for an absent or empty day
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(day) if !day.is_empty() => Some(Self(day.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Binary target name, e.g. `5` -> `day5`
    pub fn bin_name(&self) -> String {
        format!("{}{}", BIN_PREFIX, self.0)
    }
}

/// Cargo feature list forwarded to the test build. Empty means no features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSelector(String);

impl FeatureSelector {
    pub fn parse(raw: Option<&str>) -> Self {
        Self(raw.unwrap_or_default().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// `cargo watch` re-running the tests on every change
    Watch,
    /// A single `cargo test` run
    Once,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watch => "watch",
            Self::Once => "once",
        }
    }
}

/// A fully composed child process: program, discrete argv items and env overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub env: BTreeMap<OsString, OsString>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Single shell line with env prefix, suitable for copy-paste
    pub fn display(&self) -> String {
        let mut parts: Vec<String> = self
            .env
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    k.to_string_lossy(),
                    shell_words::quote(&v.to_string_lossy())
                )
            })
            .collect();
        parts.push(shell_words::quote(&self.program.to_string_lossy()).into_owned());
        parts.extend(
            self.args
                .iter()
                .map(|a| shell_words::quote(&a.to_string_lossy()).into_owned()),
        );
        parts.join(" ")
    }

    /// Argv as plain strings, for JSON output and assertions
    pub fn argv(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.envs(&self.env);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    pub fn to_json(&self) -> serde_json::Value {
        let env: BTreeMap<String, String> = self
            .env
            .iter()
            .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned()))
            .collect();
        serde_json::json!({
            "program": self.program.to_string_lossy(),
            "args": self.argv(),
            "env": env,
            "cwd": self.cwd.as_ref().map(|p| p.display().to_string()),
            "shell": self.display(),
        })
    }
}

/// Arguments of the `cargo test` invocation shared by every mode
pub fn test_args(day: &DaySelector, feature: &FeatureSelector) -> Vec<String> {
    vec![
        "test".to_string(),
        "--release".to_string(),
        "--features".to_string(),
        feature.as_str().to_string(),
        "--bin".to_string(),
        day.bin_name(),
        "--".to_string(),
        "--nocapture".to_string(),
    ]
}

/// Compose the child process for a day. Pure: nothing is spawned here.
pub fn build_command(day: &DaySelector, feature: &FeatureSelector, mode: RunMode) -> CommandSpec {
    let test = test_args(day, feature);
    let spec = match mode {
        // cargo-watch re-splits `-x` with shell rules, so an empty feature must stay quoted
        RunMode::Watch => CommandSpec::new("cargo")
            .arg("watch")
            .arg("-x")
            .arg(shell_words::join(&test)),
        RunMode::Once => CommandSpec::new("cargo").args(test),
    };
    spec.env(BACKTRACE_ENV.0, BACKTRACE_ENV.1)
}
