pub mod command;
pub mod runner;
pub mod targets;
pub mod watcher;

pub use command::{build_command, CommandSpec, DaySelector, FeatureSelector, RunMode};
