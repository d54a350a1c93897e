use std::path::PathBuf;

use clap::Parser;

/// A desktop Pomodoro timer with a task list, driven from the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Arguments {
    /// Path to a custom configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Override the work duration, in minutes
    #[arg(long)]
    pub work: Option<u64>,
    /// Override the short break duration, in minutes
    #[arg(long)]
    pub short_break: Option<u64>,
    /// Override the long break duration, in minutes
    #[arg(long)]
    pub long_break: Option<u64>,
    /// Override how many completed work phases earn a long break
    #[arg(long)]
    pub long_break_interval: Option<u32>,
    /// Maximum level of log messages
    #[arg(short, long, default_value_t = tracing::Level::WARN)]
    pub verbosity: tracing::Level,
}
