use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "breathe", version, about = "A guided breathing exercise for the terminal")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the time-unit in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Override the countdown start value
    #[arg(long, value_name = "N")]
    pub countdown: Option<u32>,

    /// Skip the launch splash and open the start screen
    #[arg(long)]
    pub skip_launch: bool,
}

impl Cli {
    /// Apply CLI overrides on top of the loaded config.
    ///
    /// Callers re-run `Config::validate` afterwards.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.tick_ms {
            config.timing.time_unit_ms = ms;
        }
        if let Some(from) = self.countdown {
            config.timing.countdown_from = from;
        }
    }
}
