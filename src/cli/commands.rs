//! Command definitions for the Pomodoro Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{ConfigError, TimerConfig};
use crate::engine::WarningMode;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer - a countdown with threshold warnings
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-timer",
    version,
    about = "Single countdown timer with threshold warnings",
    long_about = "A countdown timer driven from the terminal.\n\
                  Type commands on stdin to start, pause, reset or change the duration.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive countdown
    Run(RunArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Run Command Arguments
// ============================================================================

/// Warning mode as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningModeArg {
    /// Warn once when the threshold is reached
    Threshold,
    /// Warn every second at or below the threshold
    EverySecond,
}

impl From<WarningModeArg> for WarningMode {
    fn from(arg: WarningModeArg) -> Self {
        match arg {
            WarningModeArg::Threshold => WarningMode::Threshold,
            WarningModeArg::EverySecond => WarningMode::EverySecond,
        }
    }
}

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Initial minutes (0-59)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=59))]
    pub minutes: Option<u32>,

    /// Initial seconds (0-59)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=59))]
    pub seconds: Option<u32>,

    /// Milliseconds per tick (1-60000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=60_000))]
    pub tick_millis: Option<u64>,

    /// Which remaining seconds produce a warning
    #[arg(long, value_enum)]
    pub warning_mode: Option<WarningModeArg>,

    /// Start counting down immediately
    #[arg(short, long)]
    pub autostart: bool,

    /// Exit when the countdown completes
    #[arg(short, long)]
    pub exit_on_complete: bool,

    /// Print display states and notifications as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply_to(&self, mut config: TimerConfig) -> TimerConfig {
        if let Some(minutes) = self.minutes {
            config.default_minutes = minutes;
        }
        if let Some(seconds) = self.seconds {
            config.default_seconds = seconds;
        }
        if let Some(millis) = self.tick_millis {
            config.tick_interval_ms = millis;
        }
        if let Some(mode) = self.warning_mode {
            config.warning_mode = mode.into();
        }
        config
    }

    /// Loads the config file, applies overrides and validates the result.
    pub fn resolve_config(&self) -> Result<TimerConfig, ConfigError> {
        let config = self.apply_to(TimerConfig::load(self.config.as_deref())?);
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================
