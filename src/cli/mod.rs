//! CLI module for the Pomodoro Timer.
//!
//! This module provides the terminal front-end:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting and display logic
//! - `input`: Interactive command parsing
//! - `session`: The interactive countdown session

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

pub use commands::{Cli, Commands, RunArgs};
pub use display::Display;
pub use input::{parse_command, InputError, SessionCommand};
pub use session::run_session;
