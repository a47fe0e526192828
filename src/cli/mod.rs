//! CLI module for the pair advisor
//!
//! Provides command-line interface for:
//! - serve: Load rules and serve the dashboard
//! - recommend: One-shot filter printed as JSON
//! - check: Validate the rule file and print a summary

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, SourceArgs};
pub use commands::{check, load_rules, recommend, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
