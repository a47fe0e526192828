//! CLI argument definitions using clap
//!
//! Commands:
//! - pair-advisor serve [--config <path>] [--data <csv>] [--host <h>] [--port <p>]
//! - pair-advisor recommend [--config <path>] [--data <csv>] [--min-success <n>] [--min-frequency <f>]
//! - pair-advisor check [--config <path>] [--data <csv>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Retail Product Pair Advisor - smart suggestions for product combinations
#[derive(Parser, Debug)]
#[command(name = "pair-advisor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Path to an optional JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the association rules CSV (overrides the config file)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the interactive dashboard over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Host to bind (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print filtered recommendations as JSON and exit
    Recommend {
        #[command(flatten)]
        source: SourceArgs,

        /// Minimum probability, integer percent 1-100
        #[arg(long)]
        min_success: Option<u32>,

        /// Minimum frequency, percent 0.0-5.0
        #[arg(long)]
        min_frequency: Option<f64>,
    },

    /// Validate the rule file and print a summary
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
