//! reconsim CLI - Paired Trade Dataset Simulation
//!
//! Operational entry point for the reconsim pipeline.
//!
//! # Commands
//!
//! - `reconsim generate` - Build the paired internal/external datasets
//! - `reconsim confirm` - Render confirmation documents from an external CSV
//! - `reconsim check` - Report configuration and probe upstream sources
//!
//! Defaults come from `reconsim.toml` (or built-in defaults when the file
//! is absent); flags override the file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use config::SimConfig;
pub use error::{CliError, Result};

/// reconsim paired dataset simulator CLI
#[derive(Parser)]
#[command(name = "reconsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "reconsim.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the paired internal/external datasets
    Generate {
        /// Number of internal trades to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Fraction of records receiving a discrepancy, in [0, 1]
        #[arg(short, long)]
        error_rate: Option<f64>,

        /// Seed for the run's random source
        #[arg(short, long)]
        seed: Option<u64>,

        /// Keep the external dataset in internal row order
        #[arg(long)]
        no_shuffle: bool,

        /// Skip all network lookups and use the built-in data
        #[arg(long)]
        offline: bool,

        /// Directory the two dataset files are written to
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Render confirmation documents from an external dataset CSV
    Confirm {
        /// External dataset CSV path
        #[arg(short, long, default_value = "data/external_trades.csv")]
        input: PathBuf,

        /// Output directory for confirmation documents
        #[arg(short, long, default_value = "confirmations/external")]
        output_dir: PathBuf,

        /// Party label stamped on each document
        #[arg(short, long, default_value = "External")]
        party: String,
    },

    /// Report the effective configuration and probe upstream sources
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    let config = SimConfig::load(&cli.config)?;

    match cli.command {
        Commands::Generate {
            count,
            error_rate,
            seed,
            no_shuffle,
            offline,
            data_dir,
        } => {
            let mut config = config;
            if let Some(count) = count {
                config.trade_count = count;
            }
            if let Some(error_rate) = error_rate {
                config.error_rate = error_rate;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if no_shuffle {
                config.shuffle = false;
            }
            if offline {
                config.offline = true;
            }
            if let Some(data_dir) = data_dir {
                config.data_dir = data_dir;
            }
            commands::generate::run(&config)
        }
        Commands::Confirm {
            input,
            output_dir,
            party,
        } => commands::confirm::run(&input, &output_dir, &party),
        Commands::Check => commands::check::run(&config),
    }
}
