//! Gemstone CLI — command-line front end for the ingestion pipeline.
//!
//! Runs the data-ingestion stage by default; the `config` subcommand
//! manages the layered configuration.

mod commands;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Gemstone: data ingestion for the price-prediction pipeline
#[derive(Parser, Debug)]
#[command(name = "gemstone", version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source dataset, overriding the configured path
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Seed for the train-test split (omit for a fresh random split)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
enum ConfigAction {
    /// Create default configuration file
    Init,
    /// Show current configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up tracing: human-readable stderr + JSON file logging
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Human-readable layer for stderr (always active)
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    // JSON file layer for structured logging
    let log_dir = PathBuf::from("logs");
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "gemstone.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    // Handle subcommands
    if let Some(command) = cli.command {
        return commands::handle_command(command, cli.config.as_deref());
    }

    // Load configuration and apply CLI overrides
    let mut config = gemstone_pipeline::load_config(cli.config.as_deref(), None)
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;
    if let Some(source) = cli.source {
        config.ingestion.source_data_path = source;
    }
    if let Some(seed) = cli.seed {
        config.ingestion.seed = Some(seed);
    }

    let report = gemstone_pipeline::DataIngestion::new(config.ingestion).run()?;

    println!("Train data path: {}", report.train_data_path.display());
    println!("Test data path: {}", report.test_data_path.display());

    Ok(())
}
