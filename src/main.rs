use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::info;

use fittrack::config::AppConfig;
use fittrack::logging::{init_logging, LogLevel};
use fittrack::packet::{load_packets, reference_packets, SensorPacket};
use fittrack::workout::TrainingSession;

/// FitTrack - Fitness Sensor Summary CLI
///
/// Computes distance, mean speed and calories burned from raw sensor
/// packets and prints one summary line per workout.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author = "FitTrack Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Fitness Sensor Summary CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print workout summaries from sensor packets
    Summary {
        /// Packet batch file (JSON array of {code, values} objects)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Inspect application configuration
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        list: bool,

        /// Print the default config file path
        #[arg(short, long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;

    // -v overrides the configured log level
    let mut log_config = config.log.clone();
    if cli.verbose > 0 {
        log_config.level = match cli.verbose {
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
    }
    init_logging(&log_config)?;

    match cli.command {
        Commands::Summary { file, format } => run_summary(&config, file, &format),
        Commands::Config { list, path } => run_config(&config, list, path),
    }
}

fn run_summary(config: &AppConfig, file: Option<PathBuf>, format: &str) -> Result<()> {
    let packets = match file.or_else(|| config.packets_file.clone()) {
        Some(path) => {
            info!(path = %path.display(), "loading packet batch");
            load_packets(&path)?
        }
        None => reference_packets(),
    };

    match format {
        "text" => {
            // Print in input order; the first bad packet halts the batch
            for packet in &packets {
                println!("{}", summarize(packet)?);
            }
        }
        "json" => {
            let summaries = packets
                .iter()
                .map(|packet| {
                    info!(code = %packet.code, "processing packet");
                    TrainingSession::from_packet(packet).map(|s| s.summary())
                })
                .collect::<fittrack::Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        other => anyhow::bail!("unsupported output format: {}", other),
    }

    Ok(())
}

fn summarize(packet: &SensorPacket) -> Result<String> {
    info!(code = %packet.code, "processing packet");
    let session = TrainingSession::from_packet(packet)?;
    Ok(session.summary().render())
}

fn run_config(config: &AppConfig, list: bool, path: bool) -> Result<()> {
    if path {
        println!("{}", AppConfig::default_path()?.display());
    }
    if list {
        println!("{}", "Effective configuration:".bold());
        let raw = toml::to_string_pretty(config).context("failed to render configuration")?;
        print!("{}", raw);
    }
    if !list && !path {
        eprintln!(
            "{}",
            "nothing to do: pass --list and/or --path".dimmed()
        );
    }
    Ok(())
}
