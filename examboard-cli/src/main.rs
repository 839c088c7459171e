mod clock;
mod commands;
mod config;
mod fetch;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::GlobalConfig;

#[derive(Parser)]
#[command(name = "examboard")]
#[command(about = "Watch an exam schedule against the clock, extend it, and export it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the schedule once and print it with per-exam status
    Show {
        /// Data source (URL or file path); defaults to the configured source
        #[arg(short, long)]
        source: Option<String>,
    },
    /// Keep the schedule on screen against a live clock
    Watch {
        /// Data source (URL or file path); defaults to the configured source
        #[arg(short, long)]
        source: Option<String>,

        /// Seconds between clock ticks
        #[arg(long, default_value_t = 1)]
        interval: u64,

        /// Re-fetch the data source every N seconds
        #[arg(long)]
        refresh_every: Option<u64>,
    },
    /// Append one exam record and export the updated dataset
    Add {
        #[arg(long)]
        subject: Option<String>,

        /// Exam date (YYYY-M-D)
        #[arg(long)]
        date: Option<String>,

        /// Start of the exam window (HH:MM)
        #[arg(long)]
        start_time: Option<String>,

        /// End of the exam window (HH:MM)
        #[arg(long)]
        end_time: Option<String>,

        /// Free-text paper description
        #[arg(long)]
        paper_info: Option<String>,

        /// Data source (URL or file path); defaults to the configured source
        #[arg(short, long)]
        source: Option<String>,

        /// Where to write the updated dataset
        #[arg(short, long, default_value = examboard_core::EXPORT_FILENAME)]
        out: PathBuf,
    },
    /// Export the current schedule as pretty-printed JSON
    Export {
        /// Data source (URL or file path); defaults to the configured source
        #[arg(short, long)]
        source: Option<String>,

        /// Where to write the dataset
        #[arg(short, long, default_value = examboard_core::EXPORT_FILENAME)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = GlobalConfig::load()?;

    match cli.command {
        Commands::Show { source } => commands::show::run(&config, source.as_deref()).await,
        Commands::Watch {
            source,
            interval,
            refresh_every,
        } => commands::watch::run(&config, source.as_deref(), interval, refresh_every).await,
        Commands::Add {
            subject,
            date,
            start_time,
            end_time,
            paper_info,
            source,
            out,
        } => {
            let fields = commands::add::Fields {
                subject,
                date,
                start_time,
                end_time,
                paper_info,
            };
            commands::add::run(&config, fields, source.as_deref(), &out).await
        }
        Commands::Export { source, out } => {
            commands::export::run(&config, source.as_deref(), &out).await
        }
    }
}
