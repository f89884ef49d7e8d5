pub mod build;
pub mod stats;

use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::utils::{dir::create_state_dir, logging::enable_logging};

use build::{process_build_command, BuildCommand};
use stats::{process_stats_command, StatsCommand};

#[derive(Parser, Debug)]
#[command(name = "Devlog", version, long_about = None)]
#[command(about = "Static development log builder with activity statistics", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Build the site: one page per note plus the index")]
    Build {
        #[command(flatten)]
        command: BuildCommand,
    },
    #[command(about = "Print activity statistics without writing any pages")]
    Stats {
        #[command(flatten)]
        command: StatsCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&create_state_dir()?, logging_level, args.log)?;

    match args.commands {
        Commands::Build { command } => process_build_command(command).await,
        Commands::Stats { command } => process_stats_command(command).await,
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

/// Resolves the instant statistics are anchored to: the wall clock, or a
/// human-friendly `--as-of` override such as "yesterday" or "15/03/2025".
fn resolve_as_of(as_of: Option<String>, date_style: DateStyle) -> Result<DateTime<Local>> {
    let now = Local::now();
    match as_of.map(|s| parse_date_string(&s, now, date_style.into())) {
        Some(Ok(v)) => Ok(v),
        Some(Err(e)) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate as-of date {e}"),
            )
            .into()),
        None => Ok(now),
    }
}
