use std::path::PathBuf;

use ansi_term::Colour;
use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;
use tracing::info;

use crate::{
    analysis::{build_report, project_groups, AggregateReport},
    notes::{
        duration::format_duration,
        record::SessionRecord,
        source::{collect_sessions, DraftDir},
    },
    projects::ProjectTable,
    site::{write_site, DirSink},
};

use super::{resolve_as_of, DateStyle};

#[derive(Debug, Parser)]
pub struct BuildCommand {
    #[arg(
        long,
        default_value = "drafts",
        help = "Directory containing dated markdown notes"
    )]
    drafts: PathBuf,
    #[arg(
        long = "out",
        short,
        default_value = ".",
        help = "Directory the site is written into. Posts land in a posts/ subdirectory"
    )]
    out_dir: PathBuf,
    #[arg(
        long = "as-of",
        help = "Anchor statistics to this date instead of now. Examples are \"yesterday\", \"15/03/2025\""
    )]
    as_of: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Command to process `build`. Reads every draft, renders the accepted ones
/// and writes the whole site, then prints a one-line summary.
pub async fn process_build_command(
    BuildCommand {
        drafts,
        out_dir,
        as_of,
        date_style,
    }: BuildCommand,
) -> Result<()> {
    let now = resolve_as_of(as_of, date_style)?;

    let (records, report) = run_build(drafts, out_dir, now).await?;

    println!(
        "Built {} sessions across {} projects · {} this week · {}",
        Colour::Cyan.paint(records.len().to_string()),
        report.projects.len(),
        format_duration(report.week.minutes),
        Colour::Green.paint(format!("{} day streak", report.current_streak)),
    );
    Ok(())
}

/// The whole pipeline behind `build`, separated from argument handling and
/// terminal output so it can run against fixed directories and a fixed `now`.
async fn run_build(
    drafts: PathBuf,
    out_dir: PathBuf,
    now: DateTime<Local>,
) -> Result<(Vec<SessionRecord>, AggregateReport)> {
    let table = ProjectTable::load(&drafts)?;
    let records = collect_sessions(DraftDir::new(drafts), &table).await?;
    info!("Accepted {} of the scanned notes", records.len());

    let report = build_report(&records, now);
    let groups = project_groups(&records, &table);

    let mut sink = DirSink::new(out_dir)?;
    write_site(&records, &groups, &table, &report, now.date_naive(), &mut sink)?;

    Ok((records, report))
}
