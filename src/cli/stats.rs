use std::path::PathBuf;

use ansi_term::Colour;
use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::build_report,
    notes::{
        duration::format_duration,
        source::{collect_sessions, DraftDir},
    },
    projects::ProjectTable,
    utils::percentage::{minutes_percentage, Percentage},
};

use super::{resolve_as_of, DateStyle};

#[derive(Debug, Parser)]
pub struct StatsCommand {
    #[arg(
        long,
        default_value = "drafts",
        help = "Directory containing dated markdown notes"
    )]
    drafts: PathBuf,
    #[arg(
        long = "as-of",
        help = "Anchor statistics to this date instead of now. Examples are \"yesterday\", \"15/03/2025\""
    )]
    as_of: Option<String>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(short = 'p', long = "percentage", help = "Filter projects to have at least specified percentage of logged time", default_value_t = Percentage::new_opt(1.).unwrap())]
    min_percentage: Percentage,
}

/// Command to process `stats`. Runs the same aggregation as a build but only
/// prints the report, nothing is written.
pub async fn process_stats_command(
    StatsCommand {
        drafts,
        as_of,
        date_style,
        min_percentage,
    }: StatsCommand,
) -> Result<()> {
    let now = resolve_as_of(as_of, date_style)?;

    let table = ProjectTable::load(&drafts)?;
    let records = collect_sessions(DraftDir::new(drafts), &table).await?;
    let report = build_report(&records, now);

    println!(
        "This week\t{} sessions\t{}",
        report.week.sessions,
        format_duration(report.week.minutes)
    );
    println!(
        "This month\t{} sessions\t{}",
        report.month.sessions,
        format_duration(report.month.minutes)
    );
    println!(
        "All time\t{} sessions\t{}\tavg {}",
        report.total.sessions,
        format_duration(report.total.minutes),
        format_duration(report.average_minutes)
    );
    println!(
        "Streak\t{} current\t{} longest",
        Colour::Green.paint(report.current_streak.to_string()),
        report.longest_streak
    );

    let all_minutes: u32 = report.projects.iter().map(|totals| totals.minutes).sum();
    println!();
    for totals in &report.projects {
        let share = minutes_percentage(totals.minutes, all_minutes);
        if share < min_percentage {
            continue;
        }
        let title = table
            .get(&totals.project)
            .map(|info| info.title.as_str())
            .unwrap_or(totals.project.as_ref());
        println!(
            "{}%\t{}\t{} sessions\t{}",
            *share as i32,
            format_duration(totals.minutes),
            totals.sessions,
            title
        );
    }
    Ok(())
}
