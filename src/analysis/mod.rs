//! Everything derived from the set of session records: week and month
//! windows, streaks, the per-day histogram, per-project totals. The report is
//! a pure function of the records and the instant the build runs at, nothing
//! here carries state between runs.

pub mod calendar;
pub mod streak;

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use calendar::DayBucket;
use chrono::{DateTime, Local, NaiveDate};
use now::DateTimeNow;
use serde::Serialize;
use tracing::debug;

use crate::{notes::record::SessionRecord, projects::ProjectTable};

/// How many records the index page shows under "recent activity".
pub const RECENT_SESSIONS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindowTotals {
    pub sessions: usize,
    pub minutes: u32,
}

impl WindowTotals {
    fn add(&mut self, minutes: u32) {
        self.sessions += 1;
        self.minutes += minutes;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTotals {
    pub project: Arc<str>,
    pub sessions: usize,
    pub minutes: u32,
}

impl ProjectTotals {
    fn new(project: Arc<str>) -> Self {
        Self {
            project,
            sessions: 0,
            minutes: 0,
        }
    }
}

/// Per-project record indices in known-table order, the shape the index page
/// renders its sections from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGroup {
    pub project: Arc<str>,
    pub entries: Vec<usize>,
}

/// The aggregate activity statistics of one build. Indices in `recent` and in
/// the day buckets point into the record slice the report was built from.
#[derive(Debug, Serialize)]
pub struct AggregateReport {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub week: WindowTotals,
    pub month: WindowTotals,
    pub total: WindowTotals,
    pub average_minutes: u32,
    pub recent: Vec<usize>,
    pub days: BTreeMap<NaiveDate, DayBucket>,
    pub projects: Vec<ProjectTotals>,
}

/// Computes the full report. `now` anchors the week and month windows and the
/// current streak; it is injected so reports are reproducible.
pub fn build_report(records: &[SessionRecord], now: DateTime<Local>) -> AggregateReport {
    let today = now.date_naive();
    let week_start = now.beginning_of_week().date_naive();
    let month_start = now.beginning_of_month().date_naive();

    let mut dated: Vec<(usize, NaiveDate)> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| record.date.map(|date| (index, date)))
        .collect();
    // Scan order is already newest-first; a stable sort keeps same-day notes
    // in their original file order.
    dated.sort_by(|a, b| b.1.cmp(&a.1));
    debug!(
        "Aggregating {} dated sessions of {} records",
        dated.len(),
        records.len()
    );

    let mut days = BTreeMap::<NaiveDate, DayBucket>::new();
    let mut week = WindowTotals::default();
    let mut month = WindowTotals::default();
    let mut total = WindowTotals::default();
    for &(index, date) in &dated {
        let minutes = records[index].duration_minutes;
        total.add(minutes);
        if date >= week_start {
            week.add(minutes);
        }
        if date >= month_start {
            month.add(minutes);
        }
        let bucket = days.entry(date).or_insert_with(|| DayBucket::new(date));
        bucket.sessions += 1;
        bucket.minutes += minutes;
        bucket.entries.push(index);
    }

    let distinct: Vec<NaiveDate> = days.keys().rev().copied().collect();
    let current_streak = streak::current_streak(&distinct, today);
    let longest_streak = streak::longest_streak(&distinct, current_streak);

    let average_minutes = if total.sessions == 0 {
        0
    } else {
        total.minutes / total.sessions as u32
    };

    AggregateReport {
        current_streak,
        longest_streak,
        week,
        month,
        total,
        average_minutes,
        recent: dated
            .iter()
            .take(RECENT_SESSIONS)
            .map(|&(index, _)| index)
            .collect(),
        days,
        projects: project_totals(records),
    }
}

/// Totals per project over all records, date-less ones included. Sorted by
/// logged minutes, largest first.
fn project_totals(records: &[SessionRecord]) -> Vec<ProjectTotals> {
    let mut map = HashMap::<Arc<str>, ProjectTotals>::new();

    for record in records {
        let totals = map
            .entry(record.project.clone())
            .or_insert_with(|| ProjectTotals::new(record.project.clone()));
        totals.sessions += 1;
        totals.minutes += record.duration_minutes;
    }

    let mut totals = map.into_values().collect::<Vec<_>>();
    totals.sort_by(|a, b| a.minutes.cmp(&b.minutes));
    totals.reverse();
    totals
}

/// Groups record indices by project in known-table order. Projects without
/// records keep an empty group so the index still renders their section.
pub fn project_groups(records: &[SessionRecord], table: &ProjectTable) -> Vec<ProjectGroup> {
    table
        .iter()
        .map(|(key, _)| ProjectGroup {
            project: key.clone(),
            entries: records
                .iter()
                .enumerate()
                .filter(|(_, record)| record.project == *key)
                .map(|(index, _)| index)
                .collect(),
        })
        .collect()
}
