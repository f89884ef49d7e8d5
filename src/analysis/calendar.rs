use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::time::monday_of;

/// How far back the index heatmap reaches.
pub const HEATMAP_WEEKS: usize = 12;

/// All sessions of one calendar date. Entries are indices into the record
/// slice, the histogram does not own records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub sessions: usize,
    pub minutes: u32,
    pub entries: Vec<usize>,
}

impl DayBucket {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            sessions: 0,
            minutes: 0,
            entries: vec![],
        }
    }

    pub fn intensity(&self) -> Intensity {
        Intensity::from_sessions(self.sessions)
    }
}

/// Coarse per-day activity tier used for heatmap coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Empty,
    Low,
    Medium,
    High,
}

impl Intensity {
    pub fn from_sessions(count: usize) -> Self {
        match count {
            0 => Intensity::Empty,
            1 => Intensity::Low,
            2 => Intensity::Medium,
            _ => Intensity::High,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Intensity::Empty => "cal-empty",
            Intensity::Low => "cal-low",
            Intensity::Medium => "cal-medium",
            Intensity::High => "cal-high",
        }
    }
}

/// One cell of the rendered heatmap.
#[derive(Debug, Clone, Copy)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub sessions: usize,
    pub minutes: u32,
}

impl CalendarCell {
    pub fn intensity(&self) -> Intensity {
        Intensity::from_sessions(self.sessions)
    }
}

/// Lays the histogram out as trailing Monday-first week columns, oldest
/// first. Days after `today` are omitted so the current week stays ragged.
pub fn calendar_grid(
    days: &BTreeMap<NaiveDate, DayBucket>,
    today: NaiveDate,
    weeks: usize,
) -> Vec<Vec<CalendarCell>> {
    let start = monday_of(today) - Duration::weeks(weeks as i64 - 1);
    (0..weeks)
        .map(|week| {
            (0..7)
                .filter_map(|day| {
                    let date = start + Duration::days((week * 7 + day) as i64);
                    if date > today {
                        return None;
                    }
                    let (sessions, minutes) = days
                        .get(&date)
                        .map(|bucket| (bucket.sessions, bucket.minutes))
                        .unwrap_or((0, 0));
                    Some(CalendarCell {
                        date,
                        sessions,
                        minutes,
                    })
                })
                .collect()
        })
        .collect()
}
