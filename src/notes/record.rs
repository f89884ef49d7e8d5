use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    notes::{duration::parse_duration, frontmatter::extract_front_matter},
    projects::ProjectTable,
    site::markdown::{render_markdown, rewrite_image_paths},
    utils::time::parse_note_stem,
};

/// One accepted note, fully parsed and rendered. Built once per run and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Filename stem, the note identifier. Doubles as the page name and the
    /// display label for records whose stem is not a date.
    pub stem: Arc<str>,
    /// `None` marks a date-less record: still listed under its project, never
    /// part of any temporal statistic.
    pub date: Option<NaiveDate>,
    pub project: Arc<str>,
    pub title: String,
    pub duration_minutes: u32,
    pub body_html: String,
}

/// Combines extracted metadata with the rendered body into a [SessionRecord].
/// Returns `None` when the note carries no recognized project tag; an unknown
/// tag excludes the whole note from the build, not just from statistics.
pub fn prepare_note(stem: &str, text: &str, table: &ProjectTable) -> Option<SessionRecord> {
    let front = extract_front_matter(text);
    let Some(tag) = front.project else {
        debug!("Skipping {stem}: no tags line");
        return None;
    };
    let Some(project) = table.key(&tag) else {
        debug!("Skipping {stem}: unknown project {tag}");
        return None;
    };

    let body_html = rewrite_image_paths(&render_markdown(&front.body));

    let date = parse_note_stem(stem);
    if date.is_none() {
        warn!("Note {stem} has no parseable date, it stays out of the calendar");
    }

    let title = derive_title(&body_html).unwrap_or_else(|| stem.to_string());

    Some(SessionRecord {
        stem: stem.into(),
        date,
        project,
        title,
        duration_minutes: parse_duration(front.duration.as_deref()),
        body_html,
    })
}

/// Title is whatever precedes the first closing top-level heading tag, with
/// the opening tags removed.
fn derive_title(html: &str) -> Option<String> {
    let end = html.find("</h1>")?;
    Some(html[..end].replace("<h1>", "").trim().to_string())
}
