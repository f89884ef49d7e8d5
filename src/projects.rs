use std::{io::ErrorKind, path::Path, sync::Arc};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Static description of a tracked project. Notes tagged with anything not in
/// the table are dropped from the build entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// One entry of a `projects.json` override file.
#[derive(Debug, Serialize, Deserialize)]
struct ProjectEntry {
    name: String,
    title: String,
    summary: String,
    #[serde(default)]
    emoji: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// The known-project lookup table. Entry order is preserved, it decides the
/// order of project sections on the index page.
pub struct ProjectTable {
    entries: Vec<(Arc<str>, ProjectInfo)>,
}

impl ProjectTable {
    /// The built-in table used when the drafts directory carries no
    /// `projects.json`.
    pub fn builtin() -> Self {
        Self {
            entries: vec![(
                "GradeSense".into(),
                ProjectInfo {
                    title: "GradeSense".to_string(),
                    summary: "A terrain-aware ultramarathon pacing and finishing-time \
                              prediction model that integrates gradient, fitness, and \
                              fatigue dynamics."
                        .to_string(),
                    emoji: None,
                    category: None,
                },
            )],
        }
    }

    /// Loads `projects.json` from the drafts directory, falling back to the
    /// built-in table when the file does not exist. A present but malformed
    /// file aborts the build, that is a configuration error rather than note
    /// content.
    pub fn load(drafts_dir: &Path) -> Result<Self> {
        let path = drafts_dir.join("projects.json");
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No projects.json in {drafts_dir:?}, using the built-in table");
                return Ok(Self::builtin());
            }
            Err(e) => return Err(e.into()),
        };
        let entries: Vec<ProjectEntry> =
            serde_json::from_str(&text).with_context(|| format!("Failed to parse {path:?}"))?;
        Ok(Self {
            entries: entries
                .into_iter()
                .map(|entry| {
                    (
                        Arc::from(entry.name),
                        ProjectInfo {
                            title: entry.title,
                            summary: entry.summary,
                            emoji: entry.emoji,
                            category: entry.category,
                        },
                    )
                })
                .collect(),
        })
    }

    /// Returns the canonical key for a tag, or `None` for unknown projects.
    pub fn key(&self, tag: &str) -> Option<Arc<str>> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_ref() == tag)
            .map(|(key, _)| key.clone())
    }

    pub fn get(&self, key: &str) -> Option<&ProjectInfo> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.as_ref() == key)
            .map(|(_, info)| info)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &ProjectInfo)> {
        self.entries.iter().map(|(key, info)| (key, info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
