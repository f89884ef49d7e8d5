use std::{collections::HashSet, future::Future, ops::Deref, path::PathBuf, sync::Arc};

use anyhow::Result;
use futures::{stream, StreamExt};
use tokio_stream::wrappers::ReadDirStream;
use tracing::{debug, instrument, trace, warn};

use crate::{
    notes::record::{prepare_note, SessionRecord},
    projects::ProjectTable,
};

/// How many notes are loaded and rendered at once. Per-note work is
/// side-effect free, ordering is restored when records are collected.
const NOTE_PIPELINE_WIDTH: usize = 4;

/// Interface for abstracting where draft notes come from.
pub trait NoteSource {
    /// Lists note stems, newest first (filename-descending).
    fn scan(&self) -> impl Future<Output = Result<Vec<String>>> + Send;

    /// Reads the raw text of one note.
    fn load(&self, stem: &str) -> impl Future<Output = Result<String>> + Send;
}

impl<T: Deref> NoteSource for T
where
    T::Target: NoteSource,
{
    fn scan(&self) -> impl Future<Output = Result<Vec<String>>> + Send {
        self.deref().scan()
    }

    fn load(&self, stem: &str) -> impl Future<Output = Result<String>> + Send {
        self.deref().load(stem)
    }
}

/// The main realization of [NoteSource]: a directory of `*.md` files.
pub struct DraftDir {
    dir: PathBuf,
}

impl DraftDir {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl NoteSource for DraftDir {
    async fn scan(&self) -> Result<Vec<String>> {
        let mut entries = ReadDirStream::new(tokio::fs::read_dir(&self.dir).await?);
        let mut stems = Vec::new();
        while let Some(entry) = entries.next().await {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    stems.push(stem.to_string());
                }
            }
        }
        // Filename-descending doubles as newest-first for dated stems, and
        // fixes the order of same-day notes.
        stems.sort_by(|a, b| b.cmp(a));
        Ok(stems)
    }

    async fn load(&self, stem: &str) -> Result<String> {
        let path = self.dir.join(format!("{stem}.md"));
        trace!("Loading {path:?}");
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Scans the source and turns every accepted note into a [SessionRecord],
/// preserving scan order. Notes run through a buffered pipeline, so loading
/// and rendering overlap while collection stays ordered.
#[instrument(skip(source, table))]
pub async fn collect_sessions(
    source: impl NoteSource,
    table: &ProjectTable,
) -> Result<Vec<SessionRecord>> {
    let source = Arc::new(source);
    let stems = source.scan().await?;
    debug!("Found {} notes", stems.len());

    let prepared = stream::iter(stems)
        .map(|stem| {
            let source = source.clone();
            async move {
                let text = source.load(&stem).await?;
                Ok::<_, anyhow::Error>(prepare_note(&stem, &text, table))
            }
        })
        .buffered(NOTE_PIPELINE_WIDTH);
    let mut prepared = std::pin::pin!(prepared);

    let mut records = Vec::new();
    let mut seen = HashSet::<Arc<str>>::new();
    while let Some(record) = prepared.next().await {
        match record? {
            Some(record) if seen.insert(record.stem.clone()) => records.push(record),
            Some(record) => warn!("Ignoring duplicate note {}", record.stem),
            None => {}
        }
    }
    Ok(records)
}
