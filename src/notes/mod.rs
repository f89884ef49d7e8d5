//! A note is one markdown file representing one logged work session.
//! The basic idea is:
//!  - Notes live in a drafts directory and are named `<YYYY-MM-DD>.md`.
//!  - The first lines of a note may carry `tags:` and `duration:` metadata.
//!  - [source::DraftDir] lists and reads notes, newest first.
//!  - [record::SessionRecord] is the in-memory result for one accepted note.

pub mod duration;
pub mod frontmatter;
pub mod record;
pub mod source;
