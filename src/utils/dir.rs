use std::{io, path::PathBuf};

use anyhow::Result;

const STATE_DIR: &str = ".devlog";

/// Project-local state directory, currently only used for build logs. Lives
/// next to the drafts so repeated builds of the same log share it.
pub fn create_state_dir() -> Result<PathBuf> {
    let path = PathBuf::from(STATE_DIR);

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
