// src/store.rs
//
// JSON artifacts on disk. Output files are replaced wholesale each run:
// write to a temp file in the target directory, then rename over the
// destination so consumers never observe a half-written file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::ScrapeError;
use crate::records::ExecutionRecord;

pub fn ensure_directory(dir: &Path) -> Result<(), ScrapeError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Serialize `value` as pretty JSON to `dir/filename`.
pub fn save_json<T: Serialize>(dir: &Path, filename: &str, value: &T) -> Result<PathBuf, ScrapeError> {
    ensure_directory(dir)?;
    let path = dir.join(filename);
    let tmp = dir.join(format!(".{filename}.tmp"));

    let contents = serde_json::to_string_pretty(value)?;
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, &path)?;
    Ok(path)
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScrapeError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// The details and enrich jobs start from a previously fetched
/// executions artifact.
pub fn load_executions(dir: &Path, filename: &str) -> Result<Vec<ExecutionRecord>, ScrapeError> {
    load_json(&dir.join(filename))
}
