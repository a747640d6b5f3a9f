//! Line-oriented file ingestion.
//!
//! The employee log can be read either with a blocking read or through
//! tokio's non-blocking file API. Both return the same non-blank lines, so
//! the calculation never depends on how the file was read.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// How the employee log file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadMode {
    /// Read the whole file with a blocking call.
    Blocking,
    /// Stream the file line by line without blocking the runtime.
    #[default]
    NonBlocking,
}

/// Reads the non-blank lines of a file with a blocking call.
///
/// Returns `FileNotFound` with the attempted path if the file does not
/// exist, or `FileReadError` for any other I/O failure.
pub fn read_lines<P: AsRef<Path>>(path: P) -> EngineResult<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| EngineError::from_io(path, e))?;

    let lines: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), lines = lines.len(), "Read employee log");
    Ok(lines)
}

/// Reads the non-blank lines of a file without blocking.
///
/// Resolves once every line has been collected. Errors are the same as for
/// [`read_lines`].
pub async fn read_lines_async<P: AsRef<Path>>(path: P) -> EngineResult<Vec<String>> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| EngineError::from_io(path, e))?;

    let mut reader = BufReader::new(file).lines();
    let mut lines = Vec::new();
    while let Some(line) = reader
        .next_line()
        .await
        .map_err(|e| EngineError::from_io(path, e))?
    {
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    debug!(path = %path.display(), lines = lines.len(), "Read employee log");
    Ok(lines)
}

/// Reads the non-blank lines of a file in the given mode.
pub async fn load_lines<P: AsRef<Path>>(path: P, mode: ReadMode) -> EngineResult<Vec<String>> {
    match mode {
        ReadMode::Blocking => read_lines(path),
        ReadMode::NonBlocking => read_lines_async(path).await,
    }
}
