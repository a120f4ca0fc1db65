use std::fs;
use std::path::{Path, PathBuf};

use quinote_config::ParserSettings;

use crate::parsing::{Parsed, parse_lines_with};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a notes file and return its lines
pub fn read_outline(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Read a notes file and parse it with the given settings
pub fn parse_file(path: &Path, settings: &ParserSettings) -> Result<Parsed, IoError> {
    let lines = read_outline(path)?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(parse_lines_with(&lines, settings))
}
