// Document loading: read a text file, drop blank lines, join the rest.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::tokenize::is_separator;
use crate::error::{Error, Result};

/// Load a document as a single line of text.
///
/// Lines that are empty or whitespace-only are skipped. Every kept line is
/// trimmed and the lines are joined with a single space.
pub fn load_text_from_file(path: &Path) -> Result<String> {
    let load_err = |source| Error::Load {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(load_err)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(load_err)?;
        let trimmed = line.trim_matches(is_separator);
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    debug!(path = %path.display(), lines = lines.len(), "Loaded document");
    Ok(lines.join(" "))
}

/// Derive a document label from its file name: the name with a trailing
/// `.txt` removed.
pub fn label_for(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    match name.strip_suffix(".txt") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}
