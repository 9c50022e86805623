//! Reading training corpora and reference text from disk.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::debug;

/// Read a training corpus.
///
/// A file is read as UTF-8. A directory has its entries sorted by file name
/// and every regular file's contents concatenated in that order, with no
/// separator. Subdirectories are skipped. Any read failure is an error.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let meta = std::fs::metadata(path)
        .with_context(|| format!("corpus path {} not found", path.display()))?;

    if meta.is_file() {
        return read_text(path);
    }
    if !meta.is_dir() {
        bail!("corpus path {} is neither a file nor a directory", path.display());
    }

    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("listing corpus directory {}", path.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("listing corpus directory {}", path.display()))?;
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut corpus = String::new();
    let mut files = 0usize;
    for entry in entries {
        if entry.is_dir() {
            debug!(path = %entry.display(), "skipping subdirectory in corpus");
            continue;
        }
        corpus.push_str(&read_text(&entry)?);
        files += 1;
    }
    debug!(dir = %path.display(), files, bytes = corpus.len(), "loaded corpus directory");
    Ok(corpus)
}

/// Read the reference text the session measures typing against.
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<String> {
    read_text(path.as_ref())
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
