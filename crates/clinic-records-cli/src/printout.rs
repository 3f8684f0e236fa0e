//! Printable documents written to disk for the user to open and print.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clinic_records_core::PrintDocument;

/// Write a printable document into `dir`, returning the file path.
pub fn write_document(dir: &Path, document: &PrintDocument) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create print directory {}", dir.display()))?;

    let path = dir.join(document.file_name());
    if path.parent() != Some(dir) {
        anyhow::bail!("Refusing to write printable record outside {}", dir.display());
    }
    fs::write(&path, &document.html)
        .with_context(|| format!("Failed to write printable record {}", path.display()))?;

    log::info!("Wrote printable record to {}", path.display());
    Ok(path)
}
