//! Export destination resolution
//!
//! Exports prefer the user's documents folder and degrade through fallbacks
//! rather than failing; concurrent exports never collide because file names
//! carry a second-resolution timestamp.

use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the directory exported documents land in.
///
/// Order: the configured directory, the platform documents folder,
/// ~/Documents, the platform data dir, and finally the current directory.
pub fn resolve_export_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    if let Some(documents) = dirs::document_dir() {
        return documents;
    }

    if let Some(home) = dirs::home_dir() {
        return home.join("Documents");
    }

    if let Some(data) = dirs::data_dir() {
        return data.join("memoir");
    }

    PathBuf::from(".")
}

/// Build a timestamped PDF file name, e.g. "journal_entries_2025-01-17_093042.pdf"
pub fn timestamped_file_name(prefix: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.pdf", prefix, at.format("%Y-%m-%d_%H%M%S"))
}

/// Write document bytes, creating the destination directory if needed
pub fn write_document(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes)?;
    Ok(())
}
