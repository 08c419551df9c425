//! Error types for memoir

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the memoir application
#[derive(Debug, Error)]
pub enum MemoirError {
    #[error("Not a memoir journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Invalid entry file {file}: {reason}")]
    InvalidEntry { file: String, reason: String },

    #[error("Export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MemoirError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MemoirError::NotJournalDirectory(_) => 2,
            MemoirError::InvalidPeriod(_) => 3,
            MemoirError::EntryNotFound(_) => 4,
            MemoirError::Export(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MemoirError::NotJournalDirectory(path) => {
                format!(
                    "Not a memoir journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'memoir init' in this directory to create a new journal\n\
                    • Navigate to an existing memoir journal\n\
                    • Set MEMOIR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MemoirError::InvalidPeriod(period) => {
                format!(
                    "Invalid period: '{}'\n\n\
                    Valid periods:\n\
                    • all (every entry, no cutoff)\n\
                    • a number of days to look back (e.g. 7, 30, 90, 365)\n\n\
                    Examples:\n\
                    memoir stats --period 30\n\
                    memoir report --period all",
                    period
                )
            }
            MemoirError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'memoir list' to see available entries and their ids\n\
                    • Check that the entry file still exists under entries/",
                    id
                )
            }
            MemoirError::Export(msg) => {
                format!(
                    "Export failed: {}\n\n\
                    Suggestions:\n\
                    • Check that the export directory is writable\n\
                    • Set a different directory: memoir config export_dir <path>",
                    msg
                )
            }
            MemoirError::Config(msg) => {
                if msg.contains("period") {
                    format!(
                        "{}\n\n\
                        Valid periods: all, or a number of days (e.g. 7, 30, 90, 365)\n\
                        Example: memoir config default_period 30",
                        msg
                    )
                } else if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: memoir list --from 17-01-2025 --to 31-01-2025",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MemoirError
pub type Result<T> = std::result::Result<T, MemoirError>;
