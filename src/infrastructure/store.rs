//! File system entry store
//!
//! A journal is a directory holding `.memoir/config.toml` and an `entries/`
//! tree of TOML entry files. Tag and category names live denormalized inside
//! each entry file, so nothing here resolves references.

use crate::domain::JournalEntry;
use crate::error::{MemoirError, Result};
use crate::infrastructure::Config;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory under the journal root holding entry files
const ENTRIES_DIR: &str = "entries";

/// Abstract store for journal operations
pub trait JournalStore {
    /// Get the root directory of this journal
    fn root(&self) -> &Path;

    /// Load configuration from .memoir/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .memoir/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .memoir directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .memoir directory and the entries tree
    fn initialize(&self) -> Result<()>;

    /// Load every entry in the journal
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;
}

/// On-disk shape of one entry file
#[derive(Debug, Deserialize)]
struct EntryRecord {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    primary_mood: String,
    #[serde(default)]
    secondary_mood1: Option<String>,
    #[serde(default)]
    secondary_mood2: Option<String>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl EntryRecord {
    /// Normalize into the domain model.
    ///
    /// Moods are lowercased; secondary moods that duplicate the primary or
    /// each other are dropped rather than rejected.
    fn into_entry(self) -> JournalEntry {
        let primary_mood = self.primary_mood.to_lowercase();
        let normalize = |mood: Option<String>| {
            mood.map(|m| m.to_lowercase())
                .filter(|m| !m.is_empty() && *m != primary_mood)
        };
        let secondary_mood1 = normalize(self.secondary_mood1);
        let secondary_mood2 = normalize(self.secondary_mood2).filter(|m| {
            secondary_mood1.as_deref() != Some(m.as_str())
        });

        JournalEntry {
            id: self.id,
            title: self.title,
            content: self.content,
            primary_mood,
            secondary_mood1,
            secondary_mood2,
            created_at: self.created_at,
            modified_at: self.modified_at,
            category_name: self.category,
            tag_names: self.tags,
        }
    }
}

/// File system implementation of JournalStore
#[derive(Debug, Clone)]
pub struct FileJournalStore {
    pub root: PathBuf,
}

impl FileJournalStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileJournalStore { root }
    }

    /// Discover the journal root.
    ///
    /// Checks the MEMOIR_ROOT environment variable first, then walks up from
    /// the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MEMOIR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_memoir_dir(&path) {
                return Ok(FileJournalStore::new(path));
            } else {
                return Err(MemoirError::Config(format!(
                    "MEMOIR_ROOT is set to '{}' but no .memoir directory found. \
                    Run 'memoir init' in that directory or unset MEMOIR_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_memoir_dir(&current) {
                return Ok(FileJournalStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MemoirError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_memoir_dir(path: &Path) -> bool {
        path.join(".memoir").is_dir()
    }

    /// Directory containing the entry files
    pub fn entries_dir(&self) -> PathBuf {
        self.root.join(ENTRIES_DIR)
    }

    fn parse_entry_file(path: &Path) -> Result<JournalEntry> {
        let file = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("entry.toml")
            .to_string();
        let contents = fs::read_to_string(path)?;
        let record: EntryRecord =
            toml::from_str(&contents).map_err(|e| MemoirError::InvalidEntry {
                file,
                reason: e.to_string(),
            })?;
        Ok(record.into_entry())
    }
}

impl JournalStore for FileJournalStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_memoir_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let memoir_dir = self.root.join(".memoir");

        if memoir_dir.exists() {
            return Err(MemoirError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&memoir_dir)?;
        fs::create_dir_all(self.entries_dir())?;
        Ok(())
    }

    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let entries_dir = self.entries_dir();
        if !entries_dir.is_dir() {
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&entries_dir).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut entries = Vec::new();
        for dir_entry in walker {
            let Ok(dir_entry) = dir_entry else {
                continue;
            };
            if !dir_entry.file_type().is_file() {
                continue;
            }
            let path = dir_entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
                continue;
            }
            entries.push(Self::parse_entry_file(path)?);
        }

        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(entries)
    }
}
