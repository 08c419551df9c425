//! Entry export use case
//!
//! Orchestrates the full workflow: select entries, render the PDF document,
//! resolve a destination, and write the bytes.

use crate::domain::JournalEntry;
use crate::error::{MemoirError, Result};
use crate::infrastructure::export_path::{
    resolve_export_dir, timestamped_file_name, write_document,
};
use crate::infrastructure::{FileJournalStore, JournalStore};
use crate::render::PdfRenderer;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Options for entry export
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Specific entry ids to export; empty means use `all`
    pub ids: Vec<u64>,

    /// Export every entry (optionally date-filtered)
    pub all: bool,

    /// Start date filter (inclusive, local)
    pub from: Option<NaiveDate>,

    /// End date filter (inclusive, local)
    pub to: Option<NaiveDate>,
}

/// Service for exporting entries to PDF
pub struct ExportEntriesService {
    store: FileJournalStore,
}

impl ExportEntriesService {
    /// Create a new export service
    pub fn new(store: FileJournalStore) -> Self {
        ExportEntriesService { store }
    }

    /// Execute the export.
    ///
    /// Returns the path of the generated document.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested id does not exist, nothing matches the
    /// selection, or rendering/writing fails.
    pub fn execute(&self, options: ExportOptions) -> Result<PathBuf> {
        let config = self.store.load_config()?;
        let entries = self.store.load_entries()?;

        let selected = self.select_entries(entries, &options)?;
        if selected.is_empty() {
            return Err(MemoirError::Export("no entries to export".to_string()));
        }

        let (bytes, file_name) = if selected.len() == 1 {
            let entry = &selected[0];
            let bytes = PdfRenderer::render_entry(entry)?;
            // Single-entry documents are named after the entry itself.
            let name = timestamped_file_name("journal_entry", entry.local_created());
            (bytes, name)
        } else {
            let bytes = PdfRenderer::render_entries(&selected)?;
            let name = timestamped_file_name("journal_entries", Local::now());
            (bytes, name)
        };

        let path = resolve_export_dir(config.export_dir.as_deref()).join(file_name);
        write_document(&path, &bytes)?;
        Ok(path)
    }

    fn select_entries(
        &self,
        entries: Vec<JournalEntry>,
        options: &ExportOptions,
    ) -> Result<Vec<JournalEntry>> {
        if !options.ids.is_empty() {
            let mut selected = Vec::with_capacity(options.ids.len());
            for id in &options.ids {
                let entry = entries
                    .iter()
                    .find(|e| e.id == *id)
                    .ok_or(MemoirError::EntryNotFound(*id))?;
                selected.push(entry.clone());
            }
            return Ok(selected);
        }

        if !options.all {
            return Ok(Vec::new());
        }

        let mut selected = entries;
        if let Some(from) = options.from {
            selected.retain(|e| e.local_created().date_naive() >= from);
        }
        if let Some(to) = options.to {
            selected.retain(|e| e.local_created().date_naive() <= to);
        }
        Ok(selected)
    }
}
