//! Analytics report export use case

use crate::domain::{AnalyticsEngine, Period};
use crate::error::Result;
use crate::infrastructure::export_path::{
    resolve_export_dir, timestamped_file_name, write_document,
};
use crate::infrastructure::{FileJournalStore, JournalStore};
use crate::render::{AnalyticsReport, PdfRenderer};
use chrono::Local;
use std::path::PathBuf;

/// Service for exporting an analytics report to PDF
pub struct ExportReportService {
    store: FileJournalStore,
}

impl ExportReportService {
    /// Create a new report export service
    pub fn new(store: FileJournalStore) -> Self {
        ExportReportService { store }
    }

    /// Compute analytics for the period (or the configured default) and
    /// export them as a PDF report, returning the generated path.
    pub fn execute(&self, period: Option<Period>) -> Result<PathBuf> {
        let config = self.store.load_config()?;
        let period = period.unwrap_or_else(|| config.period());

        let entries = self.store.load_entries()?;
        let snapshot = AnalyticsEngine::compute(&entries, period, Local::now());
        let report = AnalyticsReport::from_snapshot(&period.label(), &snapshot);

        let bytes = PdfRenderer::render_report(&report)?;
        let file_name = timestamped_file_name("journal_analytics", Local::now());
        let path = resolve_export_dir(config.export_dir.as_deref()).join(file_name);
        write_document(&path, &bytes)?;
        Ok(path)
    }
}
