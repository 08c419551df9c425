//! Analytics computation use case

use crate::domain::{AnalyticsEngine, AnalyticsSnapshot, Period};
use crate::error::Result;
use crate::infrastructure::{FileJournalStore, JournalStore};
use chrono::Local;

/// Service for computing analytics over the journal
pub struct StatsService {
    store: FileJournalStore,
}

impl StatsService {
    /// Create a new stats service
    pub fn new(store: FileJournalStore) -> Self {
        StatsService { store }
    }

    /// Compute a snapshot for the given period, or the configured default.
    ///
    /// Returns the snapshot together with the period that was applied.
    pub fn execute(&self, period: Option<Period>) -> Result<(AnalyticsSnapshot, Period)> {
        let period = match period {
            Some(period) => period,
            None => self.store.load_config()?.period(),
        };

        let entries = self.store.load_entries()?;
        let snapshot = AnalyticsEngine::compute(&entries, period, Local::now());
        Ok((snapshot, period))
    }
}
