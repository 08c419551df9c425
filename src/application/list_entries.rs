//! List entries use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::{FileJournalStore, JournalStore};
use chrono::NaiveDate;

/// List entries with optional local-date range and limit, newest first.
pub fn list_entries(
    store: &FileJournalStore,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<JournalEntry>> {
    let mut entries = store.load_entries()?;

    if let Some(from_date) = from {
        entries.retain(|e| e.local_created().date_naive() >= from_date);
    }
    if let Some(to_date) = to {
        entries.retain(|e| e.local_created().date_naive() <= to_date);
    }

    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
