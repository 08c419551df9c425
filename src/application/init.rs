//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileJournalStore, JournalStore};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileJournalStore::new(path.to_path_buf());

    store.initialize()?;

    let config = Config::new();
    store.save_config(&config)?;

    println!("Initialized memoir journal at {}", path.display());
    println!("Entries live under {}", store.entries_dir().display());

    Ok(())
}
