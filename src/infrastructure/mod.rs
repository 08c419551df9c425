//! Infrastructure layer - File system, configuration, export destinations

pub mod config;
pub mod export_path;
pub mod store;

pub use config::Config;
pub use store::{FileJournalStore, JournalStore};
