//! memoir - Terminal journal analytics and export
//!
//! A command-line companion for a personal journal kept as TOML entry files:
//! computes writing analytics (streaks, moods, tags, trends) and exports
//! rich-text entries and analytics reports to PDF.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod render;

pub use error::MemoirError;
