//! Analytics period selection

use crate::error::{MemoirError, Result};
use chrono::{DateTime, Duration, Local};

/// A lookback window for analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// Every entry, no cutoff
    AllTime,
    /// Entries created within the last N days
    Days(u32),
}

impl Period {
    /// Parse a period string: "all" or a positive number of days
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "all" | "0" => Ok(Period::AllTime),
            _ => normalized
                .parse::<u32>()
                .ok()
                .filter(|days| *days > 0)
                .map(Period::Days)
                .ok_or_else(|| MemoirError::InvalidPeriod(input.to_string())),
        }
    }

    /// The window length in days; 0 means all time
    pub fn days(&self) -> u32 {
        match self {
            Period::AllTime => 0,
            Period::Days(days) => *days,
        }
    }

    /// Earliest creation time included in the window, if any
    pub fn cutoff(&self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        match self {
            Period::AllTime => None,
            Period::Days(days) => Some(now - Duration::days(*days as i64)),
        }
    }

    /// Human-readable label, e.g. "Last 30 days"
    pub fn label(&self) -> String {
        match self {
            Period::AllTime => "All time".to_string(),
            Period::Days(365) => "This year".to_string(),
            Period::Days(days) => format!("Last {} days", days),
        }
    }
}
