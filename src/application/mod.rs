//! Application layer - Use cases and orchestration

pub mod compute_stats;
pub mod export_entries;
pub mod export_report;
pub mod init;
pub mod list_entries;
pub mod manage_config;

pub use compute_stats::StatsService;
pub use export_entries::{ExportEntriesService, ExportOptions};
pub use export_report::ExportReportService;
pub use manage_config::ConfigService;
