//! PDF rendering - entry documents and analytics reports

pub mod entry_doc;
pub mod layout;
pub mod report_doc;

pub use report_doc::AnalyticsReport;

use crate::domain::JournalEntry;
use crate::error::Result;
use layout::PageComposer;

/// Footer branding, combined with "Page N of M" on every page
const FOOTER_PREFIX: &str = "Exported from Memoir";

/// Document color scheme
pub(crate) mod theme {
    use crate::domain::richtext::RgbColor;

    /// Default body text
    pub const INK: RgbColor = RgbColor::new(0x42, 0x42, 0x42);
    /// Titles and section headings
    pub const INK_DARK: RgbColor = RgbColor::new(0x21, 0x21, 0x21);
    /// Secondary text: dates, labels, footers
    pub const MUTED: RgbColor = RgbColor::new(0x9E, 0x9E, 0x9E);
    /// Tertiary text: generation stamps
    pub const FAINT: RgbColor = RgbColor::new(0xBD, 0xBD, 0xBD);
    /// Indigo accent for dividers and metric values
    pub const ACCENT: RgbColor = RgbColor::new(0x3F, 0x51, 0xB5);
    /// Panel backgrounds
    pub const PANEL: RgbColor = RgbColor::new(0xF5, 0xF5, 0xF5);
    /// Empty portion of bar charts
    pub const TRACK: RgbColor = RgbColor::new(0xE0, 0xE0, 0xE0);
    /// Blockquote background tint
    pub const QUOTE_TINT: RgbColor = RgbColor::new(0xEC, 0xEF, 0xF1);
    /// Bars for positive moods
    pub const POSITIVE: RgbColor = RgbColor::new(0x66, 0xBB, 0x6A);
    /// Bars for neutral moods
    pub const NEUTRAL: RgbColor = RgbColor::new(0x42, 0xA5, 0xF5);
    /// Bars for negative or unknown moods
    pub const NEGATIVE: RgbColor = RgbColor::new(0xFF, 0xA7, 0x26);
}

/// Renders journal content into PDF documents
pub struct PdfRenderer;

impl PdfRenderer {
    /// Render a single entry document
    pub fn render_entry(entry: &JournalEntry) -> Result<Vec<u8>> {
        let mut composer = PageComposer::new("Journal Entry")?;
        entry_doc::compose_entry(&mut composer, entry);
        composer.finish(FOOTER_PREFIX)
    }

    /// Render a multi-entry document: cover page, then one page flow per
    /// entry, newest first
    pub fn render_entries(entries: &[JournalEntry]) -> Result<Vec<u8>> {
        let mut composer = PageComposer::new("Journal Entries")?;
        entry_doc::compose_cover(&mut composer, entries);

        let mut ordered: Vec<&JournalEntry> = entries.iter().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for entry in ordered {
            composer.new_page();
            entry_doc::compose_entry(&mut composer, entry);
        }

        composer.finish(FOOTER_PREFIX)
    }

    /// Render an analytics report document
    pub fn render_report(report: &AnalyticsReport) -> Result<Vec<u8>> {
        let mut composer = PageComposer::new("Journal Analytics Report")?;
        report_doc::compose_report(&mut composer, report);
        composer.finish(FOOTER_PREFIX)
    }
}
