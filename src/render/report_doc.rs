//! Analytics report composition: overview metrics, mood bar chart, top tags,
//! and achievements

use super::layout::{
    FontVariant, InlineRun, PageComposer, CONTENT_WIDTH_MM, MARGIN_MM, PT_TO_MM,
};
use super::theme;
use crate::domain::analytics::{AnalyticsSnapshot, TagUsage};
use crate::domain::mood::{format_mood_name, MoodCategory};
use crate::domain::richtext::RgbColor;
use chrono::Local;

const PANEL_PADDING_MM: f32 = 5.0;
/// Width of the mood label column (100 pt)
const MOOD_LABEL_MM: f32 = 35.3;
/// Width of the right-aligned value column (60 pt)
const VALUE_COLUMN_MM: f32 = 21.2;
const BAR_HEIGHT_MM: f32 = 5.6;

/// Everything the report renderer needs, detached from the live snapshot
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub period_label: String,
    pub total_entries: usize,
    pub total_words: usize,
    pub average_words_per_entry: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub days_journaling: usize,
    pub unique_tags: usize,
    pub mood_counts: Vec<(String, usize)>,
    pub top_tags: Vec<TagUsage>,
}

impl AnalyticsReport {
    pub fn from_snapshot(period_label: &str, snapshot: &AnalyticsSnapshot) -> Self {
        AnalyticsReport {
            period_label: period_label.to_string(),
            total_entries: snapshot.total_entries,
            total_words: snapshot.total_words,
            average_words_per_entry: snapshot.average_words_per_entry,
            current_streak: snapshot.current_streak,
            longest_streak: snapshot.longest_streak,
            days_journaling: snapshot.days_journaling,
            unique_tags: snapshot.unique_tags,
            mood_counts: snapshot.mood_counts.clone(),
            top_tags: snapshot.top_tags.clone(),
        }
    }
}

pub(crate) fn compose_report(composer: &mut PageComposer, report: &AnalyticsReport) {
    compose_header(composer, report);
    compose_overview(composer, report);
    compose_mood_chart(composer, report);
    compose_top_tags(composer, report);
    compose_achievements(composer, report);
}

fn compose_header(composer: &mut PageComposer, report: &AnalyticsReport) {
    composer.write_paragraph(
        &[InlineRun::plain(
            "Journal Analytics Report",
            FontVariant::Bold,
            theme::INK_DARK,
        )],
        24.0,
        1.25,
        0.0,
    );
    composer.advance(2.0);
    composer.write_paragraph(
        &[InlineRun::plain(
            format!("Period: {}", report.period_label),
            FontVariant::Regular,
            theme::MUTED,
        )],
        12.0,
        1.3,
        0.0,
    );
    composer.advance(1.0);
    composer.write_paragraph(
        &[InlineRun::plain(
            format!("Generated: {}", Local::now().format("%B %d, %Y")),
            FontVariant::Regular,
            theme::FAINT,
        )],
        10.0,
        1.3,
        0.0,
    );

    composer.advance(3.0);
    composer.ensure_room(2.0);
    composer.hline(MARGIN_MM, composer.cursor(), CONTENT_WIDTH_MM, 2.0, theme::ACCENT);
    composer.advance(8.0);
}

fn section_title(composer: &mut PageComposer, title: &str) {
    composer.advance(4.0);
    composer.write_paragraph(
        &[InlineRun::plain(title, FontVariant::Bold, theme::INK_DARK)],
        16.0,
        1.3,
        0.0,
    );
    composer.advance(1.5);
}

/// A panel of label/value metric columns
fn metric_panel(composer: &mut PageComposer, metrics: &[(&str, String)], value_size: f32) {
    let columns = metrics.len() as f32;
    let column_width = (CONTENT_WIDTH_MM - 2.0 * PANEL_PADDING_MM) / columns;
    let label_height = 10.0 * 1.4 * PT_TO_MM;
    let value_height = value_size * 1.4 * PT_TO_MM;
    let height = 2.0 * PANEL_PADDING_MM + label_height + value_height + 1.5;

    composer.ensure_room(height);
    let top = composer.cursor();
    composer.fill_rect(MARGIN_MM, top - height, CONTENT_WIDTH_MM, height, theme::PANEL);

    let label_baseline = top - PANEL_PADDING_MM - label_height;
    let value_baseline = label_baseline - 1.5 - value_height;
    for (i, (label, value)) in metrics.iter().enumerate() {
        let x = MARGIN_MM + PANEL_PADDING_MM + i as f32 * column_width;
        composer.draw_text(x, label_baseline, label, FontVariant::Regular, 10.0, theme::MUTED);
        composer.draw_text(x, value_baseline, value, FontVariant::Bold, value_size, theme::ACCENT);
    }
    composer.set_cursor(top - height);
}

fn compose_overview(composer: &mut PageComposer, report: &AnalyticsReport) {
    section_title(composer, "Overview");
    metric_panel(
        composer,
        &[
            ("Total Entries", report.total_entries.to_string()),
            ("Current Streak", format!("{} days", report.current_streak)),
            ("Longest Streak", format!("{} days", report.longest_streak)),
            (
                "Avg Words/Entry",
                format!("{:.0}", report.average_words_per_entry),
            ),
        ],
        18.0,
    );
}

fn compose_mood_chart(composer: &mut PageComposer, report: &AnalyticsReport) {
    if report.mood_counts.is_empty() {
        return;
    }
    section_title(composer, "Mood Distribution");

    let total: usize = report.mood_counts.iter().map(|(_, count)| count).sum();
    let mut moods = report.mood_counts.clone();
    moods.sort_by(|a, b| b.1.cmp(&a.1));
    moods.truncate(10);

    let row_height = BAR_HEIGHT_MM + 3.0;
    let height = 2.0 * PANEL_PADDING_MM + moods.len() as f32 * row_height - 3.0;

    composer.ensure_room(height.min(composer.page_room()));
    let top = composer.cursor();
    composer.fill_rect(MARGIN_MM, top - height, CONTENT_WIDTH_MM, height, theme::PANEL);

    let track_x = MARGIN_MM + PANEL_PADDING_MM + MOOD_LABEL_MM;
    let track_width =
        CONTENT_WIDTH_MM - 2.0 * PANEL_PADDING_MM - MOOD_LABEL_MM - VALUE_COLUMN_MM - 2.0;

    let mut bar_top = top - PANEL_PADDING_MM;
    for (mood, count) in &moods {
        let percentage = (*count as f32 * 100.0 / total as f32).clamp(0.0, 100.0);
        let bar_bottom = bar_top - BAR_HEIGHT_MM;
        let text_baseline = bar_bottom + 1.3;

        composer.draw_text(
            MARGIN_MM + PANEL_PADDING_MM,
            text_baseline,
            &format_mood_name(mood),
            FontVariant::Regular,
            11.0,
            theme::INK,
        );

        composer.fill_rect(track_x, bar_bottom, track_width, BAR_HEIGHT_MM, theme::TRACK);
        if percentage > 0.0 {
            composer.fill_rect(
                track_x,
                bar_bottom,
                track_width * percentage / 100.0,
                BAR_HEIGHT_MM,
                mood_color(mood),
            );
        }

        composer.draw_text_right(
            MARGIN_MM + CONTENT_WIDTH_MM - PANEL_PADDING_MM,
            text_baseline,
            &format!("{} ({:.0}%)", count, percentage),
            FontVariant::Regular,
            10.0,
            theme::INK,
        );

        bar_top -= row_height;
    }
    composer.set_cursor(top - height);
}

fn compose_top_tags(composer: &mut PageComposer, report: &AnalyticsReport) {
    if report.top_tags.is_empty() {
        return;
    }
    section_title(composer, "Most Used Tags");

    let tags: Vec<&TagUsage> = report.top_tags.iter().take(10).collect();
    let row_height = 6.0;
    let height = 2.0 * PANEL_PADDING_MM + tags.len() as f32 * row_height - 2.0;

    composer.ensure_room(height.min(composer.page_room()));
    let top = composer.cursor();
    composer.fill_rect(MARGIN_MM, top - height, CONTENT_WIDTH_MM, height, theme::PANEL);

    let mut baseline = top - PANEL_PADDING_MM - 3.0;
    for tag in tags {
        composer.draw_text(
            MARGIN_MM + PANEL_PADDING_MM,
            baseline,
            &tag.name,
            FontVariant::Regular,
            11.0,
            theme::INK,
        );
        composer.draw_text_right(
            MARGIN_MM + CONTENT_WIDTH_MM - PANEL_PADDING_MM,
            baseline,
            &format!("{} uses", tag.count),
            FontVariant::Regular,
            10.0,
            theme::MUTED,
        );
        baseline -= row_height;
    }
    composer.set_cursor(top - height);
}

fn compose_achievements(composer: &mut PageComposer, report: &AnalyticsReport) {
    section_title(composer, "Achievements");
    metric_panel(
        composer,
        &[
            ("Total Words", format_thousands(report.total_words)),
            ("Days Journaling", report.days_journaling.to_string()),
            ("Unique Tags", report.unique_tags.to_string()),
        ],
        16.0,
    );
}

/// Bar color by mood category; unknown moods share the negative color
fn mood_color(mood: &str) -> RgbColor {
    match MoodCategory::of(mood) {
        Some(MoodCategory::Positive) => theme::POSITIVE,
        Some(MoodCategory::Neutral) => theme::NEUTRAL,
        _ => theme::NEGATIVE,
    }
}

/// Format with thousands separators: 12345 -> "12,345"
pub(crate) fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_mood_color_by_category() {
        assert_eq!(mood_color("happy"), theme::POSITIVE);
        assert_eq!(mood_color("calm"), theme::NEUTRAL);
        assert_eq!(mood_color("sad"), theme::NEGATIVE);
        // Unknown moods fall through to the negative color.
        assert_eq!(mood_color("mysterious"), theme::NEGATIVE);
    }

    #[test]
    fn test_report_from_snapshot_copies_fields() {
        let snapshot = AnalyticsSnapshot {
            total_entries: 3,
            total_words: 120,
            average_words_per_entry: 40.0,
            current_streak: 2,
            longest_streak: 5,
            days_journaling: 3,
            unique_tags: 2,
            mood_counts: vec![("happy".to_string(), 2), ("calm".to_string(), 1)],
            ..AnalyticsSnapshot::default()
        };

        let report = AnalyticsReport::from_snapshot("Last 30 days", &snapshot);

        assert_eq!(report.period_label, "Last 30 days");
        assert_eq!(report.total_entries, 3);
        assert_eq!(report.longest_streak, 5);
        assert_eq!(report.mood_counts.len(), 2);
    }
}
