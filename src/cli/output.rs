//! Output formatting utilities

use crate::domain::mood::format_mood_name;
use crate::domain::{AnalyticsSnapshot, JournalEntry};

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  #{:<4} {}\n",
            entry.local_created().format("%d-%m-%Y"),
            entry.id,
            entry.display_title()
        ));
    }
    output
}

/// Format an analytics snapshot as a text report
pub fn format_snapshot(snapshot: &AnalyticsSnapshot, period_label: &str) -> String {
    let mut output = String::new();

    output.push_str("=== Journal Analytics Report ===\n");
    output.push_str(&format!("Period: {}\n\n", period_label));

    output.push_str("--- Overview ---\n");
    output.push_str(&format!("Total Entries: {}\n", snapshot.total_entries));
    output.push_str(&format!("Current Streak: {} days\n", snapshot.current_streak));
    output.push_str(&format!("Longest Streak: {} days\n", snapshot.longest_streak));
    output.push_str(&format!(
        "Average Words/Entry: {:.0}\n",
        snapshot.average_words_per_entry
    ));
    output.push_str(&format!("Total Words Written: {}\n", snapshot.total_words));
    output.push_str(&format!("Completion Rate: {}%\n", snapshot.completion_rate));
    output.push_str(&format!("Days Journaling: {}\n", snapshot.days_journaling));

    if !snapshot.mood_counts.is_empty() {
        output.push_str("\n--- Mood Distribution ---\n");
        let mut moods = snapshot.mood_counts.clone();
        moods.sort_by(|a, b| b.1.cmp(&a.1));
        for (mood, count) in &moods {
            output.push_str(&format!("{}: {}\n", format_mood_name(mood), count));
        }
        output.push_str(&format!(
            "Positive: {}%  Neutral: {}%  Negative: {}%\n",
            snapshot.positive_mood_percentage,
            snapshot.neutral_mood_percentage,
            snapshot.negative_mood_percentage
        ));
        output.push_str(&format!(
            "Most common mood: {}\n",
            format_mood_name(&snapshot.most_common_mood)
        ));
    }

    if !snapshot.top_tags.is_empty() {
        output.push_str("\n--- Top Tags ---\n");
        for tag in snapshot.top_tags.iter().take(10) {
            output.push_str(&format!("{}: {} uses\n", tag.name, tag.count));
        }
    }

    if !snapshot.weekly_frequency.is_empty() {
        output.push_str("\n--- Weekly Frequency ---\n");
        for (week, count) in &snapshot.weekly_frequency {
            output.push_str(&format!("{}: {} entries\n", week, count));
        }
    }

    if !snapshot.word_count_trend.is_empty() {
        output.push_str("\n--- Word Count Trend ---\n");
        for (week, average) in &snapshot.word_count_trend {
            output.push_str(&format!("{}: {} avg words\n", week, average));
        }
        output.push_str(&format!("Growth: {:+}\n", snapshot.word_count_growth));
    }

    output.push_str("\n--- Time of Day ---\n");
    for (slot, count) in &snapshot.time_distribution {
        output.push_str(&format!("{}: {}\n", slot, count));
    }
    output.push_str(&format!("Most active: {}\n", snapshot.most_active_time_slot));

    output
}
