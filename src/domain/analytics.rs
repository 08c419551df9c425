//! Journal analytics computation
//!
//! Aggregates a user's entries into a snapshot of counts, streaks, mood and
//! tag breakdowns, weekly trends, and time-of-day distribution. Streak
//! arithmetic always runs over all entries; everything else respects the
//! selected period.

use crate::domain::entry::JournalEntry;
use crate::domain::mood::MoodCategory;
use crate::domain::period::Period;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Timelike, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Names of the four time-of-day buckets, in enumeration order
pub const TIME_SLOTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];

/// How often a tag appears across entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUsage {
    pub name: String,
    pub count: usize,
}

/// Aggregated analytics over a set of journal entries
#[derive(Debug, Clone, Default)]
pub struct AnalyticsSnapshot {
    pub total_entries: usize,
    pub total_words: usize,
    pub average_words_per_entry: f64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Entries per day in the period, as a percentage capped at 100
    pub completion_rate: u32,
    pub days_journaling: usize,
    /// Mood -> occurrence count, in first-encounter order
    pub mood_counts: Vec<(String, usize)>,
    pub most_common_mood: String,
    pub positive_mood_percentage: u32,
    pub neutral_mood_percentage: u32,
    pub negative_mood_percentage: u32,
    /// Category name -> entry count; uncategorized entries use ""
    pub category_counts: Vec<(String, usize)>,
    pub unique_categories: usize,
    /// Week label -> entry count, ascending by week start
    pub weekly_frequency: Vec<(String, usize)>,
    /// All tags with usage counts, most used first
    pub top_tags: Vec<TagUsage>,
    pub unique_tags: usize,
    /// Week label -> average word count, ascending by week start
    pub word_count_trend: Vec<(String, usize)>,
    pub word_count_growth: i64,
    /// All four time slots, in enumeration order, zero counts included
    pub time_distribution: Vec<(String, usize)>,
    pub most_active_time_slot: String,
}

/// Computes analytics snapshots from entry collections
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Compute a snapshot for the given period.
    ///
    /// An empty entry collection is a normal state and yields a zero-valued
    /// snapshot.
    pub fn compute(
        entries: &[JournalEntry],
        period: Period,
        now: DateTime<Local>,
    ) -> AnalyticsSnapshot {
        let filtered: Vec<&JournalEntry> = match period.cutoff(now) {
            Some(cutoff) => {
                let cutoff = cutoff.with_timezone(&Utc);
                entries.iter().filter(|e| e.created_at >= cutoff).collect()
            }
            None => entries.iter().collect(),
        };

        let mut snapshot = AnalyticsSnapshot {
            total_entries: filtered.len(),
            total_words: filtered.iter().map(|e| e.word_count()).sum(),
            ..AnalyticsSnapshot::default()
        };
        snapshot.average_words_per_entry = if filtered.is_empty() {
            0.0
        } else {
            snapshot.total_words as f64 / snapshot.total_entries as f64
        };

        // Streaks run over all entries, not the period-filtered subset.
        let (current, longest) = Self::streaks(entries, now.date_naive());
        snapshot.current_streak = current;
        snapshot.longest_streak = longest;

        snapshot.completion_rate = Self::completion_rate(entries, &filtered, period, now);

        snapshot.days_journaling = filtered
            .iter()
            .map(|e| e.local_created().date_naive())
            .collect::<BTreeSet<_>>()
            .len();

        Self::fill_moods(&filtered, &mut snapshot);
        Self::fill_categories(&filtered, &mut snapshot);
        Self::fill_weeks(&filtered, &mut snapshot);
        Self::fill_tags(&filtered, &mut snapshot);
        Self::fill_time_distribution(&filtered, &mut snapshot);

        snapshot
    }

    /// Current and longest streaks of consecutive local calendar days
    fn streaks(entries: &[JournalEntry], today: NaiveDate) -> (u32, u32) {
        if entries.is_empty() {
            return (0, 0);
        }

        let dates: BTreeSet<NaiveDate> = entries
            .iter()
            .map(|e| e.local_created().date_naive())
            .collect();

        // Walk back from today (or yesterday, to let an unfinished day pass).
        let yesterday = today - Duration::days(1);
        let mut current = 0u32;
        if dates.contains(&today) || dates.contains(&yesterday) {
            let mut check = if dates.contains(&today) { today } else { yesterday };
            while dates.contains(&check) {
                current += 1;
                check = check - Duration::days(1);
            }
        }

        let mut longest = 0u32;
        let mut run = 1u32;
        let mut prev: Option<NaiveDate> = None;
        for date in &dates {
            if let Some(previous) = prev {
                if *date - previous == Duration::days(1) {
                    run += 1;
                } else {
                    longest = longest.max(run);
                    run = 1;
                }
            }
            prev = Some(*date);
        }

        (current, longest.max(run))
    }

    fn completion_rate(
        all: &[JournalEntry],
        filtered: &[&JournalEntry],
        period: Period,
        now: DateTime<Local>,
    ) -> u32 {
        let days_in_period = if period.days() > 0 {
            period.days() as i64
        } else if let Some(earliest) = all.iter().map(|e| e.created_at).min() {
            (now.with_timezone(&Utc) - earliest).num_days() + 1
        } else {
            1
        };

        if days_in_period <= 0 {
            return 0;
        }
        ((filtered.len() as i64 * 100 / days_in_period) as u32).min(100)
    }

    fn fill_moods(filtered: &[&JournalEntry], snapshot: &mut AnalyticsSnapshot) {
        for entry in filtered {
            for mood in entry.all_moods() {
                upsert_count(&mut snapshot.mood_counts, mood);
            }
        }

        // Ties resolve to the first-encountered mood.
        snapshot.most_common_mood = first_max(&snapshot.mood_counts)
            .map(str::to_string)
            .unwrap_or_default();

        let total = filtered.len();
        if total == 0 {
            return;
        }

        let mut positive = 0usize;
        let mut neutral = 0usize;
        let mut negative = 0usize;
        for entry in filtered {
            match MoodCategory::of(&entry.primary_mood) {
                Some(MoodCategory::Positive) => positive += 1,
                Some(MoodCategory::Neutral) => neutral += 1,
                Some(MoodCategory::Negative) => negative += 1,
                None => {}
            }
        }
        snapshot.positive_mood_percentage = (positive * 100 / total) as u32;
        snapshot.neutral_mood_percentage = (neutral * 100 / total) as u32;
        snapshot.negative_mood_percentage = (negative * 100 / total) as u32;
    }

    fn fill_categories(filtered: &[&JournalEntry], snapshot: &mut AnalyticsSnapshot) {
        for entry in filtered {
            let name = entry.category_name.as_deref().unwrap_or("");
            upsert_count(&mut snapshot.category_counts, name);
        }
        snapshot.unique_categories = snapshot
            .category_counts
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .count();
    }

    fn fill_weeks(filtered: &[&JournalEntry], snapshot: &mut AnalyticsSnapshot) {
        // Week start is the preceding (or same) Sunday, local time.
        let mut weeks: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();
        for entry in filtered {
            let date = entry.local_created().date_naive();
            let start = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
            let bucket = weeks.entry(start).or_insert((0, 0));
            bucket.0 += 1;
            bucket.1 += entry.word_count();
        }

        for (start, (count, words)) in &weeks {
            let label = start.format("%b %-d").to_string();
            snapshot.weekly_frequency.push((label.clone(), *count));
            snapshot.word_count_trend.push((label, words / count));
        }

        if snapshot.word_count_trend.len() >= 2 {
            let first = snapshot.word_count_trend.first().map(|(_, avg)| *avg).unwrap_or(0);
            let last = snapshot.word_count_trend.last().map(|(_, avg)| *avg).unwrap_or(0);
            snapshot.word_count_growth = last as i64 - first as i64;
        }
    }

    fn fill_tags(filtered: &[&JournalEntry], snapshot: &mut AnalyticsSnapshot) {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in filtered {
            for tag in &entry.tag_names {
                upsert_count(&mut counts, tag);
            }
        }
        snapshot.unique_tags = counts.len();

        // Stable sort keeps first-encounter order for equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        snapshot.top_tags = counts
            .into_iter()
            .map(|(name, count)| TagUsage { name, count })
            .collect();
    }

    fn fill_time_distribution(filtered: &[&JournalEntry], snapshot: &mut AnalyticsSnapshot) {
        let mut buckets = [0usize; 4];
        for entry in filtered {
            let hour = entry.local_created().hour();
            let slot = match hour {
                5..=11 => 0,
                12..=16 => 1,
                17..=20 => 2,
                _ => 3,
            };
            buckets[slot] += 1;
        }

        snapshot.time_distribution = TIME_SLOTS
            .iter()
            .zip(buckets.iter())
            .map(|(name, count)| (name.to_string(), *count))
            .collect();

        // Ties resolve to the earliest slot in enumeration order.
        snapshot.most_active_time_slot = first_max(&snapshot.time_distribution)
            .map(str::to_string)
            .unwrap_or_default();
    }
}

/// First entry holding the maximum count; later equal counts do not win
fn first_max(counts: &[(String, usize)]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        match best {
            Some((_, max)) if *count <= max => {}
            _ => best = Some((name, *count)),
        }
    }
    best.map(|(name, _)| name)
}

fn upsert_count(counts: &mut Vec<(String, usize)>, key: &str) {
    if let Some(slot) = counts.iter_mut().find(|(name, _)| name == key) {
        slot.1 += 1;
    } else {
        counts.push((key.to_string(), 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn entry(id: u64, created: DateTime<Local>, content: &str, mood: &str) -> JournalEntry {
        JournalEntry {
            id,
            title: format!("Entry {}", id),
            content: content.to_string(),
            primary_mood: mood.to_string(),
            secondary_mood1: None,
            secondary_mood2: None,
            created_at: created.with_timezone(&Utc),
            modified_at: None,
            category_name: None,
            tag_names: vec![],
        }
    }

    #[test]
    fn test_empty_entries_yield_zero_snapshot() {
        let now = local(2024, 1, 4, 12);
        let snapshot = AnalyticsEngine::compute(&[], Period::AllTime, now);

        assert_eq!(snapshot.total_entries, 0);
        assert_eq!(snapshot.total_words, 0);
        assert_eq!(snapshot.average_words_per_entry, 0.0);
        assert_eq!(snapshot.current_streak, 0);
        assert_eq!(snapshot.longest_streak, 0);
        assert_eq!(snapshot.completion_rate, 0);
        assert_eq!(snapshot.most_common_mood, "");
        assert!(snapshot.mood_counts.is_empty());
        // Time buckets are always present, even for an empty journal.
        assert_eq!(snapshot.time_distribution.len(), 4);
        assert!(snapshot.time_distribution.iter().all(|(_, n)| *n == 0));
        assert_eq!(snapshot.most_active_time_slot, "Morning");
    }

    #[test]
    fn test_total_words_is_sum_of_entry_word_counts() {
        let now = local(2024, 1, 4, 12);
        let entries = vec![
            entry(1, local(2024, 1, 2, 9), "one two three", "calm"),
            entry(2, local(2024, 1, 3, 9), "<p>four five</p>", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        let expected: usize = entries.iter().map(|e| e.word_count()).sum();
        assert_eq!(snapshot.total_words, expected);
        assert_eq!(snapshot.total_entries, 2);
    }

    #[test]
    fn test_streak_scenario_with_gap() {
        // Entries on Jan 1, Jan 2, Jan 4; today is Jan 4.
        let now = local(2024, 1, 4, 12);
        let entries = vec![
            entry(1, local(2024, 1, 1, 9), "a", "calm"),
            entry(2, local(2024, 1, 2, 9), "b", "calm"),
            entry(3, local(2024, 1, 4, 9), "c", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.current_streak, 1);
        assert_eq!(snapshot.longest_streak, 2);
    }

    #[test]
    fn test_streak_zero_without_today_or_yesterday() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 6, 9), "a", "calm"),
            entry(2, local(2024, 1, 7, 9), "b", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.current_streak, 0);
        assert_eq!(snapshot.longest_streak, 2);
    }

    #[test]
    fn test_streak_may_start_yesterday() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 8, 9), "a", "calm"),
            entry(2, local(2024, 1, 9, 9), "b", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.current_streak, 2);
    }

    #[test]
    fn test_longest_streak_at_least_current() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 9, 9), "a", "calm"),
            entry(2, local(2024, 1, 10, 9), "b", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert!(snapshot.longest_streak >= snapshot.current_streak);
        assert_eq!(snapshot.longest_streak, 2);
    }

    #[test]
    fn test_multiple_entries_same_day_count_once_for_streaks() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 10, 9), "a", "calm"),
            entry(2, local(2024, 1, 10, 15), "b", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.current_streak, 1);
        assert_eq!(snapshot.longest_streak, 1);
        assert_eq!(snapshot.days_journaling, 1);
    }

    #[test]
    fn test_completion_rate_capped_at_100() {
        let now = local(2024, 1, 10, 12);
        let entries: Vec<JournalEntry> = (0..20)
            .map(|i| entry(i, local(2024, 1, 10, 9), "a", "calm"))
            .collect();

        let snapshot = AnalyticsEngine::compute(&entries, Period::Days(7), now);

        assert_eq!(snapshot.completion_rate, 100);
    }

    #[test]
    fn test_completion_rate_all_time_uses_earliest_entry() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 6, 12), "a", "calm"),
            entry(2, local(2024, 1, 8, 12), "b", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        // 2 entries over 5 days inclusive.
        assert_eq!(snapshot.completion_rate, 40);
    }

    #[test]
    fn test_period_filter_excludes_old_entries_but_not_streaks() {
        let now = local(2024, 3, 1, 12);
        let entries = vec![
            entry(1, local(2024, 1, 1, 9), "old entry here", "calm"),
            entry(2, local(2024, 2, 29, 9), "recent", "happy"),
            entry(3, local(2024, 3, 1, 9), "today", "happy"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::Days(7), now);

        assert_eq!(snapshot.total_entries, 2);
        // Streaks still see the January entry (it just doesn't extend them).
        assert_eq!(snapshot.current_streak, 2);
    }

    #[test]
    fn test_mood_counts_include_secondary_moods() {
        let now = local(2024, 1, 10, 12);
        let mut first = entry(1, local(2024, 1, 9, 9), "a", "happy");
        first.secondary_mood1 = Some("calm".to_string());
        first.secondary_mood2 = Some("tired".to_string());
        let second = entry(2, local(2024, 1, 10, 9), "b", "calm");

        let snapshot = AnalyticsEngine::compute(&[first, second], Period::AllTime, now);

        assert_eq!(
            snapshot.mood_counts,
            vec![
                ("happy".to_string(), 1),
                ("calm".to_string(), 2),
                ("tired".to_string(), 1),
            ]
        );
        assert_eq!(snapshot.most_common_mood, "calm");
    }

    #[test]
    fn test_most_common_mood_tie_breaks_to_first_encountered() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 9, 9), "a", "happy"),
            entry(2, local(2024, 1, 10, 9), "b", "sad"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.most_common_mood, "happy");
    }

    #[test]
    fn test_mood_percentages_truncate_and_sum_at_most_100() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 9, 9), "a", "happy"),
            entry(2, local(2024, 1, 9, 10), "b", "calm"),
            entry(3, local(2024, 1, 10, 9), "c", "lonely"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.positive_mood_percentage, 33);
        assert_eq!(snapshot.neutral_mood_percentage, 33);
        assert_eq!(snapshot.negative_mood_percentage, 33);
        let sum = snapshot.positive_mood_percentage
            + snapshot.neutral_mood_percentage
            + snapshot.negative_mood_percentage;
        assert!(sum <= 100);
    }

    #[test]
    fn test_only_primary_mood_feeds_percentages() {
        let now = local(2024, 1, 10, 12);
        let mut single = entry(1, local(2024, 1, 9, 9), "a", "happy");
        single.secondary_mood1 = Some("sad".to_string());

        let snapshot = AnalyticsEngine::compute(&[single], Period::AllTime, now);

        assert_eq!(snapshot.positive_mood_percentage, 100);
        assert_eq!(snapshot.negative_mood_percentage, 0);
    }

    #[test]
    fn test_category_counts_and_unique_categories() {
        let now = local(2024, 1, 10, 12);
        let mut first = entry(1, local(2024, 1, 9, 9), "a", "calm");
        first.category_name = Some("Work".to_string());
        let mut second = entry(2, local(2024, 1, 9, 10), "b", "calm");
        second.category_name = Some("Work".to_string());
        let third = entry(3, local(2024, 1, 10, 9), "c", "calm");

        let snapshot = AnalyticsEngine::compute(&[first, second, third], Period::AllTime, now);

        assert_eq!(
            snapshot.category_counts,
            vec![("Work".to_string(), 2), ("".to_string(), 1)]
        );
        assert_eq!(snapshot.unique_categories, 1);
    }

    #[test]
    fn test_weekly_frequency_ordered_by_week_start() {
        // Jan 7 2024 is a Sunday; Jan 14 starts the following week.
        let now = local(2024, 1, 20, 12);
        let entries = vec![
            entry(1, local(2024, 1, 15, 9), "one two", "calm"),
            entry(2, local(2024, 1, 8, 9), "one two three four", "calm"),
            entry(3, local(2024, 1, 9, 9), "one two", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(
            snapshot.weekly_frequency,
            vec![("Jan 7".to_string(), 2), ("Jan 14".to_string(), 1)]
        );
        assert_eq!(
            snapshot.word_count_trend,
            vec![("Jan 7".to_string(), 3), ("Jan 14".to_string(), 2)]
        );
        assert_eq!(snapshot.word_count_growth, -1);
    }

    #[test]
    fn test_word_count_growth_zero_for_single_week() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![entry(1, local(2024, 1, 9, 9), "a b c", "calm")];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.word_count_growth, 0);
    }

    #[test]
    fn test_top_tags_sorted_descending_stable() {
        let now = local(2024, 1, 10, 12);
        let mut first = entry(1, local(2024, 1, 9, 9), "a", "calm");
        first.tag_names = vec!["alpha".to_string(), "beta".to_string()];
        let mut second = entry(2, local(2024, 1, 10, 9), "b", "calm");
        second.tag_names = vec!["beta".to_string(), "gamma".to_string()];

        let snapshot = AnalyticsEngine::compute(&[first, second], Period::AllTime, now);

        assert_eq!(snapshot.top_tags.len(), 3);
        assert_eq!(snapshot.top_tags[0].name, "beta");
        assert_eq!(snapshot.top_tags[0].count, 2);
        // alpha and gamma tie at 1; first-encounter order is kept.
        assert_eq!(snapshot.top_tags[1].name, "alpha");
        assert_eq!(snapshot.top_tags[2].name, "gamma");
        assert_eq!(snapshot.unique_tags, 3);
    }

    #[test]
    fn test_time_distribution_bucket_boundaries() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 9, 5), "a", "calm"),
            entry(2, local(2024, 1, 9, 11), "b", "calm"),
            entry(3, local(2024, 1, 9, 12), "c", "calm"),
            entry(4, local(2024, 1, 9, 16), "d", "calm"),
            entry(5, local(2024, 1, 9, 17), "e", "calm"),
            entry(6, local(2024, 1, 9, 20), "f", "calm"),
            entry(7, local(2024, 1, 9, 21), "g", "calm"),
            entry(8, local(2024, 1, 9, 4), "h", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(
            snapshot.time_distribution,
            vec![
                ("Morning".to_string(), 2),
                ("Afternoon".to_string(), 2),
                ("Evening".to_string(), 2),
                ("Night".to_string(), 2),
            ]
        );
        // Four-way tie resolves to the first slot in enumeration order.
        assert_eq!(snapshot.most_active_time_slot, "Morning");
    }

    #[test]
    fn test_average_words_per_entry() {
        let now = local(2024, 1, 10, 12);
        let entries = vec![
            entry(1, local(2024, 1, 9, 9), "one two three", "calm"),
            entry(2, local(2024, 1, 10, 9), "four", "calm"),
        ];

        let snapshot = AnalyticsEngine::compute(&entries, Period::AllTime, now);

        assert_eq!(snapshot.average_words_per_entry, 2.0);
    }
}
