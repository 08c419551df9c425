//! Journal entry read model

use chrono::{DateTime, Local, Utc};

/// A journal entry as consumed by analytics and export.
///
/// Tag and category names are pre-joined by the store; the domain never
/// resolves them itself. `content` is HTML as produced by a rich-text editor.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub primary_mood: String,
    pub secondary_mood1: Option<String>,
    pub secondary_mood2: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub category_name: Option<String>,
    pub tag_names: Vec<String>,
}

impl JournalEntry {
    /// Number of whitespace-delimited tokens in `content`.
    ///
    /// Counts tokens of the raw HTML, markup included, matching the word
    /// count shown everywhere else in the journal.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// All moods carried by this entry: primary first, then any secondary
    /// moods, duplicates removed.
    pub fn all_moods(&self) -> Vec<&str> {
        let mut moods = vec![self.primary_mood.as_str()];
        for secondary in [&self.secondary_mood1, &self.secondary_mood2] {
            if let Some(mood) = secondary {
                if !mood.is_empty() && !moods.contains(&mood.as_str()) {
                    moods.push(mood.as_str());
                }
            }
        }
        moods
    }

    /// Creation time in the local time zone
    pub fn local_created(&self) -> DateTime<Local> {
        self.created_at.with_timezone(&Local)
    }

    /// Title for display; empty titles become "Untitled Entry"
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled Entry"
        } else {
            &self.title
        }
    }

    /// Short local creation date, e.g. "Jan 17, 2025"
    pub fn formatted_created_date(&self) -> String {
        self.local_created().format("%b %d, %Y").to_string()
    }

    /// Local creation time, e.g. "9:41 AM"
    pub fn formatted_time(&self) -> String {
        self.local_created().format("%-I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry_with_content(content: &str) -> JournalEntry {
        JournalEntry {
            id: 1,
            title: "Test".to_string(),
            content: content.to_string(),
            primary_mood: "calm".to_string(),
            secondary_mood1: None,
            secondary_mood2: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 17, 10, 0, 0).unwrap(),
            modified_at: None,
            category_name: None,
            tag_names: vec![],
        }
    }

    #[test]
    fn test_word_count_plain_text() {
        assert_eq!(entry_with_content("hello world").word_count(), 2);
        assert_eq!(entry_with_content("  spaced   out  ").word_count(), 2);
        assert_eq!(entry_with_content("").word_count(), 0);
    }

    #[test]
    fn test_word_count_includes_markup_tokens() {
        // Markup is not stripped before counting; "<p>Hello" is one token.
        assert_eq!(entry_with_content("<p>Hello world</p>").word_count(), 2);
        assert_eq!(entry_with_content("<p>Hello <b>world</b></p>").word_count(), 2);
    }

    #[test]
    fn test_all_moods_includes_secondaries() {
        let mut entry = entry_with_content("x");
        entry.primary_mood = "happy".to_string();
        entry.secondary_mood1 = Some("calm".to_string());
        entry.secondary_mood2 = Some("tired".to_string());
        assert_eq!(entry.all_moods(), vec!["happy", "calm", "tired"]);
    }

    #[test]
    fn test_all_moods_skips_empty_and_duplicates() {
        let mut entry = entry_with_content("x");
        entry.primary_mood = "happy".to_string();
        entry.secondary_mood1 = Some(String::new());
        entry.secondary_mood2 = Some("happy".to_string());
        assert_eq!(entry.all_moods(), vec!["happy"]);
    }

    #[test]
    fn test_display_title_fallback() {
        let mut entry = entry_with_content("x");
        entry.title = String::new();
        assert_eq!(entry.display_title(), "Untitled Entry");
        entry.title = "Morning pages".to_string();
        assert_eq!(entry.display_title(), "Morning pages");
    }
}
