//! Mood vocabulary and category sets

/// Moods counted as positive
pub const POSITIVE_MOODS: [&str; 5] = ["happy", "excited", "relaxed", "grateful", "confident"];

/// Moods counted as neutral
pub const NEUTRAL_MOODS: [&str; 5] = ["calm", "thoughtful", "curious", "nostalgic", "bored"];

/// Moods counted as negative
pub const NEGATIVE_MOODS: [&str; 6] = ["sad", "angry", "anxious", "stressed", "tired", "lonely"];

/// Category a mood belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    Positive,
    Neutral,
    Negative,
}

impl MoodCategory {
    /// Categorize a mood string (case-insensitive); None for unknown moods
    pub fn of(mood: &str) -> Option<MoodCategory> {
        let normalized = mood.to_lowercase();
        if POSITIVE_MOODS.contains(&normalized.as_str()) {
            Some(MoodCategory::Positive)
        } else if NEUTRAL_MOODS.contains(&normalized.as_str()) {
            Some(MoodCategory::Neutral)
        } else if NEGATIVE_MOODS.contains(&normalized.as_str()) {
            Some(MoodCategory::Negative)
        } else {
            None
        }
    }
}

/// Format a mood for display: "happy" -> "Happy"
pub fn format_mood_name(mood: &str) -> String {
    let mut chars = mood.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
