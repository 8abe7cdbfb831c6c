use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Lowest mood the recorder accepts.
pub const MOOD_MIN: i32 = -5;
/// Highest mood the recorder accepts.
pub const MOOD_MAX: i32 = 5;

/// Message printed for values the feedback table does not cover. Unreachable
/// once the range check has run, but the emitter never errors.
pub const FALLBACK_FEEDBACK: &str = "Thank you for sharing how you feel.";

/// One timestamped, self-reported mood. Immutable once written to the journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub timestamp: DateTime<Local>,
    pub value: i32,
}

impl MoodEntry {
    pub fn now(value: i32) -> Self {
        Self {
            timestamp: Local::now(),
            value,
        }
    }

    /// Renders the entry as one journal line, without the trailing newline.
    /// The timestamp keeps microsecond precision so entries stay ordered
    /// within a second.
    pub fn log_line(&self) -> String {
        format!(
            "{}: Mood = {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            self.value
        )
    }
}

/// Outcome of one recorder run: the entry that was journaled plus the
/// feedback line to print.
#[derive(Debug, Clone)]
pub struct RecordedMood {
    pub entry: MoodEntry,
    pub feedback: String,
}

/// Fixed mapping from each mood in [MOOD_MIN, MOOD_MAX] to a supportive
/// message. Anything else gets the generic fallback.
pub fn feedback_for(value: i32) -> &'static str {
    match value {
        5 => "You're doing great!",
        4 => "Looking good!",
        3 => "Excellent!",
        2 => "You're getting there",
        1 => "Good to know",
        0 => "Perfectly balanced, as all things should be...",
        -1 => "You're going to be ok",
        -2 => "There's always darkness before the dawn",
        -3 => "Hang in there!",
        -4 => "Sorry to hear that :(, things will get better!",
        -5 => "Keep your chin up!",
        _ => FALLBACK_FEEDBACK,
    }
}
