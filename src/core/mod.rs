pub mod engine;
pub mod pipeline;
pub mod source;

pub use crate::domain::model::{
    feedback_for, MoodEntry, RecordedMood, FALLBACK_FEEDBACK, MOOD_MAX, MOOD_MIN,
};
pub use crate::domain::ports::{ConfigProvider, Journal, MoodSource, Pipeline};
pub use crate::utils::error::Result;
