use crate::domain::model::MoodEntry;
use crate::utils::error::Result;

/// Produces a mood value when none was supplied up front. The interactive
/// prompt is the only production implementation; tests inject buffers.
pub trait MoodSource {
    fn resolve(&mut self) -> Result<i32>;
}

/// Append-only sink for mood entries. No locking: concurrent invocations may
/// interleave lines, which is acceptable for single-user, single-shot usage.
pub trait Journal {
    fn append(&mut self, entry: &MoodEntry) -> Result<()>;
}

pub trait ConfigProvider {
    fn mood(&self) -> Option<i32>;
    fn log_path(&self) -> &str;
}

/// The four steps of one recorder run, in order: resolve, validate, record,
/// feedback. The engine drives them linearly and stops on the first error.
pub trait Pipeline {
    fn resolve(&mut self) -> Result<i32>;
    fn validate(&self, value: i32) -> Result<i32>;
    fn record(&mut self, value: i32) -> Result<MoodEntry>;
    fn feedback(&self, value: i32) -> &'static str;
}
