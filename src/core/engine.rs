use crate::core::{Pipeline, RecordedMood};
use crate::utils::error::Result;

/// Drives one recorder run through the pipeline: resolve, validate, record,
/// feedback. Strictly linear; the first error aborts the run.
pub struct RecorderEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RecorderEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<RecordedMood> {
        tracing::debug!("Resolving mood value");
        let raw = self.pipeline.resolve()?;

        tracing::debug!("Validating mood value {}", raw);
        let value = self.pipeline.validate(raw)?;

        let entry = self.pipeline.record(value)?;
        tracing::info!("Recorded mood entry: {}", entry.log_line());

        let feedback = self.pipeline.feedback(value).to_string();
        Ok(RecordedMood { entry, feedback })
    }
}
