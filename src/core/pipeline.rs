use crate::core::{
    feedback_for, ConfigProvider, Journal, MoodEntry, MoodSource, Pipeline, MOOD_MAX, MOOD_MIN,
};
use crate::utils::error::{MoodError, Result};

/// The one production pipeline: a flag-or-prompt resolver, the closed-range
/// validator, an append-only journal and the fixed feedback table.
pub struct RecorderPipeline<S: MoodSource, J: Journal, C: ConfigProvider> {
    source: S,
    journal: J,
    config: C,
}

impl<S: MoodSource, J: Journal, C: ConfigProvider> RecorderPipeline<S, J, C> {
    pub fn new(source: S, journal: J, config: C) -> Self {
        Self {
            source,
            journal,
            config,
        }
    }
}

impl<S: MoodSource, J: Journal, C: ConfigProvider> Pipeline for RecorderPipeline<S, J, C> {
    fn resolve(&mut self) -> Result<i32> {
        // A flag-supplied mood always wins; the prompt never runs.
        if let Some(value) = self.config.mood() {
            tracing::debug!("Mood supplied on the command line: {}", value);
            return Ok(value);
        }

        tracing::debug!("No mood flag, prompting interactively");
        self.source.resolve()
    }

    fn validate(&self, value: i32) -> Result<i32> {
        if value < MOOD_MIN || value > MOOD_MAX {
            return Err(MoodError::OutOfRange { value });
        }
        Ok(value)
    }

    fn record(&mut self, value: i32) -> Result<MoodEntry> {
        let entry = MoodEntry::now(value);
        tracing::debug!("Appending to {}: {}", self.config.log_path(), entry.log_line());
        self.journal.append(&entry)?;
        Ok(entry)
    }

    fn feedback(&self, value: i32) -> &'static str {
        feedback_for(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StubConfig {
        mood: Option<i32>,
    }

    impl ConfigProvider for StubConfig {
        fn mood(&self) -> Option<i32> {
            self.mood
        }

        fn log_path(&self) -> &str {
            "mood.log"
        }
    }

    struct StubSource {
        value: Result<i32>,
        calls: Rc<RefCell<usize>>,
    }

    impl MoodSource for StubSource {
        fn resolve(&mut self) -> Result<i32> {
            *self.calls.borrow_mut() += 1;
            match &self.value {
                Ok(v) => Ok(*v),
                Err(MoodError::InvalidInput { input }) => Err(MoodError::InvalidInput {
                    input: input.clone(),
                }),
                Err(_) => unreachable!("stub only models parse failures"),
            }
        }
    }

    #[derive(Clone)]
    struct MockJournal {
        entries: Rc<RefCell<Vec<MoodEntry>>>,
    }

    impl MockJournal {
        fn new() -> Self {
            Self {
                entries: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl Journal for MockJournal {
        fn append(&mut self, entry: &MoodEntry) -> Result<()> {
            self.entries.borrow_mut().push(entry.clone());
            Ok(())
        }
    }

    fn pipeline(
        mood: Option<i32>,
        source_value: Result<i32>,
    ) -> (
        RecorderPipeline<StubSource, MockJournal, StubConfig>,
        MockJournal,
        Rc<RefCell<usize>>,
    ) {
        let calls = Rc::new(RefCell::new(0));
        let journal = MockJournal::new();
        let p = RecorderPipeline::new(
            StubSource {
                value: source_value,
                calls: Rc::clone(&calls),
            },
            journal.clone(),
            StubConfig { mood },
        );
        (p, journal, calls)
    }

    #[test]
    fn test_flag_takes_precedence_over_source() {
        let (mut p, _, calls) = pipeline(Some(4), Ok(1));
        assert_eq!(p.resolve().unwrap(), 4);
        assert_eq!(*calls.borrow(), 0, "prompt must not run when flag is set");
    }

    #[test]
    fn test_source_used_when_flag_absent() {
        let (mut p, _, calls) = pipeline(None, Ok(-2));
        assert_eq!(p.resolve().unwrap(), -2);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        let (p, _, _) = pipeline(None, Ok(0));
        assert_eq!(p.validate(MOOD_MIN).unwrap(), MOOD_MIN);
        assert_eq!(p.validate(MOOD_MAX).unwrap(), MOOD_MAX);
        assert_eq!(p.validate(0).unwrap(), 0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let (p, _, _) = pipeline(None, Ok(0));
        assert!(matches!(
            p.validate(6),
            Err(MoodError::OutOfRange { value: 6 })
        ));
        assert!(matches!(
            p.validate(-10),
            Err(MoodError::OutOfRange { value: -10 })
        ));
    }

    #[test]
    fn test_record_appends_one_entry() {
        let (mut p, journal, _) = pipeline(Some(3), Ok(0));
        let entry = p.record(3).unwrap();
        assert_eq!(entry.value, 3);

        let entries = journal.entries.borrow();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value, 3);
    }

    #[test]
    fn test_feedback_uses_fixed_mapping() {
        let (p, _, _) = pipeline(Some(5), Ok(0));
        assert_eq!(p.feedback(5), "You're doing great!");
        assert_eq!(p.feedback(-5), "Keep your chin up!");
    }
}
