use crate::domain::model::MoodEntry;
use crate::domain::ports::Journal;
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Append-only text journal backed by a single file. The file is created on
/// first use and never rewritten.
#[derive(Debug, Clone)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Journal for FileJournal {
    fn append(&mut self, entry: &MoodEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        writeln!(file, "{}", entry.log_line())?;
        file.flush()?;
        Ok(())
    }
}
