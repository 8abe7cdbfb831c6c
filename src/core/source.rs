use crate::core::MoodSource;
use crate::utils::error::{MoodError, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "How are you feeling today (on a scale from -5 to 5)? ";

/// Interactive mood source: prints the prompt, reads one line and parses it.
/// Generic over the streams so tests can drive it with buffers.
pub struct PromptSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoodSource for PromptSource<R, W> {
    fn resolve(&mut self) -> Result<i32> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let trimmed = line.trim();
        trimmed.parse::<i32>().map_err(|_| MoodError::InvalidInput {
            input: trimmed.to_string(),
        })
    }
}
