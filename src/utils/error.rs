use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid mood input: {input:?} is not an integer")]
    InvalidInput { input: String },

    #[error("Mood {value} is outside the accepted range [-5, 5]")]
    OutOfRange { value: i32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl MoodError {
    /// The message shown on the console, distinct from the Display form used
    /// in logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MoodError::InvalidInput { .. } => "Please enter a valid integer.".to_string(),
            MoodError::OutOfRange { .. } => "Please use the range '-5 to 5'.".to_string(),
            MoodError::IoError(e) => format!("Failed to write the mood log: {}", e),
            MoodError::ConfigError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MoodError::InvalidInput { .. } => {
                "Enter a whole number, e.g. -3, 0 or 4".to_string()
            }
            MoodError::OutOfRange { .. } => {
                "Pick a value between -5 (worst) and 5 (best)".to_string()
            }
            MoodError::IoError(_) => {
                "Check that the log file's directory exists and is writable".to_string()
            }
            MoodError::ConfigError { .. } => {
                "Review the command line options (--help lists them)".to_string()
            }
        }
    }

    /// Every failure is fatal to this single-shot process.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, MoodError>;
