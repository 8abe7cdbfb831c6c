use crate::utils::error::{MoodError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(MoodError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(MoodError::ConfigError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
