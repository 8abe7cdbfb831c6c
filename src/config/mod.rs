pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mood-recorder")]
#[command(about = "Record and log your mood.")]
pub struct CliConfig {
    /// Your mood on a scale from -5 to 5. Skips the interactive prompt.
    #[arg(long, short, allow_negative_numbers = true)]
    pub mood: Option<i32>,

    /// File the mood entries are appended to.
    #[arg(long, default_value = "mood.log")]
    pub log_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn mood(&self) -> Option<i32> {
        self.mood
    }

    fn log_path(&self) -> &str {
        &self.log_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("log_file", &self.log_file)
    }
}
