pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::FileJournal, CliConfig};
pub use core::{engine::RecorderEngine, pipeline::RecorderPipeline, source::PromptSource};
pub use utils::error::{MoodError, Result};
