use clap::Parser;
use mood_recorder::utils::{logger, validation::Validate};
use mood_recorder::{CliConfig, FileJournal, PromptSource, RecorderEngine, RecorderPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mood-recorder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let journal = FileJournal::new(config.log_file.clone());
    let source = PromptSource::new(std::io::stdin().lock(), std::io::stdout());
    let pipeline = RecorderPipeline::new(source, journal, config);
    let mut engine = RecorderEngine::new(pipeline);

    match engine.run() {
        Ok(recorded) => {
            tracing::info!("Mood {} recorded", recorded.entry.value);
            println!("{}", recorded.feedback);
        }
        Err(e) => {
            tracing::error!("Mood recording failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
