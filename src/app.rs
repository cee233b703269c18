use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::PulseIngestionUseCase;
use crate::domain::error::Result;
use crate::domain::pulse::RunSummary;
use crate::infrastructure::config::ConfigService;
use crate::interfaces::cli::Cli;

pub fn run() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match execute(&cli) {
        Ok(summary) => {
            for artifact in &summary.artifacts {
                println!("Saved: {} ({} rows)", artifact.path.display(), artifact.rows);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("pulse-ingest: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<RunSummary> {
    let config_service = match &cli.config {
        Some(path) => ConfigService::new().with_config_file(path),
        None => ConfigService::new(),
    };
    let config = config_service.load(&cli.overrides())?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    PulseIngestionUseCase::new(config).run()
}
