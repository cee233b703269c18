use std::path::PathBuf;

use clap::Parser;

use crate::domain::pipeline_config::PipelineOverrides;

/// Flatten Pulse statistics documents into nine CSV datasets
#[derive(Debug, Parser)]
#[command(name = "pulse-ingest")]
#[command(about = "Flatten Pulse statistics JSON into nine CSV datasets")]
pub struct Cli {
    /// Root of the JSON document tree
    #[arg(long, short = 'i', value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory receiving the CSV artifacts
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// TOML config file (defaults to ./pulse.toml when present)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Single-character field delimiter
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Follow symlinks while walking the input tree
    #[arg(long)]
    pub follow_links: bool,

    /// Skip writing the JSON run report
    #[arg(long)]
    pub no_report: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Only flags that were given end up as overrides
    pub fn overrides(&self) -> PipelineOverrides {
        PipelineOverrides {
            input_root: self.input.clone(),
            output_dir: self.output.clone(),
            delimiter: self.delimiter.clone(),
            follow_links: self.follow_links.then_some(true),
            write_report: self.no_report.then_some(false),
            log_level: self.log_level.clone(),
        }
    }
}
