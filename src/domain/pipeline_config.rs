// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// Values controlling where the run reads, writes and how it logs

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use super::pulse::DatasetKind;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for a single ingestion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Root of the JSON document tree (default: "data")
    pub input_root: PathBuf,

    /// Directory receiving the nine dataset artifacts (default: "parsed_output")
    pub output_dir: PathBuf,

    /// Single ASCII field delimiter for the artifacts (default: ",")
    pub delimiter: String,

    /// Follow symlinks while walking the input tree
    pub follow_links: bool,

    /// Write the run summary as JSON next to the artifacts
    pub write_report: bool,

    /// File name of the JSON run summary (default: "run_report.json")
    pub report_file_name: String,

    /// Fallback log filter when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("data"),
            output_dir: PathBuf::from("parsed_output"),
            delimiter: ",".to_string(),
            follow_links: false,
            write_report: true,
            report_file_name: "run_report.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delimiter as the byte the CSV writer expects. Call after `validate`.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file_name)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.input_root.as_os_str().is_empty() {
            return Err("input_root must not be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }

        let delimiter = self.delimiter.as_bytes();
        if delimiter.len() != 1 || !delimiter[0].is_ascii() {
            return Err(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ));
        }
        if matches!(delimiter[0], b'"' | b'\r' | b'\n') {
            return Err(format!("delimiter {:?} is not allowed", self.delimiter));
        }

        if self.report_file_name.trim().is_empty() {
            return Err("report_file_name must not be empty".to_string());
        }
        if self.report_file_name.contains(['/', '\\']) {
            return Err("report_file_name must be a bare file name".to_string());
        }
        if matches!(self.report_file_name.as_str(), "." | "..") {
            return Err(format!(
                "report_file_name {:?} is not a file name",
                self.report_file_name
            ));
        }
        if let Some(kind) = DatasetKind::ALL
            .iter()
            .find(|kind| kind.file_name().eq_ignore_ascii_case(&self.report_file_name))
        {
            return Err(format!(
                "report_file_name {:?} would overwrite the {} dataset",
                self.report_file_name, kind
            ));
        }

        // Artifacts written under the input tree would be read back as input
        if lexical(&self.output_dir).starts_with(lexical(&self.input_root)) {
            return Err(format!(
                "output_dir {} must not be inside input_root {}",
                self.output_dir.display(),
                self.input_root.display()
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!("Unknown log level: {}", self.log_level));
        }
        Ok(())
    }
}

/// Path without `.` components, for prefix comparison
fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Values given explicitly on the command line; unset fields leave the
/// lower configuration layers untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_links: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_report: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}
