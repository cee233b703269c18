// ============================================================
// DATASET WRITER
// ============================================================
// Serialize each dataset to its own CSV artifact

use std::path::PathBuf;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::error::{AppError, Result};
use crate::domain::pulse::{DatasetKind, Datasets, WrittenArtifact};
use crate::infrastructure::artifact_store::{atomic_write_bytes, ensure_dir, sha256_hex};

/// CSV writer for the nine datasets
pub struct DatasetWriter {
    /// Directory receiving `<dataset_id>.csv` files
    output_dir: PathBuf,

    /// Field delimiter (default: comma)
    delimiter: u8,
}

impl DatasetWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            delimiter: b',',
        }
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write every dataset, including empty ones.
    ///
    /// The output directory is created first; failing that is fatal. Each
    /// dataset is then written on its own, and a failure on one does not stop
    /// the others. The first failure is returned once all were attempted.
    pub fn write_all(&self, datasets: &Datasets) -> Result<Vec<WrittenArtifact>> {
        ensure_dir(&self.output_dir)?;

        let mut written = Vec::with_capacity(DatasetKind::ALL.len());
        let mut first_error: Option<AppError> = None;

        for kind in DatasetKind::ALL {
            match self.write_dataset(datasets, kind) {
                Ok(artifact) => {
                    info!(
                        dataset = %kind,
                        path = %artifact.path.display(),
                        rows = artifact.rows,
                        "saved dataset"
                    );
                    written.push(artifact);
                }
                Err(e) => {
                    error!(dataset = %kind, error = %e, "failed to write dataset");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }

    /// Render and atomically write one dataset
    pub fn write_dataset(&self, datasets: &Datasets, kind: DatasetKind) -> Result<WrittenArtifact> {
        let bytes = self.render(datasets, kind)?;
        let path = self.output_dir.join(kind.file_name());
        atomic_write_bytes(&path, &bytes)?;

        Ok(WrittenArtifact {
            dataset: kind,
            path,
            rows: datasets.row_count(kind),
            sha256: sha256_hex(&bytes),
        })
    }

    /// Render one dataset as CSV bytes: header row, then one line per row
    pub fn render(&self, datasets: &Datasets, kind: DatasetKind) -> Result<Vec<u8>> {
        match kind {
            DatasetKind::AggregatedTransaction => {
                self.render_rows(kind, &datasets.aggregated_transaction)
            }
            DatasetKind::AggregatedUser => self.render_rows(kind, &datasets.aggregated_user),
            DatasetKind::AggregatedInsurance => {
                self.render_rows(kind, &datasets.aggregated_insurance)
            }
            DatasetKind::MapTransaction => self.render_rows(kind, &datasets.map_transaction),
            DatasetKind::MapUser => self.render_rows(kind, &datasets.map_user),
            DatasetKind::MapInsurance => self.render_rows(kind, &datasets.map_insurance),
            DatasetKind::TopTransaction => self.render_rows(kind, &datasets.top_transaction),
            DatasetKind::TopUser => self.render_rows(kind, &datasets.top_user),
            DatasetKind::TopInsurance => self.render_rows(kind, &datasets.top_insurance),
        }
    }

    fn render_rows<T: Serialize>(&self, kind: DatasetKind, rows: &[T]) -> Result<Vec<u8>> {
        // Header is written by hand so empty datasets still get one.
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(kind.columns()).map_err(|e| {
            AppError::Internal(format!("Failed to write {} header: {}", kind, e))
        })?;

        for (index, row) in rows.iter().enumerate() {
            writer.serialize(row).map_err(|e| {
                AppError::Internal(format!(
                    "Failed to serialize {} row {}: {}",
                    kind,
                    index + 1,
                    e
                ))
            })?;
        }

        writer
            .into_inner()
            .map_err(|e| AppError::Internal(format!("Failed to flush {} rows: {}", kind, e)))
    }
}
