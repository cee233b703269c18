use tracing::{debug, info, warn};

use crate::application::use_cases::dataset_assembler::DatasetAssembler;
use crate::application::use_cases::record_extraction::{Extraction, RecordExtractor};
use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::PipelineConfig;
use crate::domain::pulse::{
    Datasets, RunSummary, SkipKind, SkippedFile, SourceDocument, SourceFile,
};
use crate::infrastructure::artifact_store::atomic_write_bytes;
use crate::infrastructure::csv::DatasetWriter;
use crate::infrastructure::source::{DocumentLoader, SourceEnumerator};

/// Drives one batch run: enumerate, load, extract, assemble, write.
///
/// Per-file problems are recorded as skips and never abort the run. Only an
/// unreadable input root or an unwritable output location is fatal.
pub struct PulseIngestionUseCase {
    config: PipelineConfig,
    enumerator: SourceEnumerator,
    loader: DocumentLoader,
    extractor: RecordExtractor,
    writer: DatasetWriter,
}

impl PulseIngestionUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        let enumerator = SourceEnumerator::new(config.input_root.clone())
            .with_follow_links(config.follow_links);
        let writer =
            DatasetWriter::new(config.output_dir.clone()).with_delimiter(config.delimiter_byte());

        Self {
            config,
            enumerator,
            loader: DocumentLoader::new(),
            extractor: RecordExtractor::new(),
            writer,
        }
    }

    pub fn run(&self) -> Result<RunSummary> {
        self.config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid pipeline config: {}", e)))?;
        self.enumerator.check_root()?;
        info!(
            input = %self.config.input_root.display(),
            output = %self.config.output_dir.display(),
            "starting pulse ingestion"
        );

        let mut summary = RunSummary::new();
        let mut assembler = DatasetAssembler::new();

        for item in self.enumerator.iter() {
            summary.files_enumerated += 1;

            let outcome = item.and_then(|file| self.ingest_file(file));
            match outcome {
                Ok(file_rows) => assembler.absorb(file_rows),
                Err(skipped) => {
                    log_skip(&skipped);
                    summary.record_skip(skipped);
                }
            }
        }

        summary.files_extracted = assembler.files_absorbed();
        let datasets = assembler.finish();
        summary.rows = datasets.row_counts();
        summary.artifacts = self.writer.write_all(&datasets)?;

        if self.config.write_report {
            self.write_report(&summary)?;
        }

        log_summary(&summary);
        Ok(summary)
    }

    /// Load and flatten a single file into its own bundle of rows
    pub fn ingest_file(&self, file: SourceFile) -> std::result::Result<Datasets, SkippedFile> {
        let payload = self.loader.load(&file.path)?;
        let document = SourceDocument::new(file, payload);

        match self.extractor.extract(&document.file, &document.payload) {
            Extraction::Records(records) => Ok(DatasetAssembler::bundle(records)),
            Extraction::EmptyDocument => Err(SkippedFile::new(
                document.file.path,
                SkipKind::EmptyDocument,
                "document has no data object",
            )),
            Extraction::UnrecognizedShape => {
                let reason = format!(
                    "no known shape for section {} and category {}",
                    describe_tag(document.file.section),
                    describe_tag(document.file.category)
                );
                Err(SkippedFile::new(
                    document.file.path,
                    SkipKind::UnrecognizedShape,
                    reason,
                ))
            }
        }
    }

    fn write_report(&self, summary: &RunSummary) -> Result<()> {
        let path = self.config.report_path();
        let bytes = serde_json::to_vec_pretty(summary)
            .map_err(|e| AppError::Internal(format!("Failed to serialize run report: {}", e)))?;
        atomic_write_bytes(&path, &bytes)?;
        info!(path = %path.display(), "saved run report");
        Ok(())
    }
}

fn describe_tag<T: std::fmt::Display>(tag: Option<T>) -> String {
    tag.map(|t| t.to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}

fn log_skip(skipped: &SkippedFile) {
    match skipped.kind {
        SkipKind::EmptyDocument => debug!(
            path = %skipped.path.display(),
            kind = %skipped.kind,
            "skipping file: {}",
            skipped.reason
        ),
        _ => warn!(
            path = %skipped.path.display(),
            kind = %skipped.kind,
            "skipping file: {}",
            skipped.reason
        ),
    }
}

fn log_summary(summary: &RunSummary) {
    for (kind, count) in &summary.skipped {
        if *count > 0 {
            warn!(kind = %kind, files = count, "files skipped");
        }
    }
    info!(
        files = summary.files_enumerated,
        extracted = summary.files_extracted,
        skipped = summary.total_skipped(),
        rows = summary.total_rows(),
        "pulse ingestion complete"
    );
}
