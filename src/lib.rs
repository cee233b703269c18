mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use app::run;
pub use application::{DatasetAssembler, Extraction, PulseIngestionUseCase, RecordExtractor};
pub use domain::error::{AppError, Result};
pub use domain::pipeline_config::{PipelineConfig, PipelineOverrides};
pub use domain::pulse::{DatasetKind, Datasets, RunSummary, SkipKind};
pub use infrastructure::config::ConfigService;
