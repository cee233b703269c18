pub mod use_cases;

pub use use_cases::dataset_assembler::DatasetAssembler;
pub use use_cases::pulse_ingestion::PulseIngestionUseCase;
pub use use_cases::record_extraction::{Extraction, RecordExtractor};
