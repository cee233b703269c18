pub mod dataset_assembler;
pub mod pulse_ingestion;
pub mod record_extraction;
