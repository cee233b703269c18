pub mod error;
pub mod pipeline_config;

// Pulse document and dataset types
pub mod pulse;
