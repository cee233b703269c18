// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Tabular serialization of the flattened datasets

mod dataset_writer;

pub use dataset_writer::DatasetWriter;
