// ============================================================
// PULSE DOMAIN LAYER
// ============================================================
// Core types for flattening Pulse statistics documents
// No I/O, no async

mod dataset;
mod datasets;
mod records;
mod run_summary;
mod shape;
mod skip;
mod source;

pub use dataset::DatasetKind;
pub use datasets::Datasets;
pub use records::{
    AggregatedInsuranceRow, AggregatedTransactionRow, AggregatedUserRow, FlatRecord,
    MapMetricRow, MapUserRow, TopMetricRow, TopUserRow,
};
pub use run_summary::{RunSummary, WrittenArtifact};
pub use shape::{Category, Level, Section};
pub use skip::{LoadError, SkipKind, SkippedFile};
pub use source::{Period, SourceDocument, SourceFile};
