use serde_json::Value;
use tracing::debug;

use crate::domain::pulse::{Category, DatasetKind, FlatRecord, Section, SourceFile};

mod aggregated;
mod map;
mod top;

/// Outcome of extracting one document
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Rows for the document's dataset; may be empty
    Records(Vec<FlatRecord>),
    /// `data` is absent, null or not an object
    EmptyDocument,
    /// The path named no known section/category pair
    UnrecognizedShape,
}

impl Extraction {
    pub fn records(&self) -> &[FlatRecord] {
        match self {
            Extraction::Records(records) => records,
            _ => &[],
        }
    }
}

/// Classifies a document by its path tags and flattens it into rows.
///
/// Every row's `year` and `quarter` come from the [`SourceFile`], never from
/// document content. Missing or null nested values become `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordExtractor;

impl RecordExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, file: &SourceFile, document: &Value) -> Extraction {
        let data = match document.get("data") {
            Some(data) if data.is_object() => data,
            _ => return Extraction::EmptyDocument,
        };

        let (section, category) = match (file.section, file.category) {
            (Some(section), Some(category)) => (section, category),
            _ => return Extraction::UnrecognizedShape,
        };

        let period = file.period;
        let records = match (section, category) {
            (Section::Aggregated, Category::Transaction) => {
                self.aggregated_transaction(period, data)
            }
            (Section::Aggregated, Category::User) => self.aggregated_user(period, data),
            (Section::Aggregated, Category::Insurance) => self.aggregated_insurance(period, data),
            (Section::Map, Category::Transaction) => self.map_transaction(period, data),
            (Section::Map, Category::User) => self.map_user(period, data),
            (Section::Map, Category::Insurance) => self.map_insurance(period, data),
            (Section::Top, Category::Transaction) => self.top_transaction(period, data),
            (Section::Top, Category::User) => self.top_user(period, data),
            (Section::Top, Category::Insurance) => self.top_insurance(period, data),
        };

        let dataset = DatasetKind::for_shape(section, category);
        debug_assert!(records.iter().all(|record| record.dataset() == dataset));
        debug!(
            path = %file.path.display(),
            dataset = %dataset,
            rows = records.len(),
            "extracted document"
        );
        Extraction::Records(records)
    }
}

#[cfg(test)]
mod tests;
