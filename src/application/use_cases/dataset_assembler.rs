use crate::domain::pulse::{Datasets, FlatRecord};

/// Run-wide accumulator for extracted rows.
///
/// Each file is flattened into its own [`Datasets`] first and then absorbed
/// here, so per-file extraction never shares mutable state.
#[derive(Debug, Default)]
pub struct DatasetAssembler {
    datasets: Datasets,
    files_absorbed: usize,
}

impl DatasetAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group one file's records into a local bundle
    pub fn bundle(records: impl IntoIterator<Item = FlatRecord>) -> Datasets {
        records.into_iter().collect()
    }

    /// Append one file's bundle after everything absorbed so far
    pub fn absorb(&mut self, file_rows: Datasets) {
        self.datasets.merge(file_rows);
        self.files_absorbed += 1;
    }

    pub fn files_absorbed(&self) -> usize {
        self.files_absorbed
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn finish(self) -> Datasets {
        self.datasets
    }
}
