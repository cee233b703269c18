// ============================================================
// DATASET CHANNELS
// ============================================================
// Nine append-only row sequences, one per output table

use std::collections::BTreeMap;

use super::{
    AggregatedInsuranceRow, AggregatedTransactionRow, AggregatedUserRow, DatasetKind, FlatRecord,
    MapMetricRow, MapUserRow, TopMetricRow, TopUserRow,
};

/// Rows grouped by dataset, in insertion order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Datasets {
    pub aggregated_transaction: Vec<AggregatedTransactionRow>,
    pub aggregated_user: Vec<AggregatedUserRow>,
    pub aggregated_insurance: Vec<AggregatedInsuranceRow>,
    pub map_transaction: Vec<MapMetricRow>,
    pub map_user: Vec<MapUserRow>,
    pub map_insurance: Vec<MapMetricRow>,
    pub top_transaction: Vec<TopMetricRow>,
    pub top_user: Vec<TopUserRow>,
    pub top_insurance: Vec<TopMetricRow>,
}

impl Datasets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a record to its dataset
    pub fn push(&mut self, record: FlatRecord) {
        match record {
            FlatRecord::AggregatedTransaction(row) => self.aggregated_transaction.push(row),
            FlatRecord::AggregatedUser(row) => self.aggregated_user.push(row),
            FlatRecord::AggregatedInsurance(row) => self.aggregated_insurance.push(row),
            FlatRecord::MapTransaction(row) => self.map_transaction.push(row),
            FlatRecord::MapUser(row) => self.map_user.push(row),
            FlatRecord::MapInsurance(row) => self.map_insurance.push(row),
            FlatRecord::TopTransaction(row) => self.top_transaction.push(row),
            FlatRecord::TopUser(row) => self.top_user.push(row),
            FlatRecord::TopInsurance(row) => self.top_insurance.push(row),
        }
    }

    /// Append every dataset of `other` after the rows already held.
    ///
    /// The resulting row sets do not depend on merge order; only row order does.
    pub fn merge(&mut self, other: Datasets) {
        self.aggregated_transaction.extend(other.aggregated_transaction);
        self.aggregated_user.extend(other.aggregated_user);
        self.aggregated_insurance.extend(other.aggregated_insurance);
        self.map_transaction.extend(other.map_transaction);
        self.map_user.extend(other.map_user);
        self.map_insurance.extend(other.map_insurance);
        self.top_transaction.extend(other.top_transaction);
        self.top_user.extend(other.top_user);
        self.top_insurance.extend(other.top_insurance);
    }

    pub fn row_count(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::AggregatedTransaction => self.aggregated_transaction.len(),
            DatasetKind::AggregatedUser => self.aggregated_user.len(),
            DatasetKind::AggregatedInsurance => self.aggregated_insurance.len(),
            DatasetKind::MapTransaction => self.map_transaction.len(),
            DatasetKind::MapUser => self.map_user.len(),
            DatasetKind::MapInsurance => self.map_insurance.len(),
            DatasetKind::TopTransaction => self.top_transaction.len(),
            DatasetKind::TopUser => self.top_user.len(),
            DatasetKind::TopInsurance => self.top_insurance.len(),
        }
    }

    pub fn row_counts(&self) -> BTreeMap<DatasetKind, usize> {
        DatasetKind::ALL
            .iter()
            .map(|kind| (*kind, self.row_count(*kind)))
            .collect()
    }

    pub fn total_rows(&self) -> usize {
        DatasetKind::ALL.iter().map(|kind| self.row_count(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_rows() == 0
    }
}

impl Extend<FlatRecord> for Datasets {
    fn extend<I: IntoIterator<Item = FlatRecord>>(&mut self, records: I) {
        for record in records {
            self.push(record);
        }
    }
}

impl FromIterator<FlatRecord> for Datasets {
    fn from_iter<I: IntoIterator<Item = FlatRecord>>(records: I) -> Self {
        let mut datasets = Datasets::new();
        datasets.extend(records);
        datasets
    }
}
