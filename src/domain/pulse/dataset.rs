// ============================================================
// DATASET IDENTIFIERS
// ============================================================
// The nine output tables and their column contracts

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Category, Section};

/// One of the nine flat output tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    AggregatedTransaction,
    AggregatedUser,
    AggregatedInsurance,
    MapTransaction,
    MapUser,
    MapInsurance,
    TopTransaction,
    TopUser,
    TopInsurance,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 9] = [
        DatasetKind::AggregatedTransaction,
        DatasetKind::AggregatedUser,
        DatasetKind::AggregatedInsurance,
        DatasetKind::MapTransaction,
        DatasetKind::MapUser,
        DatasetKind::MapInsurance,
        DatasetKind::TopTransaction,
        DatasetKind::TopUser,
        DatasetKind::TopInsurance,
    ];

    /// Dataset identifier, also the artifact's file stem
    pub fn id(&self) -> &'static str {
        match self {
            DatasetKind::AggregatedTransaction => "aggregated_transaction",
            DatasetKind::AggregatedUser => "aggregated_user",
            DatasetKind::AggregatedInsurance => "aggregated_insurance",
            DatasetKind::MapTransaction => "map_transaction",
            DatasetKind::MapUser => "map_user",
            DatasetKind::MapInsurance => "map_insurance",
            DatasetKind::TopTransaction => "top_transaction",
            DatasetKind::TopUser => "top_user",
            DatasetKind::TopInsurance => "top_insurance",
        }
    }

    /// Column names in output order. Downstream readers depend on these
    /// being stable across runs.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::AggregatedTransaction => {
                &["year", "quarter", "category", "type", "count", "amount"]
            }
            DatasetKind::AggregatedUser => &[
                "year",
                "quarter",
                "brand",
                "count",
                "percentage",
                "registered_users",
                "app_opens",
            ],
            DatasetKind::AggregatedInsurance => &["year", "quarter", "name", "count", "amount"],
            DatasetKind::MapTransaction | DatasetKind::MapInsurance => {
                &["year", "quarter", "state", "count", "amount"]
            }
            DatasetKind::MapUser => &["year", "quarter", "state", "registered_users", "app_opens"],
            DatasetKind::TopTransaction | DatasetKind::TopInsurance => {
                &["year", "quarter", "level", "entity", "count", "amount"]
            }
            DatasetKind::TopUser => &["year", "quarter", "level", "entity", "registered_users"],
        }
    }

    pub fn for_shape(section: Section, category: Category) -> Self {
        match (section, category) {
            (Section::Aggregated, Category::Transaction) => DatasetKind::AggregatedTransaction,
            (Section::Aggregated, Category::User) => DatasetKind::AggregatedUser,
            (Section::Aggregated, Category::Insurance) => DatasetKind::AggregatedInsurance,
            (Section::Map, Category::Transaction) => DatasetKind::MapTransaction,
            (Section::Map, Category::User) => DatasetKind::MapUser,
            (Section::Map, Category::Insurance) => DatasetKind::MapInsurance,
            (Section::Top, Category::Transaction) => DatasetKind::TopTransaction,
            (Section::Top, Category::User) => DatasetKind::TopUser,
            (Section::Top, Category::Insurance) => DatasetKind::TopInsurance,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.id())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
