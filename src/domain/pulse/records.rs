// ============================================================
// FLAT RECORDS
// ============================================================
// One row type per dataset. Field order is the column order.

use serde::Serialize;

use super::{DatasetKind, Level};

/// Floats always render positionally, never in exponent form
mod plain_decimal {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_str(&format(*v)),
            None => serializer.serialize_none(),
        }
    }

    /// Shortest round-trip digits; whole numbers keep a trailing `.0`
    pub fn format(value: f64) -> String {
        let text = value.to_string();
        if value.is_finite() && !text.contains('.') {
            format!("{}.0", text)
        } else {
            text
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedTransactionRow {
    pub year: i32,
    pub quarter: u32,
    /// Payment category name, e.g. "Recharge & bill payments"
    pub category: Option<String>,
    /// Type of the first payment instrument
    #[serde(rename = "type")]
    pub instrument_type: Option<String>,
    pub count: Option<i64>,
    #[serde(serialize_with = "plain_decimal::serialize")]
    pub amount: Option<f64>,
}

/// Device brand row. `registered_users` and `app_opens` are the document
/// totals repeated on every brand row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedUserRow {
    pub year: i32,
    pub quarter: u32,
    pub brand: Option<String>,
    pub count: Option<i64>,
    #[serde(serialize_with = "plain_decimal::serialize")]
    pub percentage: Option<f64>,
    pub registered_users: Option<i64>,
    pub app_opens: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedInsuranceRow {
    pub year: i32,
    pub quarter: u32,
    pub name: Option<String>,
    pub count: Option<i64>,
    #[serde(serialize_with = "plain_decimal::serialize")]
    pub amount: Option<f64>,
}

/// Shared by map/transaction and map/insurance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMetricRow {
    pub year: i32,
    pub quarter: u32,
    pub state: Option<String>,
    pub count: Option<i64>,
    #[serde(serialize_with = "plain_decimal::serialize")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapUserRow {
    pub year: i32,
    pub quarter: u32,
    pub state: Option<String>,
    pub registered_users: Option<i64>,
    pub app_opens: Option<i64>,
}

/// Shared by top/transaction and top/insurance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopMetricRow {
    pub year: i32,
    pub quarter: u32,
    pub level: Level,
    pub entity: Option<String>,
    pub count: Option<i64>,
    #[serde(serialize_with = "plain_decimal::serialize")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopUserRow {
    pub year: i32,
    pub quarter: u32,
    pub level: Level,
    pub entity: Option<String>,
    pub registered_users: Option<i64>,
}

/// A single extracted row tagged with the dataset it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum FlatRecord {
    AggregatedTransaction(AggregatedTransactionRow),
    AggregatedUser(AggregatedUserRow),
    AggregatedInsurance(AggregatedInsuranceRow),
    MapTransaction(MapMetricRow),
    MapUser(MapUserRow),
    MapInsurance(MapMetricRow),
    TopTransaction(TopMetricRow),
    TopUser(TopUserRow),
    TopInsurance(TopMetricRow),
}

impl FlatRecord {
    pub fn dataset(&self) -> DatasetKind {
        match self {
            FlatRecord::AggregatedTransaction(_) => DatasetKind::AggregatedTransaction,
            FlatRecord::AggregatedUser(_) => DatasetKind::AggregatedUser,
            FlatRecord::AggregatedInsurance(_) => DatasetKind::AggregatedInsurance,
            FlatRecord::MapTransaction(_) => DatasetKind::MapTransaction,
            FlatRecord::MapUser(_) => DatasetKind::MapUser,
            FlatRecord::MapInsurance(_) => DatasetKind::MapInsurance,
            FlatRecord::TopTransaction(_) => DatasetKind::TopTransaction,
            FlatRecord::TopUser(_) => DatasetKind::TopUser,
            FlatRecord::TopInsurance(_) => DatasetKind::TopInsurance,
        }
    }
}
