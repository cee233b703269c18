use serde_json::Value;

use super::RecordExtractor;
use crate::domain::pulse::{FlatRecord, MapMetricRow, MapUserRow, Period};
use crate::shared::JsonFields;

impl RecordExtractor {
    pub(super) fn map_transaction(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        self.hover_metric_rows(period, data)
            .into_iter()
            .map(FlatRecord::MapTransaction)
            .collect()
    }

    pub(super) fn map_insurance(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        self.hover_metric_rows(period, data)
            .into_iter()
            .map(FlatRecord::MapInsurance)
            .collect()
    }

    /// One row per state in the document's `hoverData` object
    pub(super) fn map_user(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        let Some(hover) = JsonFields::object(data, "hoverData") else {
            return Vec::new();
        };

        hover
            .iter()
            .map(|(state, figures)| {
                FlatRecord::MapUser(MapUserRow {
                    year: period.year,
                    quarter: period.quarter,
                    state: Some(state.clone()),
                    registered_users: JsonFields::integer(figures, "registeredUsers"),
                    app_opens: JsonFields::integer(figures, "appOpens"),
                })
            })
            .collect()
    }

    /// One row per `hoverDataList` entry from its first metric.
    /// Entries keep their row when the metric list is empty.
    fn hover_metric_rows(&self, period: Period, data: &Value) -> Vec<MapMetricRow> {
        JsonFields::list(data, "hoverDataList")
            .iter()
            .map(|entry| {
                let metric = JsonFields::list(entry, "metric")
                    .first()
                    .unwrap_or(&Value::Null);
                MapMetricRow {
                    year: period.year,
                    quarter: period.quarter,
                    state: JsonFields::string(entry, "name"),
                    count: JsonFields::integer(metric, "count"),
                    amount: JsonFields::float(metric, "amount"),
                }
            })
            .collect()
    }
}
