use serde_json::Value;

use super::RecordExtractor;
use crate::domain::pulse::{FlatRecord, Level, Period, TopMetricRow, TopUserRow};
use crate::shared::JsonFields;

impl RecordExtractor {
    pub(super) fn top_transaction(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        self.ranked_metric_rows(period, data)
            .into_iter()
            .map(FlatRecord::TopTransaction)
            .collect()
    }

    pub(super) fn top_insurance(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        self.ranked_metric_rows(period, data)
            .into_iter()
            .map(FlatRecord::TopInsurance)
            .collect()
    }

    /// Registered users per ranked entity; there is no app-open figure here
    pub(super) fn top_user(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        Level::ALL
            .iter()
            .flat_map(|level| {
                JsonFields::list(data, level.list_key())
                    .iter()
                    .map(move |entry| {
                        FlatRecord::TopUser(TopUserRow {
                            year: period.year,
                            quarter: period.quarter,
                            level: *level,
                            entity: JsonFields::string(entry, "name"),
                            registered_users: JsonFields::integer(entry, "registeredUsers"),
                        })
                    })
            })
            .collect()
    }

    /// Entries with a missing or null `metric` are kept with empty figures
    fn ranked_metric_rows(&self, period: Period, data: &Value) -> Vec<TopMetricRow> {
        Level::ALL
            .iter()
            .flat_map(|level| {
                JsonFields::list(data, level.list_key())
                    .iter()
                    .map(move |entry| {
                        let metric = entry.get("metric").unwrap_or(&Value::Null);
                        TopMetricRow {
                            year: period.year,
                            quarter: period.quarter,
                            level: *level,
                            entity: JsonFields::string(entry, "entityName"),
                            count: JsonFields::integer(metric, "count"),
                            amount: JsonFields::float(metric, "amount"),
                        }
                    })
            })
            .collect()
    }
}
