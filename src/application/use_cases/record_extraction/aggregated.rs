use serde_json::Value;

use super::RecordExtractor;
use crate::domain::pulse::{
    AggregatedInsuranceRow, AggregatedTransactionRow, AggregatedUserRow, FlatRecord, Period,
};
use crate::shared::JsonFields;

impl RecordExtractor {
    /// One row per `transactionData` entry, from its first payment
    /// instrument. Entries without instruments produce no row.
    pub(super) fn aggregated_transaction(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        JsonFields::list(data, "transactionData")
            .iter()
            .filter_map(|entry| {
                let instrument = JsonFields::list(entry, "paymentInstruments").first()?;
                Some(FlatRecord::AggregatedTransaction(AggregatedTransactionRow {
                    year: period.year,
                    quarter: period.quarter,
                    category: JsonFields::string(entry, "name"),
                    instrument_type: JsonFields::string(instrument, "type"),
                    count: JsonFields::integer(instrument, "count"),
                    amount: JsonFields::float(instrument, "amount"),
                }))
            })
            .collect()
    }

    /// One row per device brand, each repeating the document totals. With no
    /// device breakdown a single totals-only row is emitted.
    pub(super) fn aggregated_user(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        let totals = data.get("aggregated").unwrap_or(&Value::Null);
        let registered_users = JsonFields::integer(totals, "registeredUsers");
        let app_opens = JsonFields::integer(totals, "appOpens");

        let devices = JsonFields::list(data, "usersByDevice");
        if devices.is_empty() {
            return vec![FlatRecord::AggregatedUser(AggregatedUserRow {
                year: period.year,
                quarter: period.quarter,
                brand: None,
                count: None,
                percentage: None,
                registered_users,
                app_opens,
            })];
        }

        devices
            .iter()
            .map(|device| {
                FlatRecord::AggregatedUser(AggregatedUserRow {
                    year: period.year,
                    quarter: period.quarter,
                    brand: JsonFields::string(device, "brand"),
                    count: JsonFields::integer(device, "count"),
                    percentage: JsonFields::float(device, "percentage"),
                    registered_users,
                    app_opens,
                })
            })
            .collect()
    }

    /// Same first-instrument rule as transactions, without the type column
    pub(super) fn aggregated_insurance(&self, period: Period, data: &Value) -> Vec<FlatRecord> {
        JsonFields::list(data, "transactionData")
            .iter()
            .filter_map(|entry| {
                let instrument = JsonFields::list(entry, "paymentInstruments").first()?;
                Some(FlatRecord::AggregatedInsurance(AggregatedInsuranceRow {
                    year: period.year,
                    quarter: period.quarter,
                    name: JsonFields::string(entry, "name"),
                    count: JsonFields::integer(instrument, "count"),
                    amount: JsonFields::float(instrument, "amount"),
                }))
            })
            .collect()
    }
}
