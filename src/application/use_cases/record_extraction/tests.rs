use std::path::PathBuf;

use serde_json::json;

use super::*;
use crate::domain::pulse::{
    AggregatedTransactionRow, DatasetKind, Level, MapMetricRow, Period, TopMetricRow,
};

fn file(section: Option<Section>, category: Option<Category>) -> SourceFile {
    SourceFile {
        path: PathBuf::from("data/x/2023/1.json"),
        period: Period {
            year: 2023,
            quarter: 1,
        },
        section,
        category,
    }
}

fn extract(section: Section, category: Category, document: Value) -> Vec<FlatRecord> {
    match RecordExtractor::new().extract(&file(Some(section), Some(category)), &document) {
        Extraction::Records(records) => records,
        other => panic!("expected records, got {:?}", other),
    }
}

#[test]
fn test_end_to_end_example_row() {
    let records = extract(
        Section::Aggregated,
        Category::Transaction,
        json!({"data": {"transactionData": [
            {"name": "Recharge", "paymentInstruments": [{"type": "UPI", "count": 100, "amount": 5000.0}]}
        ]}}),
    );

    assert_eq!(
        records,
        vec![FlatRecord::AggregatedTransaction(AggregatedTransactionRow {
            year: 2023,
            quarter: 1,
            category: Some("Recharge".to_string()),
            instrument_type: Some("UPI".to_string()),
            count: Some(100),
            amount: Some(5000.0),
        })]
    );
}

#[test]
fn test_aggregated_transaction_uses_first_instrument_and_skips_empty() {
    let records = extract(
        Section::Aggregated,
        Category::Transaction,
        json!({"data": {"transactionData": [
            {"name": "Peer-to-peer payments", "paymentInstruments": [
                {"type": "TOTAL", "count": 10, "amount": 1.5},
                {"type": "OTHER", "count": 99, "amount": 9.9}
            ]},
            {"name": "Others", "paymentInstruments": []},
            {"name": "Financial Services", "paymentInstruments": null},
            {"name": "Merchant payments"}
        ]}}),
    );

    assert_eq!(records.len(), 1);
    match &records[0] {
        FlatRecord::AggregatedTransaction(row) => {
            assert_eq!(row.category.as_deref(), Some("Peer-to-peer payments"));
            assert_eq!(row.instrument_type.as_deref(), Some("TOTAL"));
            assert_eq!(row.count, Some(10));
        }
        other => panic!("unexpected record {:?}", other),
    }
}

#[test]
fn test_aggregated_insurance_first_instrument() {
    let records = extract(
        Section::Aggregated,
        Category::Insurance,
        json!({"data": {"transactionData": [
            {"name": "Insurance", "paymentInstruments": [{"type": "TOTAL", "count": 3, "amount": 250.75}]},
            {"name": "Empty", "paymentInstruments": []}
        ]}}),
    );

    assert_eq!(records.len(), 1);
    match &records[0] {
        FlatRecord::AggregatedInsurance(row) => {
            assert_eq!(row.name.as_deref(), Some("Insurance"));
            assert_eq!(row.count, Some(3));
            assert_eq!(row.amount, Some(250.75));
        }
        other => panic!("unexpected record {:?}", other),
    }
}

#[test]
fn test_aggregated_user_broadcasts_totals_to_every_brand() {
    let records = extract(
        Section::Aggregated,
        Category::User,
        json!({"data": {
            "aggregated": {"registeredUsers": 1000, "appOpens": 5000},
            "usersByDevice": [
                {"brand": "Xiaomi", "count": 400, "percentage": 0.4},
                {"brand": "Samsung", "count": 350, "percentage": 0.35},
                {"brand": "Vivo", "count": 250, "percentage": 0.25}
            ]
        }}),
    );

    assert_eq!(records.len(), 3);
    for record in &records {
        match record {
            FlatRecord::AggregatedUser(row) => {
                assert_eq!(row.registered_users, Some(1000));
                assert_eq!(row.app_opens, Some(5000));
                assert!(row.brand.is_some());
            }
            other => panic!("unexpected record {:?}", other),
        }
    }
}

#[test]
fn test_aggregated_user_without_devices_emits_single_totals_row() {
    for devices in [json!(null), json!([])] {
        let records = extract(
            Section::Aggregated,
            Category::User,
            json!({"data": {
                "aggregated": {"registeredUsers": 77, "appOpens": 0},
                "usersByDevice": devices
            }}),
        );

        assert_eq!(records.len(), 1);
        match &records[0] {
            FlatRecord::AggregatedUser(row) => {
                assert_eq!(row.brand, None);
                assert_eq!(row.count, None);
                assert_eq!(row.percentage, None);
                assert_eq!(row.registered_users, Some(77));
                assert_eq!(row.app_opens, Some(0));
            }
            other => panic!("unexpected record {:?}", other),
        }
    }
}

#[test]
fn test_aggregated_user_missing_totals_become_null() {
    let records = extract(
        Section::Aggregated,
        Category::User,
        json!({"data": {"aggregated": null, "usersByDevice": [{"brand": "Apple"}]}}),
    );

    match &records[0] {
        FlatRecord::AggregatedUser(row) => {
            assert_eq!(row.brand.as_deref(), Some("Apple"));
            assert_eq!(row.count, None);
            assert_eq!(row.registered_users, None);
            assert_eq!(row.app_opens, None);
        }
        other => panic!("unexpected record {:?}", other),
    }
}

#[test]
fn test_map_transaction_keeps_entries_with_empty_metric() {
    let records = extract(
        Section::Map,
        Category::Transaction,
        json!({"data": {"hoverDataList": [
            {"name": "goa", "metric": [{"type": "TOTAL", "count": 12, "amount": 34.5}]},
            {"name": "ladakh", "metric": []},
            {"name": "lakshadweep"}
        ]}}),
    );

    assert_eq!(
        records,
        vec![
            FlatRecord::MapTransaction(MapMetricRow {
                year: 2023,
                quarter: 1,
                state: Some("goa".to_string()),
                count: Some(12),
                amount: Some(34.5),
            }),
            FlatRecord::MapTransaction(MapMetricRow {
                year: 2023,
                quarter: 1,
                state: Some("ladakh".to_string()),
                count: None,
                amount: None,
            }),
            FlatRecord::MapTransaction(MapMetricRow {
                year: 2023,
                quarter: 1,
                state: Some("lakshadweep".to_string()),
                count: None,
                amount: None,
            }),
        ]
    );
}

#[test]
fn test_map_insurance_routes_to_insurance_dataset() {
    let records = extract(
        Section::Map,
        Category::Insurance,
        json!({"data": {"hoverDataList": [{"name": "kerala", "metric": [{"count": 5, "amount": 100}]}]}}),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].dataset(), DatasetKind::MapInsurance);
}

#[test]
fn test_map_user_one_row_per_state_in_document_order() {
    let records = extract(
        Section::Map,
        Category::User,
        json!({"data": {"hoverData": {
            "west bengal": {"registeredUsers": 10, "appOpens": 20},
            "andhra pradesh": {"registeredUsers": 30},
            "bihar": null
        }}}),
    );

    let states: Vec<_> = records
        .iter()
        .map(|record| match record {
            FlatRecord::MapUser(row) => (row.state.clone(), row.registered_users, row.app_opens),
            other => panic!("unexpected record {:?}", other),
        })
        .collect();

    assert_eq!(
        states,
        vec![
            (Some("west bengal".to_string()), Some(10), Some(20)),
            (Some("andhra pradesh".to_string()), Some(30), None),
            (Some("bihar".to_string()), None, None),
        ]
    );
}

#[test]
fn test_top_rows_sum_over_levels_with_level_tags() {
    let records = extract(
        Section::Top,
        Category::Transaction,
        json!({"data": {
            "states": [
                {"entityName": "karnataka", "metric": {"type": "TOTAL", "count": 1, "amount": 1.0}},
                {"entityName": "maharashtra", "metric": {"type": "TOTAL", "count": 2, "amount": 2.0}}
            ],
            "districts": [
                {"entityName": "bengaluru urban", "metric": {"count": 3, "amount": 3.0}}
            ],
            "pincodes": [
                {"entityName": "560001", "metric": {"count": 4, "amount": 4.0}},
                {"entityName": "560002", "metric": {"count": 5, "amount": 5.0}},
                {"entityName": "560003", "metric": {"count": 6, "amount": 6.0}}
            ]
        }}),
    );

    assert_eq!(records.len(), 2 + 1 + 3);
    let levels: Vec<Level> = records
        .iter()
        .map(|record| match record {
            FlatRecord::TopTransaction(row) => row.level,
            other => panic!("unexpected record {:?}", other),
        })
        .collect();
    assert_eq!(
        levels,
        vec![
            Level::State,
            Level::State,
            Level::District,
            Level::Pincode,
            Level::Pincode,
            Level::Pincode
        ]
    );
}

#[test]
fn test_top_null_level_lists_are_skipped() {
    let records = extract(
        Section::Top,
        Category::User,
        json!({"data": {
            "states": null,
            "districts": [{"name": "pune", "registeredUsers": 900}],
            "pincodes": []
        }}),
    );

    assert_eq!(records.len(), 1);
    match &records[0] {
        FlatRecord::TopUser(row) => {
            assert_eq!(row.level, Level::District);
            assert_eq!(row.entity.as_deref(), Some("pune"));
            assert_eq!(row.registered_users, Some(900));
        }
        other => panic!("unexpected record {:?}", other),
    }
}

// Entries present with a null metric are kept with empty figures, as map
// entries are, rather than dropped as aggregated entries are.
#[test]
fn test_top_entry_with_null_metric_is_included() {
    let records = extract(
        Section::Top,
        Category::Insurance,
        json!({"data": {"states": [{"entityName": "sikkim", "metric": null}, {"entityName": "goa"}]}}),
    );

    assert_eq!(
        records,
        vec![
            FlatRecord::TopInsurance(TopMetricRow {
                year: 2023,
                quarter: 1,
                level: Level::State,
                entity: Some("sikkim".to_string()),
                count: None,
                amount: None,
            }),
            FlatRecord::TopInsurance(TopMetricRow {
                year: 2023,
                quarter: 1,
                level: Level::State,
                entity: Some("goa".to_string()),
                count: None,
                amount: None,
            }),
        ]
    );
}

#[test]
fn test_missing_or_null_data_yields_empty_document_for_every_shape() {
    let extractor = RecordExtractor::new();
    let documents = [
        json!({}),
        json!({"data": null}),
        json!({"success": true, "code": "SUCCESS"}),
        json!({"data": "not an object"}),
        json!([1, 2, 3]),
        json!(null),
    ];

    for section in Section::PRIORITY {
        for category in Category::PRIORITY {
            for document in &documents {
                let outcome = extractor.extract(&file(Some(section), Some(category)), document);
                assert_eq!(outcome, Extraction::EmptyDocument);
                assert!(outcome.records().is_empty());
            }
        }
    }
}

#[test]
fn test_unknown_section_or_category_is_unrecognized() {
    let extractor = RecordExtractor::new();
    let document = json!({"data": {"transactionData": []}});

    assert_eq!(
        extractor.extract(&file(None, Some(Category::Transaction)), &document),
        Extraction::UnrecognizedShape
    );
    assert_eq!(
        extractor.extract(&file(Some(Section::Map), None), &document),
        Extraction::UnrecognizedShape
    );
}

#[test]
fn test_period_comes_from_path_not_content() {
    let records = extract(
        Section::Map,
        Category::Transaction,
        json!({"data": {
            "year": 1999,
            "quarter": 4,
            "hoverDataList": [{"name": "goa", "year": 1999, "quarter": 4, "metric": []}]
        }}),
    );

    assert_eq!(records.len(), 1);
    for record in &records {
        match record {
            FlatRecord::MapTransaction(row) => assert_eq!((row.year, row.quarter), (2023, 1)),
            other => panic!("unexpected record {:?}", other),
        }
    }
}

#[test]
fn test_every_shape_routes_to_its_own_dataset() {
    let extractor = RecordExtractor::new();
    let document = json!({"data": {
        "transactionData": [{"name": "n", "paymentInstruments": [{"type": "t", "count": 1, "amount": 1}]}],
        "aggregated": {"registeredUsers": 1, "appOpens": 1},
        "hoverDataList": [{"name": "s", "metric": [{"count": 1, "amount": 1}]}],
        "hoverData": {"s": {"registeredUsers": 1, "appOpens": 1}},
        "states": [{"entityName": "e", "name": "e", "metric": {"count": 1, "amount": 1}, "registeredUsers": 1}]
    }});

    for section in Section::PRIORITY {
        for category in Category::PRIORITY {
            let outcome = extractor.extract(&file(Some(section), Some(category)), &document);
            let records = outcome.records();
            assert!(!records.is_empty(), "{}/{}", section, category);
            for record in records {
                assert_eq!(record.dataset(), DatasetKind::for_shape(section, category));
            }
        }
    }
}
