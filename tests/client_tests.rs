// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{BASE, MemoryBackend, client};
use serde_json::json;
use shipdeck::client::{Client, Method};
use shipdeck::error::ClientError;
use shipdeck::form::Draft;
use shipdeck::models::{Account, CalendarEvent, Goal, LedgerEntry};

#[test]
fn list_null_or_empty_body_is_empty() {
    let c = client(
        MemoryBackend::new()
            .with_raw("api/accounts", "null")
            .with_raw("api/goals", "")
            .with_raw("api/finance-calendar", "  \n"),
    );
    assert!(c.list::<Account>().unwrap().is_empty());
    assert!(c.list::<Goal>().unwrap().is_empty());
    assert!(c.list::<CalendarEvent>().unwrap().is_empty());
}

#[test]
fn list_decodes_ledger_entries() {
    let c = client(MemoryBackend::new().with(
        "api/ledger",
        vec![json!({
            "id": 7,
            "timestamp": "2025-03-01 10:00:00",
            "trade_type": "sell",
            "asset": "AAPL",
            "quantity": 2,
            "price_per_unit": 180.5,
            "total_value": 361.0,
            "is_profit": true
        })],
    ));
    let rows = c.list::<LedgerEntry>().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].asset, "AAPL");
    assert_eq!(format!("{:.2}", rows[0].total_value.unwrap()), "361.00");
    assert!(rows[0].is_profit);
}

#[test]
fn delete_key_is_percent_encoded() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![
            json!({ "name": "Joint Account", "type": "checking" }),
            json!({ "name": "Brokerage/IRA", "type": "investment" }),
        ],
    ));
    c.remove::<Account>("Joint Account").unwrap();
    assert_eq!(
        c.transport().last_url().unwrap(),
        format!("{}/api/accounts/Joint%20Account", BASE)
    );
    c.remove::<Account>("Brokerage/IRA").unwrap();
    assert_eq!(
        c.transport().last_url().unwrap(),
        format!("{}/api/accounts/Brokerage%2FIRA", BASE)
    );
    assert!(c.transport().items("api/accounts").is_empty());
}

#[test]
fn create_sends_numbers_for_numeric_fields_only() {
    let c = client(MemoryBackend::new().with("api/goals", vec![]));
    let draft = Draft::from_pairs([
        ("name", "Car"),
        ("target_amount", "5000"),
        ("current_amount", ""),
        ("deadline", "2026-06-01"),
        ("priority", "low"),
    ]);
    c.create::<Goal>(&draft).unwrap();
    let sent = c.transport().bodies.borrow()[0].clone();
    assert_eq!(sent["target_amount"], json!(5000));
    assert_eq!(sent["current_amount"], json!(""));
    assert_eq!(sent["deadline"], json!("2026-06-01"));
}

#[test]
fn non_2xx_becomes_status_error() {
    let c = client(MemoryBackend::new().with("api/accounts", vec![]));
    c.transport().fail_next(500);
    let err = c.create::<Account>(&Draft::default()).unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(matches!(err, ClientError::Status { method: "POST", .. }));
    // The backend's `{"error": ...}` reaches the message.
    assert!(err.to_string().ends_with("returned HTTP 500: boom"));
    assert_eq!(err.backend_message().as_deref(), Some("boom"));
}

#[test]
fn delete_of_missing_key_is_an_error() {
    let c = client(MemoryBackend::new().with("api/goals", vec![]));
    let err = c.remove::<Goal>("Nope").unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[test]
fn malformed_body_is_decode_error() {
    let c = client(MemoryBackend::new().with_raw("api/accounts", "{not json"));
    assert!(matches!(
        c.list::<Account>().unwrap_err(),
        ClientError::Decode { .. }
    ));
}

#[test]
fn base_url_must_be_http() {
    assert!(matches!(
        Client::with_transport("localhost:5000", MemoryBackend::new()),
        Err(ClientError::InvalidBaseUrl(_))
    ));
    assert!(Client::with_transport("https://", MemoryBackend::new()).is_err());
    assert!(Client::with_transport("http://a b", MemoryBackend::new()).is_err());
    assert!(Client::with_transport("ftp://nas.local", MemoryBackend::new()).is_err());
    assert!(Client::with_transport("http://nas.local/api x", MemoryBackend::new()).is_err());
    let c = Client::with_transport("http://localhost:5000/", MemoryBackend::new()).unwrap();
    assert_eq!(c.url("api/goals"), "http://localhost:5000/api/goals");
}

#[test]
fn export_reports_filename() {
    let c = client(MemoryBackend::new().with_raw(
        "api/ledger/export",
        r#"{"status":"success","filename":"ledger_2025.csv"}"#,
    ));
    let res = c.export_ledger().unwrap();
    assert!(res.succeeded());
    assert_eq!(res.filename.as_deref(), Some("ledger_2025.csv"));
    assert_eq!(c.transport().count(Method::Get), 1);
}

#[test]
fn failed_export_carries_backend_error() {
    let c = client(MemoryBackend::new().with_raw("api/ledger/export", "{}"));
    c.transport().fail_next(500);
    let res = c.export_ledger().unwrap();
    assert!(!res.succeeded());
    assert_eq!(res.error.as_deref(), Some("boom"));
}

#[test]
fn ledger_and_calendar_lists_tolerate_blank_amounts() {
    let c = client(
        MemoryBackend::new()
            .with(
                "api/finance-calendar",
                vec![
                    json!({ "date": "2025-08-01", "type": "bill", "name": "Rent", "amount": "" }),
                    json!({ "date": "2025-08-02", "type": "bill", "name": "Power", "amount": null }),
                    json!({ "date": "2025-08-03", "type": "income", "name": "Pay", "amount": 60 }),
                ],
            )
            .with(
                "api/ledger",
                vec![json!({
                    "id": 1, "timestamp": "t", "trade_type": "buy", "asset": "BTC",
                    "quantity": "0.25", "price_per_unit": "", "is_profit": false
                })],
            ),
    );
    let events = c.list::<CalendarEvent>().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].amount, None);
    assert_eq!(events[1].amount, None);
    assert_eq!(events[2].amount, Some(rust_decimal::Decimal::from(60)));

    let ledger = c.list::<LedgerEntry>().unwrap();
    assert_eq!(ledger[0].quantity, Some(rust_decimal::Decimal::new(25, 2)));
    assert_eq!(ledger[0].price_per_unit, None);
    assert_eq!(ledger[0].total_value, None);
}

#[test]
fn upload_counts_detected_bills() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.csv");
    std::fs::write(&path, "date,desc,amount\n2025-01-01,Power,-120\n").unwrap();
    let c = client(MemoryBackend::new());
    let res = c.upload_statement(&path).unwrap();
    assert_eq!(res.bill_count(), 2);
}

#[test]
fn shipmate_respond_posts_input() {
    let c = client(MemoryBackend::new());
    let reply = c.shipmate_respond("status report").unwrap();
    assert_eq!(reply.response.as_deref(), Some("Aye: status report"));
    assert_eq!(
        c.transport().last_url().unwrap(),
        format!("{}/shipmate/respond", BASE)
    );
}

#[test]
fn recurring_bills_null_is_empty() {
    let c = client(MemoryBackend::new().with_raw("api/finance/recurring-bills", "null"));
    assert!(c.recurring_bills().unwrap().is_empty());
}
