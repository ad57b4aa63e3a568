// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use chrono::NaiveDate;
use common::{MemoryBackend, client};
use rust_decimal::Decimal;
use serde_json::json;
use shipdeck::client::Method;
use shipdeck::models::{Account, Goal};
use shipdeck::page::{ListPage, LoadOutcome, MutationOutcome};
use shipdeck::store::LoadState;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

#[test]
fn load_moves_empty_to_loaded() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![json!({ "name": "Checking", "type": "checking", "balance": 1200 })],
    ));
    let mut page = ListPage::<Account, _>::activate(&c, day());
    assert_eq!(page.state(), &LoadState::Empty);
    assert_eq!(page.load().unwrap(), LoadOutcome::Loaded);
    assert_eq!(page.state(), &LoadState::Loaded);
    assert_eq!(page.items().len(), 1);
    assert!(page.store().find("Checking").is_some());
}

#[test]
fn goal_create_then_list_shows_progress() {
    let c = client(MemoryBackend::new().with("api/goals", vec![]));
    let mut page = ListPage::<Goal, _>::activate(&c, day());
    page.load().unwrap();

    let form = page.form_mut();
    form.update("name", "Emergency Fund");
    form.update("target_amount", "1000");
    form.update("current_amount", "250");
    form.update("deadline", "2025-01-01");
    form.update("priority", "high");

    assert!(matches!(
        page.submit_create().unwrap(),
        MutationOutcome::Reconciled
    ));
    let goal = page.store().find("Emergency Fund").expect("goal listed after create");
    assert_eq!(goal.progress(), Decimal::from(25));
    // Draft goes back to the goal defaults, not to a blank map.
    assert_eq!(page.draft().get("name"), Some(""));
    assert_eq!(page.draft().get("priority"), Some("medium"));
}

#[test]
fn delete_then_list_drops_key() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![
            json!({ "name": "Joint Account", "type": "savings" }),
            json!({ "name": "Visa", "type": "credit" }),
        ],
    ));
    let mut page = ListPage::<Account, _>::activate(&c, day());
    page.load().unwrap();
    assert!(matches!(
        page.submit_delete("Joint Account").unwrap(),
        MutationOutcome::Reconciled
    ));
    assert!(page.store().find("Joint Account").is_none());
    assert_eq!(page.items().len(), 1);
}

#[test]
fn failed_create_keeps_draft_and_skips_reconcile() {
    let c = client(MemoryBackend::new().with("api/goals", vec![]));
    let mut page = ListPage::<Goal, _>::activate(&c, day());
    page.load().unwrap();
    page.form_mut().update("name", "Boat");
    let gets_before = c.transport().count(Method::Get);

    c.transport().fail_next(422);
    let err = page.submit_create().unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(page.draft().get("name"), Some("Boat"));
    assert_eq!(c.transport().count(Method::Get), gets_before);
    assert_eq!(page.state(), &LoadState::Loaded);
}

#[test]
fn failed_delete_is_surfaced_without_reconcile() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![json!({ "name": "Visa", "type": "credit" })],
    ));
    let mut page = ListPage::<Account, _>::activate(&c, day());
    page.load().unwrap();
    let gets_before = c.transport().count(Method::Get);

    let err = page.submit_delete("Mastercard").unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(c.transport().count(Method::Get), gets_before);
    assert_eq!(page.items().len(), 1);
}

#[test]
fn failed_load_keeps_last_good_items() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![json!({ "name": "Visa", "type": "credit" })],
    ));
    let mut page = ListPage::<Account, _>::activate(&c, day());
    page.load().unwrap();

    c.transport().unreachable_next();
    assert!(page.load().is_err());
    assert!(matches!(page.state(), LoadState::Failed(_)));
    assert_eq!(page.items().len(), 1);
}

#[test]
fn reconcile_failure_is_reported_after_successful_create() {
    let c = client(MemoryBackend::new().with("api/goals", vec![]));
    let mut page = ListPage::<Goal, _>::activate(&c, day());
    page.load().unwrap();
    page.form_mut().update("name", "Trip");

    // POST goes through, the reconciling GET is refused.
    c.transport().unreachable_in(1);
    match page.submit_create().unwrap() {
        MutationOutcome::Unreconciled(e) => assert!(e.status().is_none()),
        other => panic!("expected Unreconciled, got {:?}", other),
    }
    assert_eq!(c.transport().items("api/goals").len(), 1);
    assert!(matches!(page.state(), LoadState::Failed(_)));
    assert!(page.items().is_empty());
    assert_eq!(page.draft().get("name"), Some(""));
}

#[test]
fn response_after_deactivation_is_dropped() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![json!({ "name": "Visa", "type": "credit" })],
    ));
    let mut page = ListPage::<Account, _>::activate(&c, day());
    c.transport().cancel_during_next(page.cancel_token());

    assert_eq!(page.load().unwrap(), LoadOutcome::Cancelled);
    assert!(page.items().is_empty());
    assert_eq!(page.state(), &LoadState::Empty);
    assert!(!page.is_active());
    // Nothing further goes out once the scope is cancelled.
    let sent = c.transport().log.borrow().len();
    assert_eq!(page.load().unwrap(), LoadOutcome::Cancelled);
    assert_eq!(c.transport().log.borrow().len(), sent);
}

#[test]
fn create_in_flight_during_deactivation_leaves_page_untouched() {
    let c = client(MemoryBackend::new().with("api/goals", vec![]));
    let mut page = ListPage::<Goal, _>::activate(&c, day());
    page.load().unwrap();
    page.form_mut().update("name", "House");
    c.transport().cancel_during_next(page.cancel_token());

    assert!(matches!(
        page.submit_create().unwrap(),
        MutationOutcome::Cancelled
    ));
    // The server got it; the page never reconciled or reset.
    assert_eq!(c.transport().items("api/goals").len(), 1);
    assert_eq!(page.draft().get("name"), Some("House"));
    assert!(page.items().is_empty());
}

#[test]
fn deactivate_discards_copies() {
    let c = client(MemoryBackend::new().with(
        "api/accounts",
        vec![json!({ "name": "Visa", "type": "credit" })],
    ));
    let mut page = ListPage::<Account, _>::activate(&c, day());
    page.load().unwrap();
    page.form_mut().update("name", "Draft");
    page.deactivate();
    assert_eq!(page.state(), &LoadState::Empty);
    assert!(page.items().is_empty());
    assert_eq!(page.draft().get("name"), Some(""));
}
