// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Account, CalendarEvent, Goal, LedgerEntry, percent_of};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Sum that saturates at `Decimal::MAX`/`MIN` rather than overflowing.
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn total_balance(accounts: &[Account]) -> Decimal {
    saturating_sum(accounts.iter().filter_map(|a| a.balance))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub account: String,
    pub missing: Decimal,
}

/// Accounts whose balance sits below their required buffer.
pub fn buffer_shortfalls(accounts: &[Account]) -> Vec<Shortfall> {
    accounts
        .iter()
        .filter_map(|a| {
            let buffer = a.buffer_required?;
            let balance = a.balance.unwrap_or_default();
            (balance < buffer).then(|| Shortfall {
                account: a.name.clone(),
                missing: buffer.saturating_sub(balance),
            })
        })
        .collect()
}

/// Saved across all goals as a share of all targets, clamped to 0..=100.
pub fn funded_pct(goals: &[Goal]) -> Decimal {
    let target = saturating_sum(goals.iter().filter_map(|g| g.target_amount));
    let current = saturating_sum(goals.iter().filter_map(|g| g.current_amount));
    percent_of(current, target)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerTotals {
    pub entries: usize,
    pub profitable: usize,
    pub total_value: Decimal,
}

pub fn ledger_totals(entries: &[LedgerEntry]) -> LedgerTotals {
    entries.iter().fold(LedgerTotals::default(), |mut acc, e| {
        acc.entries += 1;
        if e.is_profit {
            acc.profitable += 1;
        }
        acc.total_value = acc.total_value.saturating_add(e.total_value.unwrap_or_default());
        acc
    })
}

/// Events whose date string equals `day`.
pub fn events_on(events: &[CalendarEvent], day: NaiveDate) -> Vec<&CalendarEvent> {
    events.iter().filter(|e| e.is_on(day)).collect()
}

/// Events in `[from, from + days]`, earliest first. Undated entries are skipped.
pub fn upcoming(events: &[CalendarEvent], from: NaiveDate, days: u32) -> Vec<&CalendarEvent> {
    let until = from + chrono::Duration::days(i64::from(days));
    let mut hits: Vec<(NaiveDate, &CalendarEvent)> = events
        .iter()
        .filter_map(|e| e.parsed_date().map(|d| (d, e)))
        .filter(|(d, _)| *d >= from && *d <= until)
        .collect();
    hits.sort_by_key(|(d, _)| *d);
    hits.into_iter().map(|(_, e)| e).collect()
}
