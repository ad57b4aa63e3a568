// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::mount;
use crate::client::{Client, Transport};
use crate::models::{Account, CalendarEvent, Goal, LedgerEntry};
use crate::summary::{
    LedgerTotals, Shortfall, buffer_shortfalls, funded_pct, ledger_totals, total_balance, upcoming,
};
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, pretty_table, today};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

const UPCOMING_DAYS: u32 = 7;

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub total_balance: Decimal,
    pub shortfalls: Vec<Shortfall>,
    pub goals_funded_pct: Decimal,
    pub ledger: LedgerTotals,
    pub upcoming_events: usize,
}

pub fn build(
    accounts: &[Account],
    goals: &[Goal],
    ledger: &[LedgerEntry],
    events: &[CalendarEvent],
) -> Dashboard {
    Dashboard {
        total_balance: total_balance(accounts),
        shortfalls: buffer_shortfalls(accounts),
        goals_funded_pct: funded_pct(goals).round_dp(2),
        ledger: ledger_totals(ledger),
        upcoming_events: upcoming(events, today(), UPCOMING_DAYS).len(),
    }
}

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    // Each widget is its own page, as on the dashboard.
    let mut accounts = mount::<Account, T>(client)?;
    let mut goals = mount::<Goal, T>(client)?;
    let mut ledger = mount::<LedgerEntry, T>(client)?;
    let mut events = mount::<CalendarEvent, T>(client)?;

    let dash = build(accounts.items(), goals.items(), ledger.items(), events.items());
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &dash)? {
        let mut rows = vec![
            vec!["Total balance".to_string(), fmt_money(Some(dash.total_balance))],
            vec!["Goals funded".to_string(), fmt_pct(dash.goals_funded_pct)],
            vec![
                "Ledger".to_string(),
                format!(
                    "{} entries, {} profitable, ${:.2}",
                    dash.ledger.entries, dash.ledger.profitable, dash.ledger.total_value
                ),
            ],
            vec![
                format!("Payments next {} days", UPCOMING_DAYS),
                dash.upcoming_events.to_string(),
            ],
        ];
        for s in &dash.shortfalls {
            rows.push(vec![
                format!("Below buffer: {}", s.account),
                fmt_money(Some(s.missing)),
            ]);
        }
        println!("{}", pretty_table(&["Widget", "Value"], rows));
    }

    accounts.deactivate();
    goals.deactivate();
    ledger.deactivate();
    events.deactivate();
    Ok(())
}
