// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{Client, Transport};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use serde_json::Value;

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    let bills = client.recurring_bills().context("Load recurring bills")?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &bills)? {
        if bills.is_empty() {
            println!("No recurring bills detected.");
        } else {
            println!("{}", pretty_table(&["Name", "Amount", "Due"], rows(&bills)));
        }
    }
    Ok(())
}

/// Bills are free-form on the backend; show the common fields when present.
pub fn rows(bills: &[Value]) -> Vec<Vec<String>> {
    bills
        .iter()
        .map(|b| {
            vec![
                text(b, &["name", "description", "payee"]),
                text(b, &["amount"]),
                text(b, &["due", "due_date", "date", "next_due"]),
            ]
        })
        .collect()
}

fn text(bill: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| match bill.get(*k) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}
