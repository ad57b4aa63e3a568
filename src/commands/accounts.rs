// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{create, delete, mount};
use crate::client::{Client, Transport};
use crate::form::FormState;
use crate::models::Account;
use crate::summary::total_balance;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    let mut page = mount::<Account, T>(client)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            if !maybe_print_json(json_flag, jsonl_flag, &page.items())? {
                print_accounts(page.items());
            }
        }
        Some(("add", sub)) => {
            fill_draft(page.form_mut(), sub);
            let name = page.draft().get("name").unwrap_or_default().to_string();
            create(&mut page)?;
            println!("Added account '{}'", name);
            print_accounts(page.items());
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            delete(&mut page, name)?;
            println!("Removed account '{}'", name);
            print_accounts(page.items());
        }
        _ => {}
    }
    page.deactivate();
    Ok(())
}

/// Copy the given flags onto the draft; omitted flags keep their defaults.
pub fn fill_draft(form: &mut FormState, sub: &clap::ArgMatches) {
    for (arg, field) in [
        ("name", "name"),
        ("type", "type"),
        ("balance", "balance"),
        ("buffer", "buffer_required"),
        ("updated", "last_updated"),
    ] {
        if let Some(v) = sub.get_one::<String>(arg) {
            form.update(field, v.as_str());
        }
    }
}

pub fn rows(items: &[Account]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.kind.to_string(),
                fmt_money(a.balance),
                fmt_money(a.buffer_required),
                a.last_updated.clone(),
            ]
        })
        .collect()
}

fn print_accounts(items: &[Account]) {
    println!(
        "{}",
        pretty_table(&["Name", "Type", "Balance", "Buffer", "Updated"], rows(items))
    );
    println!("Total balance: {}", fmt_money(Some(total_balance(items))));
}
