// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{create, delete, mount};
use crate::client::{Client, Transport};
use crate::form::FormState;
use crate::models::Goal;
use crate::summary::funded_pct;
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, pretty_table, progress_bar};
use anyhow::Result;
use serde::Serialize;

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    let mut page = mount::<Goal, T>(client)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let data: Vec<GoalView> = page.items().iter().map(GoalView::from).collect();
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                print_goals(page.items());
            }
        }
        Some(("add", sub)) => {
            fill_draft(page.form_mut(), sub);
            let name = page.draft().get("name").unwrap_or_default().to_string();
            create(&mut page)?;
            println!("Added goal '{}'", name);
            print_goals(page.items());
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            delete(&mut page, name)?;
            println!("Removed goal '{}'", name);
            print_goals(page.items());
        }
        _ => {}
    }
    page.deactivate();
    Ok(())
}

/// A goal plus its computed progress, for JSON output.
#[derive(Debug, Serialize)]
pub struct GoalView<'a> {
    #[serde(flatten)]
    pub goal: &'a Goal,
    pub progress: rust_decimal::Decimal,
}

impl<'a> From<&'a Goal> for GoalView<'a> {
    fn from(goal: &'a Goal) -> Self {
        Self {
            goal,
            progress: goal.progress().round_dp(2),
        }
    }
}

pub fn fill_draft(form: &mut FormState, sub: &clap::ArgMatches) {
    for (arg, field) in [
        ("name", "name"),
        ("target", "target_amount"),
        ("current", "current_amount"),
        ("deadline", "deadline"),
        ("priority", "priority"),
    ] {
        if let Some(v) = sub.get_one::<String>(arg) {
            form.update(field, v.as_str());
        }
    }
}

pub fn rows(items: &[Goal]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|g| {
            let pct = g.progress();
            vec![
                g.name.clone(),
                format!(
                    "{} / {}",
                    fmt_money(g.current_amount),
                    fmt_money(g.target_amount)
                ),
                g.deadline.clone(),
                g.priority.to_string(),
                format!("{} {}", progress_bar(pct, 20), fmt_pct(pct)),
            ]
        })
        .collect()
}

fn print_goals(items: &[Goal]) {
    println!(
        "{}",
        pretty_table(&["Goal", "Saved / Target", "Deadline", "Priority", "Progress"], rows(items))
    );
    println!("Overall funded: {}", fmt_pct(funded_pct(items)));
}
