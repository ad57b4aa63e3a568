// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::mount;
use crate::client::{Client, Transport};
use crate::models::CalendarEvent;
use crate::summary::{events_on, upcoming};
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table, today};
use anyhow::Result;

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    let day = match m.get_one::<String>("date") {
        Some(raw) => parse_date(raw.trim())?,
        None => today(),
    };
    let mut page = mount::<CalendarEvent, T>(client)?;
    let (heading, empty, hits) = match m.get_one::<u32>("upcoming") {
        Some(days) => (
            format!("Events from {} through the next {} days", day, days),
            "No upcoming events.",
            upcoming(page.items(), day, *days),
        ),
        None => (
            format!("Events on {}", day.format("%a %b %d %Y")),
            "No events for this day.",
            events_on(page.items(), day),
        ),
    };

    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &hits)? {
        println!("{}", heading);
        if hits.is_empty() {
            println!("{}", empty);
        } else {
            println!(
                "{}",
                pretty_table(&["Date", "Type", "Name", "Amount", "Account", "Reason"], rows(&hits))
            );
        }
    }
    page.deactivate();
    Ok(())
}

pub fn rows(events: &[&CalendarEvent]) -> Vec<Vec<String>> {
    events
        .iter()
        .map(|e| {
            vec![
                e.date.clone(),
                e.kind.to_uppercase(),
                e.name.clone(),
                fmt_money(e.amount.map(|a| a.abs())),
                e.account.clone(),
                e.reason.clone().unwrap_or_default(),
            ]
        })
        .collect()
}
