// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::mount;
use crate::client::{Client, Transport};
use crate::models::LedgerEntry;
use crate::summary::ledger_totals;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub),
        Some(("export", sub)) => export(client, sub),
        _ => Ok(()),
    }
}

fn list<T: Transport>(client: &Client<T>, sub: &clap::ArgMatches) -> Result<()> {
    let mut page = mount::<LedgerEntry, T>(client)?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &page.items())? {
        println!(
            "{}",
            pretty_table(
                &["Timestamp", "Type", "Asset", "Qty", "Unit Price", "Total", "Profit?"],
                rows(page.items())
            )
        );
        let totals = ledger_totals(page.items());
        println!(
            "{} entries, {} profitable, total value ${:.2}",
            totals.entries, totals.profitable, totals.total_value
        );
    }
    page.deactivate();
    Ok(())
}

pub fn rows(items: &[LedgerEntry]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|e| {
            vec![
                e.timestamp.clone(),
                e.trade_type.clone(),
                e.asset.clone(),
                e.quantity
                    .map(|q| q.normalize().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                fmt_money(e.price_per_unit),
                fmt_money(e.total_value),
                if e.is_profit { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect()
}

fn export<T: Transport>(client: &Client<T>, sub: &clap::ArgMatches) -> Result<()> {
    let result = client.export_ledger().context("Ledger export")?;
    if !result.succeeded() {
        bail!(
            "Export failed: {}",
            result.error.as_deref().unwrap_or("backend did not report success")
        );
    }
    println!(
        "Exported to: {}",
        result.filename.as_deref().unwrap_or("(unnamed file)")
    );

    if let Some(out) = sub.get_one::<String>("out") {
        let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
        let entries = client.list::<LedgerEntry>().context("Load ledger")?;
        write_local(&entries, &fmt, Path::new(out))?;
        println!("Saved {} entries to {}", entries.len(), out);
    }
    Ok(())
}

/// Write the fetched ledger to `out` as `csv` or `json`. Unknown formats
/// fail before anything is written.
pub fn write_local(entries: &[LedgerEntry], fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Create {}", out.display()))?;
            for e in entries {
                wtr.serialize(e)?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(entries)?)
                .with_context(|| format!("Write {}", out.display()))?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
