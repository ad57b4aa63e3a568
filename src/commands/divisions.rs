// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::shell::DIVISIONS;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &DIVISIONS)? {
        let rows = DIVISIONS
            .iter()
            .map(|d| vec![d.label.to_string(), format!("/{}", d.route), d.focus.to_string()])
            .collect();
        println!("{}", pretty_table(&["Division", "Route", "Covers"], rows));
    }
    Ok(())
}
