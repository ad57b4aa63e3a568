// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{Client, Transport};
use anyhow::{Context, Result};

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    let input = m
        .get_many::<String>("input")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    let reply = client.shipmate_respond(&input).context("Ask Shipmate")?;
    println!(
        "{}",
        reply.response.as_deref().unwrap_or("No response received.")
    );
    Ok(())
}
