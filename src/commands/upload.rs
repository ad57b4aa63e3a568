// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::{Client, Transport};
use crate::error::ClientError;
use anyhow::{Result, anyhow, bail};
use std::path::Path;

const ACCEPTED: [&str; 4] = ["pdf", "xlsx", "xls", "csv"];

pub fn handle<T: Transport>(client: &Client<T>, m: &clap::ArgMatches) -> Result<()> {
    let path = Path::new(m.get_one::<String>("path").unwrap().trim());
    check_extension(path)?;
    if !path.is_file() {
        bail!("No such file: {}", path.display());
    }
    match client.upload_statement(path) {
        Ok(result) => {
            println!("Uploaded. {} bills detected.", result.bill_count());
            Ok(())
        }
        Err(e @ ClientError::Status { .. }) => match e.backend_message() {
            Some(message) => Err(anyhow!("Upload failed: {}", message)),
            None => Err(anyhow!("Upload failed (HTTP {}).", e.status().unwrap_or_default())),
        },
        Err(e) => Err(anyhow!(e).context("Error uploading file")),
    }
}

/// Same file types the dashboard's picker offered.
pub fn check_extension(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !ACCEPTED.contains(&ext.as_str()) {
        bail!(
            "Unsupported statement type '{}' (use {})",
            path.display(),
            ACCEPTED.join(", ")
        );
    }
    Ok(())
}
