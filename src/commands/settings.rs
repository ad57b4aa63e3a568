// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Settings, config_path};
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("show", _)) = m.subcommand() {
        let file = config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "(none)".to_string());
        let rows = vec![
            vec![
                "base_url".to_string(),
                settings.base_url.clone(),
                settings.base_url_source.to_string(),
            ],
            vec![
                "timeout_secs".to_string(),
                settings.timeout_secs.to_string(),
                String::new(),
            ],
            vec!["config file".to_string(), file, String::new()],
        ];
        println!("{}", pretty_table(&["Setting", "Value", "From"], rows));
    }
    Ok(())
}
