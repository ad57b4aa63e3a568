// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use shipdeck::{cli, client::Client, commands, config::Settings, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let globals = cli::leaf(&matches);

    logging::init(globals.get_flag("verbose"));

    let settings = Settings::load(
        globals.get_one::<String>("base-url").map(String::as_str),
        globals.get_one::<u64>("timeout").copied(),
    )?;
    tracing::debug!(base_url = %settings.base_url, source = %settings.base_url_source, "settings resolved");

    // Commands that never touch the backend.
    match matches.subcommand() {
        Some(("divisions", sub)) => return commands::divisions::handle(sub),
        Some(("config", sub)) => return commands::settings::handle(&settings, sub),
        None => {
            cli::build_cli().print_help()?;
            println!();
            return Ok(());
        }
        _ => {}
    }

    let client = Client::from_settings(&settings)
        .with_context(|| format!("Configure backend at {}", settings.base_url))?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&client, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&client, sub)?,
        Some(("ledger", sub)) => commands::ledger::handle(&client, sub)?,
        Some(("calendar", sub)) => commands::calendar::handle(&client, sub)?,
        Some(("upload", sub)) => commands::upload::handle(&client, sub)?,
        Some(("bills", sub)) => commands::bills::handle(&client, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&client, sub)?,
        Some(("ask", sub)) => commands::ask::handle(&client, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
