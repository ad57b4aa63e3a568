// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{AccountType, Priority};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn list_cmd() -> Command {
    json_flags(Command::new("list").about("List the collection"))
}

fn rm_cmd(what: &'static str) -> Command {
    Command::new("rm")
        .about(format!("Delete a {} by name", what))
        .arg(Arg::new("name").required(true).help("Name, exactly as listed"))
}

pub fn build_cli() -> Command {
    Command::new("shipdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal command center for the Shipmate finance backend")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Backend base URL (default: $SHIPDECK_BACKEND_URL, config file, http://localhost:5000)"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging to stderr"),
        )
        .subcommand(
            Command::new("account")
                .about("Accounts: list, add, remove")
                .subcommand_required(true)
                .subcommand(list_cmd())
                .subcommand(
                    Command::new("add")
                        .about("Create an account, then show the reconciled list")
                        .arg(Arg::new("name").long("name").help("Account name (key)"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(AccountType::CHOICES)
                                .help("Account type (default: checking)"),
                        )
                        .arg(Arg::new("balance").long("balance"))
                        .arg(Arg::new("buffer").long("buffer").help("Buffer required"))
                        .arg(
                            Arg::new("updated")
                                .long("updated")
                                .help("Last updated, YYYY-MM-DD (default: today)"),
                        ),
                )
                .subcommand(rm_cmd("account")),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals: list, add, remove")
                .subcommand_required(true)
                .subcommand(list_cmd())
                .subcommand(
                    Command::new("add")
                        .about("Create a goal, then show the reconciled list")
                        .arg(Arg::new("name").long("name").help("Goal name (key)"))
                        .arg(Arg::new("target").long("target").help("Target amount"))
                        .arg(Arg::new("current").long("current").help("Current amount"))
                        .arg(Arg::new("deadline").long("deadline"))
                        .arg(
                            Arg::new("priority")
                                .long("priority")
                                .value_parser(Priority::CHOICES)
                                .help("Priority (default: medium)"),
                        ),
                )
                .subcommand(rm_cmd("goal")),
        )
        .subcommand(
            Command::new("ledger")
                .about("Trade ledger (read-only)")
                .subcommand_required(true)
                .subcommand(list_cmd())
                .subcommand(
                    Command::new("export")
                        .about("Ask the backend to export the ledger; optionally save a local copy")
                        .arg(Arg::new("out").long("out").help("Also write the ledger to this file"))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("Local copy format: csv|json"),
                        ),
                ),
        )
        .subcommand(json_flags(
            Command::new("calendar")
                .about("Payment calendar for one day, or the days ahead")
                .arg(Arg::new("date").long("date").help("YYYY-MM-DD (default: today)"))
                .arg(
                    Arg::new("upcoming")
                        .long("upcoming")
                        .value_parser(value_parser!(u32))
                        .help("Show events in the next N days instead of one day"),
                ),
        ))
        .subcommand(
            Command::new("upload")
                .about("Upload a statement (.pdf, .xlsx, .xls, .csv) for bill detection")
                .arg(Arg::new("path").required(true)),
        )
        .subcommand(json_flags(
            Command::new("bills").about("Recurring bills detected by the backend"),
        ))
        .subcommand(json_flags(
            Command::new("summary").about("Balances, buffers, goal progress and ledger totals"),
        ))
        .subcommand(
            Command::new("ask")
                .about("Send a request to Shipmate")
                .arg(Arg::new("input").required(true).num_args(1..).trailing_var_arg(true)),
        )
        .subcommand(json_flags(
            Command::new("divisions").about("Command divisions and their routes"),
        ))
        .subcommand(
            Command::new("config")
                .about("Configuration")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print resolved settings")),
        )
}

/// Deepest subcommand matches. Global args propagate down, so this is where
/// `--base-url`, `--timeout` and `-v` are visible wherever they were typed.
pub fn leaf(m: &ArgMatches) -> &ArgMatches {
    match m.subcommand() {
        Some((_, sub)) => leaf(sub),
        None => m,
    }
}
