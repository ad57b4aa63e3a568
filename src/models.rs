// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::form::Draft;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A backend collection the client can list.
pub trait Resource: DeserializeOwned + Serialize + Clone + fmt::Debug {
    /// Collection path relative to the base URL.
    const PATH: &'static str;
    const LABEL: &'static str;
    /// Draft fields sent as JSON numbers when they parse as one.
    const NUMERIC_FIELDS: &'static [&'static str] = &[];

    /// Identifying field value, if the resource has one.
    fn key(&self) -> Option<String>;

    /// Draft a fresh form starts from.
    fn initial_draft(_today: NaiveDate) -> Draft {
        Draft::default()
    }
}

/// Resources that accept create and delete-by-key.
pub trait Writable: Resource {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Credit,
    Investment,
    #[serde(other)]
    Other,
}

impl AccountType {
    pub const CHOICES: [&'static str; 4] = ["checking", "savings", "credit", "investment"];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Checking => "checking",
            AccountType::Savings => "savings",
            AccountType::Credit => "credit",
            AccountType::Investment => "investment",
            AccountType::Other => "other",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub const CHOICES: [&'static str; 3] = ["high", "medium", "low"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AccountType,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub balance: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub buffer_required: Option<Decimal>,
    #[serde(default)]
    pub last_updated: String,
}

impl Resource for Account {
    const PATH: &'static str = "api/accounts";
    const LABEL: &'static str = "account";
    const NUMERIC_FIELDS: &'static [&'static str] = &["balance", "buffer_required"];

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn initial_draft(today: NaiveDate) -> Draft {
        Draft::from_pairs([
            ("name", String::new()),
            ("type", AccountType::Checking.to_string()),
            ("balance", String::new()),
            ("buffer_required", String::new()),
            ("last_updated", today.format("%Y-%m-%d").to_string()),
        ])
    }
}

impl Writable for Account {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub target_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub current_amount: Option<Decimal>,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub priority: Priority,
}

impl Goal {
    /// Percent of target reached, clamped to 0..=100. A missing or
    /// non-positive target counts as no progress.
    pub fn progress(&self) -> Decimal {
        percent_of(
            self.current_amount.unwrap_or_default(),
            self.target_amount.unwrap_or_default(),
        )
    }
}

impl Resource for Goal {
    const PATH: &'static str = "api/goals";
    const LABEL: &'static str = "goal";
    const NUMERIC_FIELDS: &'static [&'static str] = &["target_amount", "current_amount"];

    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn initial_draft(_today: NaiveDate) -> Draft {
        Draft::from_pairs([
            ("name", String::new()),
            ("target_amount", String::new()),
            ("current_amount", String::new()),
            ("deadline", String::new()),
            ("priority", Priority::Medium.to_string()),
        ])
    }
}

impl Writable for Goal {}

/// Server-computed trade record; read-only from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: i64,
    pub timestamp: String,
    pub trade_type: String,
    pub asset: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price_per_unit: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_value: Option<Decimal>,
    pub is_profit: bool,
}

impl Resource for LedgerEntry {
    const PATH: &'static str = "api/ledger";
    const LABEL: &'static str = "ledger entry";

    fn key(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: String, // YYYY-MM-DD
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CalendarEvent {
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date == day.format("%Y-%m-%d").to_string()
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Resource for CalendarEvent {
    const PATH: &'static str = "api/finance-calendar";
    const LABEL: &'static str = "calendar event";

    fn key(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExportResult {
    pub fn succeeded(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub detected_bills: Option<Vec<serde_json::Value>>,
}

impl UploadResult {
    pub fn bill_count(&self) -> usize {
        self.detected_bills.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmateReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Accepts a JSON number, a numeric string, `""` or `null`. Anything that
/// is not a number becomes `None` instead of failing the whole record.
/// `part / whole` as a percentage clamped to 0..=100. Results too large
/// for `Decimal` saturate to the nearest bound instead of panicking.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() {
            Decimal::ZERO
        } else {
            Decimal::ONE_HUNDRED
        })
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

fn lenient_decimal<'de, D>(de: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => {
            let s = n.to_string();
            Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .ok()
        }
        Some(serde_json::Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    })
}
