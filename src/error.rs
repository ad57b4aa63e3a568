// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong between the client and the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The backend answered outside the 2xx range.
    #[error("{method} {url} returned HTTP {status}{}", detail(.body))]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid base URL '{0}', expected http:// or https://")]
    InvalidBaseUrl(String),
}

const DETAIL_LIMIT: usize = 200;

/// `": <message>"` from a backend error body: the `error` field of a JSON
/// object when present, otherwise the raw text cut to `DETAIL_LIMIT` chars.
fn detail(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return String::new();
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string());
    let mut cut: String = message.chars().take(DETAIL_LIMIT).collect();
    if cut.len() < message.len() {
        cut.push('…');
    }
    format!(": {}", cut)
}

impl ClientError {
    /// HTTP status for `Status` errors, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The backend's own explanation for a `Status` error, if it sent one.
    pub fn backend_message(&self) -> Option<String> {
        match self {
            ClientError::Status { body, .. } => {
                let v: serde_json::Value = serde_json::from_str(body).ok()?;
                v.get("error")?.as_str().map(str::to_string)
            }
            _ => None,
        }
    }
}
