// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Resource client: requests against the backend's REST collections.
//!
//! HTTP goes through the [`Transport`] trait. [`HttpTransport`] is the
//! reqwest-backed implementation; anything else (an in-memory backend in
//! tests, a recording proxy) only has to turn a [`Request`] into a
//! [`Response`].

use crate::config::Settings;
use crate::error::ClientError;
use crate::form::Draft;
use crate::models::{ExportResult, Resource, ShipmateReply, UploadResult, Writable};
use crate::utils::http_client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub enum Body {
    Empty,
    Json(Value),
    /// Multipart upload of a single file under `field`.
    File { field: String, path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub body: Body,
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when there is nothing to decode: no bytes, whitespace or `null`.
    fn is_blank(&self) -> bool {
        let text = String::from_utf8_lossy(&self.body);
        let trimmed = text.trim();
        trimmed.is_empty() || trimmed == "null"
    }
}

pub trait Transport {
    fn send(&self, req: &Request) -> Result<Response, ClientError>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let client = http_client(timeout).map_err(|source| ClientError::Network {
            url: String::new(),
            source: Box::new(source),
        })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, req: &Request) -> Result<Response, ClientError> {
        let builder = match req.method {
            Method::Get => self.client.get(&req.url),
            Method::Post => self.client.post(&req.url),
            Method::Delete => self.client.delete(&req.url),
        };
        let builder = match &req.body {
            Body::Empty => builder,
            Body::Json(v) => builder.json(v),
            Body::File { field, path } => {
                let form = reqwest::blocking::multipart::Form::new()
                    .file(field.clone(), path)
                    .map_err(|source| ClientError::Io {
                        path: path.clone(),
                        source,
                    })?;
                builder.multipart(form)
            }
        };
        let network = |e: reqwest::Error| ClientError::Network {
            url: req.url.clone(),
            source: Box::new(e),
        };
        let resp = builder.send().map_err(network)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(network)?.to_vec();
        Ok(Response { status, body })
    }
}

/// Typed access to the backend under one base URL.
pub struct Client<T: Transport = HttpTransport> {
    base: String,
    transport: T,
}

impl Client<HttpTransport> {
    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(Duration::from_secs(settings.timeout_secs))?;
        Client::with_transport(&settings.base_url, transport)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = || ClientError::InvalidBaseUrl(base_url.to_string());
        let parsed = reqwest::Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https")
            || parsed.host_str().is_none_or(str::is_empty)
            || trimmed.contains(char::is_whitespace)
        {
            return Err(invalid());
        }
        Ok(Self {
            base: trimmed.to_string(),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// URL of one item: the key is percent-encoded as a single path segment,
    /// so `/` and spaces survive the trip.
    pub fn item_url<R: Resource>(&self, key: &str) -> String {
        format!("{}/{}", self.url(R::PATH), urlencoding::encode(key))
    }

    /// GET the collection. A blank or `null` body is an empty list.
    pub fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        let url = self.url(R::PATH);
        let resp = self.execute(Method::Get, url.clone(), Body::Empty)?;
        if resp.is_blank() {
            return Ok(Vec::new());
        }
        let items: Option<Vec<R>> = decode(&url, &resp)?;
        let items = items.unwrap_or_default();
        debug!(resource = R::LABEL, count = items.len(), "listed");
        Ok(items)
    }

    /// POST the draft. Any 2xx is success; the body is not inspected since
    /// callers reconcile by listing again.
    pub fn create<R: Writable>(&self, draft: &Draft) -> Result<(), ClientError> {
        let body = draft.to_json(R::NUMERIC_FIELDS);
        self.execute(Method::Post, self.url(R::PATH), Body::Json(body))?;
        Ok(())
    }

    pub fn remove<R: Writable>(&self, key: &str) -> Result<(), ClientError> {
        self.execute(Method::Delete, self.item_url::<R>(key), Body::Empty)?;
        Ok(())
    }

    /// A failed export comes back as a 5xx carrying `{"error": ...}`; that
    /// message is returned in `ExportResult::error` rather than as an `Err`.
    pub fn export_ledger(&self) -> Result<ExportResult, ClientError> {
        match self.get_json("api/ledger/export") {
            Err(e @ ClientError::Status { .. }) => match e.backend_message() {
                Some(message) => Ok(ExportResult {
                    status: "error".to_string(),
                    filename: None,
                    error: Some(message),
                }),
                None => Err(e),
            },
            other => other,
        }
    }

    pub fn recurring_bills(&self) -> Result<Vec<Value>, ClientError> {
        let bills: Option<Vec<Value>> = self.get_json("api/finance/recurring-bills")?;
        Ok(bills.unwrap_or_default())
    }

    pub fn upload_statement(&self, path: &Path) -> Result<UploadResult, ClientError> {
        let url = self.url("api/finance/upload-statement");
        let body = Body::File {
            field: "file".to_string(),
            path: path.to_path_buf(),
        };
        let resp = self.execute(Method::Post, url.clone(), body)?;
        if resp.is_blank() {
            return Ok(UploadResult::default());
        }
        decode(&url, &resp)
    }

    pub fn shipmate_respond(&self, input: &str) -> Result<ShipmateReply, ClientError> {
        let url = self.url("shipmate/respond");
        let resp = self.execute(Method::Post, url.clone(), Body::Json(json!({ "input": input })))?;
        if resp.is_blank() {
            return Ok(ShipmateReply::default());
        }
        decode(&url, &resp)
    }

    fn get_json<V: DeserializeOwned>(&self, path: &str) -> Result<V, ClientError> {
        let url = self.url(path);
        let resp = self.execute(Method::Get, url.clone(), Body::Empty)?;
        decode(&url, &resp)
    }

    /// Send and map non-2xx to [`ClientError::Status`]. No retries.
    fn execute(&self, method: Method, url: String, body: Body) -> Result<Response, ClientError> {
        debug!(%method, %url, "sending");
        let req = Request { method, url, body };
        let resp = self.transport.send(&req)?;
        if !resp.is_success() {
            let body = String::from_utf8_lossy(&resp.body).into_owned();
            warn!(%method, url = %req.url, status = resp.status, "backend rejected request");
            return Err(ClientError::Status {
                method: method.as_str(),
                url: req.url,
                status: resp.status,
                body,
            });
        }
        Ok(resp)
    }
}

fn decode<V: DeserializeOwned>(url: &str, resp: &Response) -> Result<V, ClientError> {
    serde_json::from_slice(&resp.body).map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}
