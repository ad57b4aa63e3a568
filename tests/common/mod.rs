// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use serde_json::{Value, json};
use shipdeck::cancel::CancelToken;
use shipdeck::client::{Body, Client, Method, Request, Response, Transport};
use shipdeck::error::ClientError;
use std::cell::RefCell;
use std::collections::HashMap;

pub const BASE: &str = "http://backend.test";

/// In-memory stand-in for the Flask backend. Collections are JSON arrays
/// keyed by path; items in keyed collections are matched on `name`.
#[derive(Default)]
pub struct MemoryBackend {
    collections: RefCell<HashMap<String, Vec<Value>>>,
    raw: RefCell<HashMap<String, Vec<u8>>>,
    pub log: RefCell<Vec<(Method, String)>>,
    pub bodies: RefCell<Vec<Value>>,
    fail_next: RefCell<Option<u16>>,
    unreachable_in: RefCell<Option<usize>>,
    cancel_on_send: RefCell<Option<CancelToken>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, path: &str, items: Vec<Value>) -> Self {
        self.collections
            .borrow_mut()
            .insert(path.to_string(), items);
        self
    }

    /// Serve these exact bytes for GET `path`.
    pub fn with_raw(self, path: &str, body: &str) -> Self {
        self.raw
            .borrow_mut()
            .insert(path.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn fail_next(&self, status: u16) {
        *self.fail_next.borrow_mut() = Some(status);
    }

    pub fn unreachable_next(&self) {
        self.unreachable_in(0);
    }

    /// Let `skip` requests through, then refuse the connection once.
    pub fn unreachable_in(&self, skip: usize) {
        *self.unreachable_in.borrow_mut() = Some(skip);
    }

    /// Cancel `token` while the next request is "in flight".
    pub fn cancel_during_next(&self, token: CancelToken) {
        *self.cancel_on_send.borrow_mut() = Some(token);
    }

    pub fn items(&self, path: &str) -> Vec<Value> {
        self.collections
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, method: Method) -> usize {
        self.log.borrow().iter().filter(|(m, _)| *m == method).count()
    }

    pub fn last_url(&self) -> Option<String> {
        self.log.borrow().last().map(|(_, u)| u.clone())
    }

    fn handle(&self, req: &Request, path: &str) -> Response {
        let (collection, key) = match path.strip_prefix("api/") {
            Some(rest) => match rest.split_once('/') {
                Some((c, k)) if c != "finance" && c != "ledger" => {
                    (format!("api/{}", c), Some(k.to_string()))
                }
                _ => (path.to_string(), None),
            },
            None => (path.to_string(), None),
        };

        match (req.method, key) {
            (Method::Get, None) => {
                if let Some(raw) = self.raw.borrow().get(&collection) {
                    return ok_bytes(raw.clone());
                }
                match self.collections.borrow().get(&collection) {
                    Some(items) => ok(json!(items)),
                    None => status(404, json!({ "error": "not found" })),
                }
            }
            (Method::Post, None) if collection == "api/finance/upload-statement" => {
                match &req.body {
                    Body::File { field, path } if field == "file" && path.exists() => ok(json!({
                        "status": "success",
                        "detected_bills": [{ "name": "Utilities" }, { "name": "Internet" }]
                    })),
                    _ => status(400, json!({ "error": "No file part" })),
                }
            }
            (Method::Post, None) if collection == "shipmate/respond" => match &req.body {
                Body::Json(v) => ok(json!({ "response": format!("Aye: {}", v["input"].as_str().unwrap_or("")) })),
                _ => status(400, json!({})),
            },
            (Method::Post, None) => match &req.body {
                Body::Json(v) => {
                    self.bodies.borrow_mut().push(v.clone());
                    self.collections
                        .borrow_mut()
                        .entry(collection)
                        .or_default()
                        .push(v.clone());
                    // The real backend echoes an agent-specific payload, not the item.
                    ok(json!({ "status": "ok" }))
                }
                _ => status(400, json!({})),
            },
            (Method::Delete, Some(encoded)) => {
                let name = match urlencoding::decode(&encoded) {
                    Ok(n) => n.into_owned(),
                    Err(_) => return status(400, json!({})),
                };
                let mut cols = self.collections.borrow_mut();
                let items = cols.entry(collection).or_default();
                let before = items.len();
                items.retain(|i| i["name"].as_str() != Some(name.as_str()));
                if items.len() == before {
                    status(404, json!({ "error": format!("{} not found", name) }))
                } else {
                    ok(json!({ "deleted": name }))
                }
            }
            _ => status(405, json!({})),
        }
    }
}

impl Transport for MemoryBackend {
    fn send(&self, req: &Request) -> Result<Response, ClientError> {
        self.log.borrow_mut().push((req.method, req.url.clone()));
        if let Some(token) = self.cancel_on_send.borrow_mut().take() {
            token.cancel();
        }
        let refuse = {
            let mut countdown = self.unreachable_in.borrow_mut();
            match *countdown {
                Some(0) => {
                    *countdown = None;
                    true
                }
                Some(n) => {
                    *countdown = Some(n - 1);
                    false
                }
                None => false,
            }
        };
        if refuse {
            return Err(ClientError::Network {
                url: req.url.clone(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            });
        }
        if let Some(code) = self.fail_next.borrow_mut().take() {
            return Ok(status(code, json!({ "error": "boom" })));
        }
        let path = req
            .url
            .strip_prefix(BASE)
            .unwrap_or(&req.url)
            .trim_start_matches('/')
            .to_string();
        Ok(self.handle(req, &path))
    }
}

fn ok(v: Value) -> Response {
    status(200, v)
}

fn ok_bytes(body: Vec<u8>) -> Response {
    Response { status: 200, body }
}

fn status(code: u16, v: Value) -> Response {
    Response {
        status: code,
        body: serde_json::to_vec(&v).unwrap(),
    }
}

pub fn client(backend: MemoryBackend) -> Client<MemoryBackend> {
    Client::with_transport(BASE, backend).unwrap()
}
