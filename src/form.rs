// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// A not-yet-submitted item, field name to raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    fields: BTreeMap<String, String>,
}

impl Draft {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON body for a create request. Fields listed in `numeric` go out as
    /// numbers when they parse as one; everything else, including empty
    /// numeric input, goes out verbatim as a string.
    pub fn to_json(&self, numeric: &[&str]) -> Value {
        let mut body = Map::new();
        for (field, raw) in &self.fields {
            let value = if numeric.contains(&field.as_str()) {
                raw.trim()
                    .parse::<Number>()
                    .map(Value::Number)
                    .unwrap_or_else(|_| Value::String(raw.clone()))
            } else {
                Value::String(raw.clone())
            };
            body.insert(field.clone(), value);
        }
        Value::Object(body)
    }
}

/// The single pending draft of one page. No required-ness or format checks;
/// the backend is the validator.
#[derive(Debug, Clone)]
pub struct FormState {
    initial: Draft,
    draft: Draft,
}

impl FormState {
    pub fn new(initial: Draft) -> Self {
        Self {
            draft: initial.clone(),
            initial,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn update(&mut self, field: impl Into<String>, value: impl Into<String>) -> &Draft {
        self.draft.set(field, value);
        &self.draft
    }

    /// Back to the resource defaults, not to a blank map.
    pub fn reset(&mut self) -> &Draft {
        self.draft = self.initial.clone();
        &self.draft
    }

    pub fn is_pristine(&self) -> bool {
        self.draft == self.initial
    }
}
