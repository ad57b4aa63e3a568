// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Resource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Empty,
    Loading,
    Loaded,
    /// Last fetch failed; items still hold the previous successful fetch.
    Failed(String),
}

/// Page-scoped copy of one collection. Items are only ever replaced
/// wholesale by a fetch result, never patched.
#[derive(Debug, Clone)]
pub struct CollectionStore<R> {
    state: LoadState,
    items: Vec<R>,
}

impl<R> Default for CollectionStore<R> {
    fn default() -> Self {
        Self {
            state: LoadState::Empty,
            items: Vec::new(),
        }
    }
}

impl<R: Resource> CollectionStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn finish_load(&mut self, items: Vec<R>) {
        self.items = items;
        self.state = LoadState::Loaded;
    }

    pub fn fail_load(&mut self, reason: impl Into<String>) {
        self.state = LoadState::Failed(reason.into());
    }

    pub fn find(&self, key: &str) -> Option<&R> {
        self.items
            .iter()
            .find(|item| item.key().as_deref() == Some(key))
    }

    /// Drop everything, back to `Empty`.
    pub fn clear(&mut self) {
        self.items.clear();
        self.state = LoadState::Empty;
    }
}
