// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The list-CRUD page: one collection, one draft, one cancellation scope.
//!
//! Mutations follow mutate-then-reconcile. A create or delete is sent, and
//! only when the backend answers 2xx is the collection listed again; the
//! store is never patched locally. A failed mutation returns its error and
//! leaves both the store and the draft as they were.
//!
//! Every page activation owns a [`CancelToken`]. After [`ListPage::deactivate`]
//! (or a cancel from a cloned token) no response is written into the page.

use crate::cancel::CancelToken;
use crate::client::{Client, Transport};
use crate::error::ClientError;
use crate::form::{Draft, FormState};
use crate::models::{Resource, Writable};
use crate::store::{CollectionStore, LoadState};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The page was deactivated; the response was dropped.
    Cancelled,
}

#[derive(Debug)]
pub enum MutationOutcome {
    /// Mutation accepted and the collection re-fetched.
    Reconciled,
    /// Mutation accepted but the reconciling fetch failed; the store keeps
    /// the pre-mutation list and is marked `Failed`.
    Unreconciled(ClientError),
    /// The page was deactivated before the outcome could be applied.
    Cancelled,
}

pub struct ListPage<'c, R: Resource, T: Transport> {
    client: &'c Client<T>,
    store: CollectionStore<R>,
    form: FormState,
    token: CancelToken,
}

impl<'c, R: Resource, T: Transport> ListPage<'c, R, T> {
    /// Fresh page state; nothing is fetched until [`ListPage::load`].
    pub fn activate(client: &'c Client<T>, today: NaiveDate) -> Self {
        Self {
            client,
            store: CollectionStore::new(),
            form: FormState::new(R::initial_draft(today)),
            token: CancelToken::new(),
        }
    }

    pub fn items(&self) -> &[R] {
        self.store.items()
    }

    pub fn state(&self) -> &LoadState {
        self.store.state()
    }

    pub fn store(&self) -> &CollectionStore<R> {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Handle that deactivates this page when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Cancel outstanding work and discard the page's copies.
    pub fn deactivate(&mut self) {
        self.token.cancel();
        self.store.clear();
        self.form.reset();
        debug!(resource = R::LABEL, "page deactivated");
    }

    /// `Loading -> Loaded` on success, `Loading -> Failed` on error.
    pub fn load(&mut self) -> Result<LoadOutcome, ClientError> {
        if self.token.is_cancelled() {
            return Ok(LoadOutcome::Cancelled);
        }
        self.store.begin_load();
        let fetched = self.client.list::<R>();
        if self.token.is_cancelled() {
            debug!(resource = R::LABEL, "dropping list response after deactivation");
            self.store.clear();
            return Ok(LoadOutcome::Cancelled);
        }
        match fetched {
            Ok(items) => {
                self.store.finish_load(items);
                Ok(LoadOutcome::Loaded)
            }
            Err(e) => {
                self.store.fail_load(e.to_string());
                Err(e)
            }
        }
    }

    fn reconcile(&mut self) -> MutationOutcome {
        match self.load() {
            Ok(LoadOutcome::Loaded) => MutationOutcome::Reconciled,
            Ok(LoadOutcome::Cancelled) => MutationOutcome::Cancelled,
            Err(e) => {
                warn!(resource = R::LABEL, error = %e, "reconcile fetch failed");
                MutationOutcome::Unreconciled(e)
            }
        }
    }
}

impl<R: Writable, T: Transport> ListPage<'_, R, T> {
    /// Send the draft. On success the draft resets and the list is
    /// reconciled; on failure the draft is kept for another attempt.
    pub fn submit_create(&mut self) -> Result<MutationOutcome, ClientError> {
        if self.token.is_cancelled() {
            return Ok(MutationOutcome::Cancelled);
        }
        let sent = self.client.create::<R>(self.form.draft());
        if self.token.is_cancelled() {
            return Ok(MutationOutcome::Cancelled);
        }
        sent?;
        info!(resource = R::LABEL, "created");
        self.form.reset();
        Ok(self.reconcile())
    }

    /// Delete by key. A failed delete is reported and skips the reconcile.
    pub fn submit_delete(&mut self, key: &str) -> Result<MutationOutcome, ClientError> {
        if self.token.is_cancelled() {
            return Ok(MutationOutcome::Cancelled);
        }
        let sent = self.client.remove::<R>(key);
        if self.token.is_cancelled() {
            return Ok(MutationOutcome::Cancelled);
        }
        sent?;
        info!(resource = R::LABEL, key, "deleted");
        Ok(self.reconcile())
    }
}
