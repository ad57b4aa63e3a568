// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod goals;
pub mod ledger;
pub mod calendar;
pub mod upload;
pub mod bills;
pub mod summary;
pub mod ask;
pub mod divisions;
pub mod settings;

use crate::client::{Client, Transport};
use crate::models::{Resource, Writable};
use crate::page::{ListPage, MutationOutcome};
use crate::utils::today;
use anyhow::{Context, Result, bail};

/// Activate a page and run its initial load.
pub(crate) fn mount<R: Resource, T: Transport>(client: &Client<T>) -> Result<ListPage<'_, R, T>> {
    let mut page = ListPage::activate(client, today());
    page.load()
        .with_context(|| format!("Load {}s from {}", R::LABEL, client.base_url()))?;
    Ok(page)
}

pub(crate) fn create<R: Writable, T: Transport>(page: &mut ListPage<'_, R, T>) -> Result<()> {
    let outcome = page
        .submit_create()
        .with_context(|| format!("Create {}", R::LABEL))?;
    settle::<R>(outcome)
}

pub(crate) fn delete<R: Writable, T: Transport>(page: &mut ListPage<'_, R, T>, key: &str) -> Result<()> {
    let outcome = page
        .submit_delete(key)
        .with_context(|| format!("Delete {} '{}'", R::LABEL, key))?;
    settle::<R>(outcome)
}

fn settle<R: Resource>(outcome: MutationOutcome) -> Result<()> {
    match outcome {
        MutationOutcome::Reconciled => Ok(()),
        MutationOutcome::Unreconciled(e) => {
            eprintln!("warning: {} saved, but refreshing the list failed: {}", R::LABEL, e);
            Ok(())
        }
        MutationOutcome::Cancelled => bail!("Cancelled before the {} list could refresh", R::LABEL),
    }
}
