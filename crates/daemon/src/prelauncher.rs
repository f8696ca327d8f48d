// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Prelauncher (C5): the first pipeline stage. Resolves package
//! metadata and, for "automatic" (bridged-launch) apps, parks the item
//! until an external `input_bridged_return` supplies its parameters.

use parking_lot::Mutex;
use samcore::app_item::{LaunchItemError, APP_LAUNCH_ERR_NOT_EXIST};
use samcore::{AppPackage, LaunchItem, Uid};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::oneshot;

/// Read-only lookup of package metadata by appId. Implemented outside this
/// crate by whatever owns the app catalog.
pub trait PackageLookup: Send + Sync {
    fn lookup(&self, app_id: &str) -> Option<AppPackage>;
}

impl<T: PackageLookup + ?Sized> PackageLookup for std::sync::Arc<T> {
    fn lookup(&self, app_id: &str) -> Option<AppPackage> {
        (**self).lookup(app_id)
    }
}

/// First pipeline stage (§4.5). Each `LaunchItem` causes exactly one
/// completion: either `run` resolves directly, or the item is parked here
/// until `input_bridged_return` or `cancel_all` resolves it.
pub struct Prelauncher<P> {
    packages: P,
    pending: Mutex<HashMap<Uid, oneshot::Sender<Value>>>,
}

impl<P: PackageLookup> Prelauncher<P> {
    pub fn new(packages: P) -> Self {
        Self { packages, pending: Mutex::new(HashMap::new()) }
    }

    /// Resolve `item` to completion: a package lookup failure finalizes it
    /// immediately with `"not exist"`; an "automatic" package parks it until
    /// a bridged return or cancellation arrives; everything else passes
    /// through unchanged, ready for the memory checker (§4.6).
    pub async fn run(&self, mut item: LaunchItem) -> LaunchItem {
        let Some(_package) = self.packages.lookup(&item.app_id) else {
            item.set_error(APP_LAUNCH_ERR_NOT_EXIST, LaunchItemError::MissingAppId.to_string());
            return item;
        };

        if !item.is_automatic() {
            return item;
        }

        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(item.uid, tx);
        match rx.await {
            Ok(params) => item.params = params,
            Err(_) => item.cancel(),
        }
        item
    }

    /// Resume a parked bridged launch with parameters supplied by its
    /// parent app. Returns `false` if no item with that uid is pending.
    pub fn input_bridged_return(&self, uid: Uid, params: Value) -> bool {
        match self.pending.lock().remove(&uid) {
            Some(tx) => tx.send(params).is_ok(),
            None => false,
        }
    }

    /// Cancel every pending bridged launch; each parked `run` call observes
    /// a closed channel and finalizes its item with `cancel()`.
    pub fn cancel_all(&self) {
        self.pending.lock().clear();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().len()
    }
}

#[cfg(test)]
#[path = "prelauncher_tests.rs"]
mod tests;
