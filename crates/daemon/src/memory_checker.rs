// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Memory Checker (C6): the second pipeline stage. Consults an
//! external memory-manager service to decide whether a launch may proceed.

use async_trait::async_trait;
use parking_lot::Mutex;
use samcore::app_item::APP_LAUNCH_ERR_GENERAL;
use samcore::{LaunchItem, Uid};
use std::collections::HashSet;

/// Asks whether the system has enough headroom to launch `app_id`. `Err`
/// carries the human-readable denial reason recorded on the item.
#[async_trait]
pub trait MemoryManager: Send + Sync {
    async fn check(&self, app_id: &str) -> Result<(), String>;
}

#[async_trait]
impl<T: MemoryManager + ?Sized> MemoryManager for std::sync::Arc<T> {
    async fn check(&self, app_id: &str) -> Result<(), String> {
        (**self).check(app_id).await
    }
}

/// Second pipeline stage (§4.6). Tracks in-flight uids only so `cancel_all`
/// can report what was outstanding; it does not itself abort in-flight
/// `check` calls — the orchestrator's cancellation token does that at the
/// call site (see `orchestrator::run_pipeline`).
pub struct MemoryChecker<M> {
    manager: M,
    in_flight: Mutex<HashSet<Uid>>,
}

impl<M: MemoryManager> MemoryChecker<M> {
    pub fn new(manager: M) -> Self {
        Self { manager, in_flight: Mutex::new(HashSet::new()) }
    }

    pub async fn run(&self, mut item: LaunchItem) -> LaunchItem {
        self.in_flight.lock().insert(item.uid);
        let outcome = self.manager.check(&item.app_id).await;
        self.in_flight.lock().remove(&item.uid);
        if let Err(reason) = outcome {
            item.set_error(APP_LAUNCH_ERR_GENERAL, reason);
        }
        item
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().len()
    }

    pub fn cancel_all(&self) {
        self.in_flight.lock().clear();
    }
}

#[cfg(test)]
#[path = "memory_checker_tests.rs"]
mod tests;
