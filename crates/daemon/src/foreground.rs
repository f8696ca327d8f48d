// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Foreground Reconciler (C8): turns window-manager foreground
//! snapshots into the set of lifecycle transitions the orchestrator should
//! apply. Pure with respect to transitions — it never calls the router or
//! mutates `lifeStatus` itself; it only reads/writes the registry's
//! foreground bookkeeping and hands the orchestrator a todo list (§4.8).

use crate::registry::Registry;
use samcore::{LifeStatus, Settings};
use serde_json::Value;
use std::collections::HashSet;

/// A raw foreground snapshot from the window/session manager.
#[derive(Debug, Clone, Default)]
pub struct ForegroundSnapshot {
    pub info: Vec<Value>,
    pub reason: Option<String>,
}

/// Sentinel reason that suppresses the last-app fallback even with no
/// fullscreen owner (§4.8 step 4).
pub const FORCE_MINIMIZE_REASON: &str = "forceMinimize";

/// What the orchestrator must do in response to one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileResult {
    pub to_background: Vec<String>,
    pub to_foreground: Vec<String>,
    pub new_owner: Option<String>,
    pub owner_changed: bool,
    pub info_changed: bool,
    pub trigger_last_app: bool,
}

/// Compute the transitions implied by `snapshot`, updating the registry's
/// foreground bookkeeping (appId set, owner, per-app info) in place. Does
/// not touch `lifeStatus` — the orchestrator applies `to_background`/
/// `to_foreground` through `setAppLifeStatus` so every transition still
/// passes through the router (invariant 2, §3).
pub fn reconcile(registry: &mut Registry, settings: &dyn Settings, snapshot: &ForegroundSnapshot) -> ReconcileResult {
    let previous_owner = registry.fullscreen_owner().map(str::to_string);
    let previous_ids: HashSet<String> = registry.foreground_app_ids().clone();

    let mut new_ids: HashSet<String> = HashSet::new();
    let mut new_owner: Option<String> = None;

    for entry in &snapshot.info {
        let Some(app_id) = entry.get("appId").and_then(Value::as_str) else {
            continue;
        };
        if app_id.is_empty() {
            continue;
        }
        registry.get_or_create(app_id);
        registry.set_foreground_info(app_id, entry.clone());
        new_ids.insert(app_id.to_string());

        let window_type = entry.get("windowType").and_then(Value::as_str).unwrap_or_default();
        let window_group = entry.get("windowGroup").and_then(Value::as_bool).unwrap_or(false);
        let window_group_owner = entry.get("windowGroupOwner").and_then(Value::as_bool).unwrap_or(false);
        let is_fullscreen =
            settings.fullscreen_window_types().contains(window_type) && (!window_group || window_group_owner);
        if is_fullscreen {
            new_owner = Some(app_id.to_string());
        }
    }

    let to_background: Vec<String> = previous_ids
        .difference(&new_ids)
        .filter(|app_id| {
            registry
                .get(app_id)
                .map(|info| matches!(info.life_status, LifeStatus::Foreground | LifeStatus::Pausing))
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    let to_foreground: Vec<String> = new_ids.iter().cloned().collect();

    let owner_changed = previous_owner != new_owner;
    let info_changed = previous_ids != new_ids;
    let trigger_last_app = new_owner.is_none() && snapshot.reason.as_deref() != Some(FORCE_MINIMIZE_REASON);

    match &new_owner {
        Some(owner) => registry.set_foreground_app(owner),
        None => registry.clear_foreground_app(),
    }
    let ordered_ids: Vec<String> = new_ids.into_iter().collect();
    registry.set_foreground_app_ids(&ordered_ids);

    ReconcileResult { to_background, to_foreground, new_owner, owner_changed, info_changed, trigger_last_app }
}

#[cfg(test)]
#[path = "foreground_tests.rs"]
mod tests;
