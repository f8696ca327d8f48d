// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Running-Info Registry (C1): the authoritative table of per-app
//! runtime facts. Every other component reads app state through here;
//! only the orchestrator (C7) and the registry itself mutate it.

use samcore::{LifeStatus, RuntimeStatus, TypeByDir};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};

/// One app's runtime facts (§3 `RunningInfo`). Absent from the registry
/// means `Stop` — callers never see a "deleted but still Stop" entry.
#[derive(Debug, Clone)]
pub struct RunningInfo {
    pub app_id: String,
    pub pid: Option<String>,
    pub web_process_id: Option<String>,
    pub runtime_status: RuntimeStatus,
    pub life_status: LifeStatus,
    pub preload_mode: bool,
    pub type_by_dir: TypeByDir,
    pub foreground_info: Option<Value>,
}

impl RunningInfo {
    fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            pid: None,
            web_process_id: None,
            runtime_status: RuntimeStatus::Stopped,
            life_status: LifeStatus::Stop,
            preload_mode: false,
            type_by_dir: TypeByDir::System,
            foreground_info: None,
        }
    }

    fn to_running_entry(&self) -> Value {
        json!({
            "appId": self.app_id,
            "processid": self.pid.clone().unwrap_or_default(),
            "webprocessid": self.web_process_id.clone().unwrap_or_default(),
        })
    }
}

/// Table of `RunningInfo`, plus the current foreground snapshot (§4.1,
/// §4.8). Holds no transition policy of its own — that lives in the
/// router (C2); the registry only stores facts.
#[derive(Debug, Default)]
pub struct Registry {
    table: HashMap<String, RunningInfo>,
    fullscreen_owner: Option<String>,
    foreground_ids: HashSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, app_id: &str) -> Option<&RunningInfo> {
        self.table.get(app_id)
    }

    /// Returns a live, mutable entry for `app_id`, creating a fresh
    /// `Stop`/`Stopped` one if none exists yet (§3 invariant 1, §9 design
    /// note on implicit nullability).
    pub fn get_or_create(&mut self, app_id: &str) -> &mut RunningInfo {
        self.table.entry(app_id.to_string()).or_insert_with(|| RunningInfo::new(app_id))
    }

    pub fn remove(&mut self, app_id: &str) -> Option<RunningInfo> {
        self.foreground_ids.remove(app_id);
        if self.fullscreen_owner.as_deref() == Some(app_id) {
            self.fullscreen_owner = None;
        }
        self.table.remove(app_id)
    }

    pub fn list_all(&self) -> impl Iterator<Item = &RunningInfo> {
        self.table.values()
    }

    pub fn list_dev_apps(&self) -> Vec<&RunningInfo> {
        self.table.values().filter(|info| info.type_by_dir == TypeByDir::Dev).collect()
    }

    pub fn get_foreground_info_by_id(&self, app_id: &str) -> Option<&Value> {
        self.table.get(app_id).and_then(|info| info.foreground_info.as_ref())
    }

    /// Record `app_id` as the current single fullscreen owner (§4.8 step 1).
    pub fn set_foreground_app(&mut self, app_id: &str) {
        self.fullscreen_owner = Some(app_id.to_string());
    }

    pub fn clear_foreground_app(&mut self) {
        self.fullscreen_owner = None;
    }

    /// Replace the set of appIds present in the latest foreground snapshot
    /// (§4.8 step 1), independent of which (if any) owns fullscreen.
    pub fn set_foreground_app_ids(&mut self, ids: &[String]) {
        self.foreground_ids = ids.iter().cloned().collect();
    }

    pub fn foreground_app_ids(&self) -> &HashSet<String> {
        &self.foreground_ids
    }

    pub fn set_foreground_info(&mut self, app_id: &str, info: Value) {
        self.get_or_create(app_id).foreground_info = Some(info);
    }

    pub fn is_app_on_fullscreen(&self, app_id: &str) -> bool {
        self.fullscreen_owner.as_deref() == Some(app_id)
    }

    pub fn fullscreen_owner(&self) -> Option<&str> {
        self.fullscreen_owner.as_deref()
    }

    /// Render the table as the `running`/`dev/running` subscription payload
    /// (§4.1, §4.9).
    pub fn get_running_list(&self, dev_only: bool) -> Vec<Value> {
        self.table
            .values()
            .filter(|info| !dev_only || info.type_by_dir == TypeByDir::Dev)
            .map(RunningInfo::to_running_entry)
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
