// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Internal signals fed into the orchestrator (C7). These are facts that
//! already happened — backend callbacks, pipeline-stage completions,
//! foreground snapshots — consumed by the orchestrator's own event loop.

use crate::app_item::Uid;
use crate::types::RuntimeStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Backend reported a new running process for `appId` (§4.4).
    #[serde(rename = "runningAppAdded")]
    RunningAppAdded { app_id: String, pid: Option<String>, web_process_id: Option<String> },

    /// Backend reported `appId`'s process is gone (§4.4).
    #[serde(rename = "runningAppRemoved")]
    RunningAppRemoved { app_id: String },

    /// Backend-reported runtime phase transition for `appId`, correlated to
    /// the `uid` that caused it when known (§4.4).
    #[serde(rename = "runtimeStatusChanged")]
    RuntimeStatusChanged { app_id: String, uid: Option<Uid>, status: RuntimeStatus },

    /// The backend finished (successfully or not) executing `launch` for
    /// this uid (§4.7 pipeline progression).
    #[serde(rename = "launchingDone")]
    LaunchingDone { uid: Uid },

    /// The prelauncher finished its stage for this uid (§4.5).
    #[serde(rename = "prelaunchingDone")]
    PrelaunchingDone { uid: Uid },

    /// The memory checker started consulting the memory manager for this
    /// uid (§4.6).
    #[serde(rename = "memoryCheckingStart")]
    MemoryCheckingStart { uid: Uid },

    /// The memory checker finished its stage for this uid (§4.6).
    #[serde(rename = "memoryCheckingDone")]
    MemoryCheckingDone { uid: Uid },

    /// A foreground-info snapshot arrived from the window manager (§4.8).
    #[serde(rename = "foregroundInfoChanged")]
    ForegroundInfoChanged { info: Vec<serde_json::Value>, reason: Option<String> },
}

crate::simple_display! {
    Event {
        RunningAppAdded { .. } => "runningAppAdded",
        RunningAppRemoved { .. } => "runningAppRemoved",
        RuntimeStatusChanged { .. } => "runtimeStatusChanged",
        LaunchingDone { .. } => "launchingDone",
        PrelaunchingDone { .. } => "prelaunchingDone",
        MemoryCheckingStart { .. } => "memoryCheckingStart",
        MemoryCheckingDone { .. } => "memoryCheckingDone",
        ForegroundInfoChanged { .. } => "foregroundInfoChanged",
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
