// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-flight request value objects (C3): `LaunchItem`, `CloseItem`, and the
//! named `LoadingEntry` record that replaces the original's
//! `(appId, type, timestamp)` tuple (§9 redesign notes).

use serde::{Deserialize, Serialize};
use serde_json::Value;

crate::define_id! {
    /// Correlation id for one in-flight launch request. Opaque; carries no
    /// ordering semantics (§4.3).
    pub struct Uid("lnch-");
}

/// Error code used for cancelled launches, matching the original's
/// `APP_LAUNCH_ERR_GENERAL` sentinel (§6, §7).
pub const APP_LAUNCH_ERR_GENERAL: i32 = -102;
/// Error code used for an unknown appId on `launch` (§6).
pub const APP_LAUNCH_ERR_NOT_EXIST: i32 = -101;

/// Pipeline stage a `LaunchItem` currently occupies. Monotonically
/// non-decreasing except on error, which jumps straight to `Done`
/// (invariant 3, §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Prelaunch,
    MemoryCheck,
    Launch,
    Done,
}

/// An in-flight launch request. Lives across the pipeline; owned by the
/// orchestrator (C7) until `finishLaunching` retires it.
#[derive(Debug, Clone)]
pub struct LaunchItem {
    pub uid: Uid,
    pub app_id: String,
    pub caller: String,
    pub reason: Option<String>,
    pub preload: Option<String>,
    pub show_splash: bool,
    pub show_spinner: bool,
    pub params: Value,
    pub stage: Stage,
    pub launch_start_time_ms: u64,
    pub error_code: Option<i32>,
    pub error_text: Option<String>,
    pub pid_after_launch: Option<String>,
}

/// Raw launch request payload, the input to `LaunchItem::create`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaunchTask {
    pub id: Option<String>,
    pub caller: Option<String>,
    pub reason: Option<String>,
    pub preload: Option<String>,
    #[serde(rename = "showSplash")]
    pub show_splash: Option<bool>,
    #[serde(rename = "showSpinner")]
    pub show_spinner: Option<bool>,
    #[serde(default)]
    pub params: Value,
}

/// Error returned by `LaunchItem::create` for a malformed request. Only one
/// variant exists today (§4.3: `appId` is the only required field) but this
/// stays an enum so `LifecycleError::NotFound` can wrap it without string
/// matching.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LaunchItemError {
    #[error("not exist")]
    MissingAppId,
}

impl LaunchItem {
    /// Parse a launch request into a `LaunchItem`. `appId` is required; its
    /// absence is the only failure mode (§4.3, boundary behavior §8).
    pub fn create(task: LaunchTask, launch_start_time_ms: u64) -> Result<Self, LaunchItemError> {
        let app_id = task.id.filter(|s| !s.is_empty()).ok_or(LaunchItemError::MissingAppId)?;
        Ok(Self {
            uid: Uid::new(),
            app_id,
            caller: task.caller.unwrap_or_default(),
            reason: task.reason,
            preload: task.preload,
            show_splash: task.show_splash.unwrap_or(true),
            show_spinner: task.show_spinner.unwrap_or(false),
            params: task.params,
            stage: Stage::Prelaunch,
            launch_start_time_ms,
            error_code: None,
            error_text: None,
            pid_after_launch: None,
        })
    }

    pub fn has_error(&self) -> bool {
        self.error_code.is_some()
    }

    pub fn set_error(&mut self, code: i32, text: impl Into<String>) {
        self.error_code = Some(code);
        self.error_text = Some(text.into());
    }

    /// Mark this item cancelled with the standard "stopped launching" error
    /// used by `closeAllLoadingApps` and `clearLaunchingAndLoadingItemsByAppId`
    /// (§5 cancellation semantics).
    pub fn cancel(&mut self) {
        self.set_error(APP_LAUNCH_ERR_GENERAL, "stopped launching");
        self.stage = Stage::Done;
    }

    /// True when the item requested splash or spinner display — the
    /// necessary (not sufficient) condition for emitting a `splash` lifecycle
    /// event (§4.9, testable property 7).
    pub fn requested_splash_or_spinner(&self) -> bool {
        self.show_splash || self.show_spinner
    }

    /// Is this app's package type an "automatic" type requiring a bridged
    /// launch rendezvous? Encoded on the preload field today: an automatic
    /// launch sets `preload` to the sentinel `"automatic"`.
    pub fn is_automatic(&self) -> bool {
        self.preload.as_deref() == Some("automatic")
    }
}

/// A close request, mirroring `LaunchItem` (§3). Owned by the backend during
/// close; discarded once the backend reports a terminal state.
#[derive(Debug, Clone)]
pub struct CloseItem {
    pub app_id: String,
    pub pid: Option<String>,
    pub caller: String,
    pub reason: Option<String>,
}

impl CloseItem {
    pub fn new(app_id: impl Into<String>, caller: impl Into<String>) -> Self {
        Self { app_id: app_id.into(), pid: None, caller: caller.into(), reason: None }
    }

    crate::setters! {
        option { pid: String, reason: String }
    }
}

/// Named record for a loading-list entry, replacing the original's
/// `std::tuple<appId, type, timestamp>` (§9 redesign notes).
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingEntry {
    pub app_id: String,
    pub app_type: crate::types::AppType,
    pub start_time_ms: u64,
}

#[cfg(test)]
#[path = "app_item_tests.rs"]
mod tests;
