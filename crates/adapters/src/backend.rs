// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Runtime-Backend trait (C4): the seam between the orchestrator and
//! whatever actually spawns/kills/pauses app processes (native SysMgr,
//! WAM, QML). The orchestrator never talks to a concrete backend directly —
//! only through this trait — so a single daemon build can serve more than
//! one runtime family, and tests run against `fake::FakeBackend` instead of
//! a real process tree.

use async_trait::async_trait;
use samcore::{CloseItem, Event, LaunchItem};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors a backend can report back to the orchestrator. These are
/// terminal failures of the *request*, not of the app itself — app-level
/// failure is reported asynchronously as an `Event`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("no valid life handler")]
    NoLifeHandler,
    #[error("app is not running")]
    NotRunning,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Channel a native app uses to push `Event`s back to the orchestrator
/// after `registerApp`/`connectNativeApp` hands it one (§4.4, §6).
pub type NativeChannel = mpsc::UnboundedSender<Event>;

/// The runtime-backend seam (C4). A backend owns the actual process
/// lifecycle; the orchestrator drives it through these four calls and
/// learns what happened only through the `events` channel, never a return
/// value — the same asynchronous-callback shape the original uses for
/// `RuntimeStatus` changes.
#[async_trait]
pub trait RuntimeBackendAdapter: Send + Sync {
    /// Start `item.app_id`. Success here means "accepted for launch", not
    /// "running" — the backend reports the actual phases (`Starting`,
    /// `Running`, ...) as `Event::RuntimeStatusChanged` on `events`.
    async fn launch(
        &self,
        item: LaunchItem,
        events: mpsc::UnboundedSender<Event>,
    ) -> Result<(), BackendError>;

    /// Request termination of a running app. `item.pid`, when set,
    /// disambiguates which process to target when an appId has relaunched
    /// under a new pid since the caller last observed it.
    async fn close(
        &self,
        item: CloseItem,
        events: mpsc::UnboundedSender<Event>,
    ) -> Result<(), BackendError>;

    /// Ask a running app to pause. `report_event` mirrors the original's
    /// distinction between a silent pause (window-manager-driven) and one
    /// that should surface a `paused` lifecycle event to subscribers.
    async fn pause(
        &self,
        app_id: &str,
        params: Value,
        report_event: bool,
        events: mpsc::UnboundedSender<Event>,
    ) -> Result<(), BackendError>;

    /// Bind a native app's own event channel so it can report its status
    /// directly instead of being polled (§4.4 `registerApp`/
    /// `connectNativeApp`). Interface-version gating happens in the
    /// orchestrator, not here — by the time a backend sees this call, the
    /// version has already been validated.
    async fn register_app(&self, app_id: &str, channel: NativeChannel) -> Result<(), BackendError>;
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
