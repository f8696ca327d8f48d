// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test doubles for the adapter traits. Record every call so orchestrator
//! tests can assert on backend interaction without spawning real
//! processes, and can script a failure or a specific `Event` sequence.

use crate::backend::{BackendError, NativeChannel, RuntimeBackendAdapter};
use crate::notify::NotificationAdapter;
use async_trait::async_trait;
use parking_lot::Mutex;
use samcore::{CloseItem, Event, LaunchItem, RuntimeStatus};
use serde_json::Value;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    Launch { app_id: String },
    Close { app_id: String, pid: Option<String> },
    Pause { app_id: String, report_event: bool },
    RegisterApp { app_id: String },
}

/// A scriptable `RuntimeBackendAdapter`. By default `launch` reports
/// `Starting` then `Running` on the events channel and `close` reports
/// `Stopped`; call `fail_next_launch`/`fail_next_close` to script a
/// rejection instead.
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<BackendCall>>,
    fail_next_launch: Mutex<Option<BackendError>>,
    fail_next_close: Mutex<Option<BackendError>>,
    fail_next_pause: Mutex<Option<BackendError>>,
    auto_report: Mutex<bool>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self { auto_report: Mutex::new(true), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    pub fn fail_next_launch(&self, err: BackendError) {
        *self.fail_next_launch.lock() = Some(err);
    }

    pub fn fail_next_close(&self, err: BackendError) {
        *self.fail_next_close.lock() = Some(err);
    }

    pub fn fail_next_pause(&self, err: BackendError) {
        *self.fail_next_pause.lock() = Some(err);
    }

    /// Disable the default `Starting`/`Running`/`Stopped` auto-report so a
    /// test can drive the event sequence manually.
    pub fn disable_auto_report(&self) {
        *self.auto_report.lock() = false;
    }
}

#[async_trait]
impl RuntimeBackendAdapter for FakeBackend {
    async fn launch(
        &self,
        item: LaunchItem,
        events: mpsc::UnboundedSender<Event>,
    ) -> Result<(), BackendError> {
        self.calls.lock().push(BackendCall::Launch { app_id: item.app_id.clone() });
        if let Some(err) = self.fail_next_launch.lock().take() {
            return Err(err);
        }
        if *self.auto_report.lock() {
            let _ = events.send(Event::RuntimeStatusChanged {
                app_id: item.app_id.clone(),
                uid: Some(item.uid),
                status: RuntimeStatus::Starting,
            });
            let _ = events.send(Event::RunningAppAdded {
                app_id: item.app_id.clone(),
                pid: Some(format!("pid-{}", item.app_id)),
                web_process_id: None,
            });
            let _ = events.send(Event::RuntimeStatusChanged {
                app_id: item.app_id,
                uid: None,
                status: RuntimeStatus::Running,
            });
        }
        Ok(())
    }

    async fn close(
        &self,
        item: CloseItem,
        events: mpsc::UnboundedSender<Event>,
    ) -> Result<(), BackendError> {
        self.calls.lock().push(BackendCall::Close { app_id: item.app_id.clone(), pid: item.pid.clone() });
        if let Some(err) = self.fail_next_close.lock().take() {
            return Err(err);
        }
        if *self.auto_report.lock() {
            let _ = events.send(Event::RuntimeStatusChanged {
                app_id: item.app_id.clone(),
                uid: None,
                status: RuntimeStatus::Closing,
            });
            let _ = events.send(Event::RunningAppRemoved { app_id: item.app_id.clone() });
            let _ = events.send(Event::RuntimeStatusChanged {
                app_id: item.app_id,
                uid: None,
                status: RuntimeStatus::Stopped,
            });
        }
        Ok(())
    }

    async fn pause(
        &self,
        app_id: &str,
        _params: Value,
        report_event: bool,
        _events: mpsc::UnboundedSender<Event>,
    ) -> Result<(), BackendError> {
        self.calls.lock().push(BackendCall::Pause { app_id: app_id.to_string(), report_event });
        if let Some(err) = self.fail_next_pause.lock().take() {
            return Err(err);
        }
        Ok(())
    }

    async fn register_app(&self, app_id: &str, _channel: NativeChannel) -> Result<(), BackendError> {
        self.calls.lock().push(BackendCall::RegisterApp { app_id: app_id.to_string() });
        Ok(())
    }
}

/// A recording `NotificationAdapter`.
#[derive(Default)]
pub struct FakeNotifier {
    prompts: Mutex<Vec<String>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl NotificationAdapter for FakeNotifier {
    async fn create_pincode_prompt(&self, app_id: &str) {
        self.prompts.lock().push(app_id.to_string());
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
