// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Subscription Publisher (C9): builds and broadcasts the three
//! outward-facing payload shapes (§4.9). Never computes a `lifeStatus`
//! itself — it only renders whatever the router/orchestrator already
//! decided.

use crate::registry::Registry;
use samcore::LifeStatus;
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::sync::broadcast;

/// Kind tag for the single lifecycle-event stream (§4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEventKind {
    Splash,
    Preload,
    Launch,
    Foreground,
    Background,
    Pause,
    Close,
    Stop,
}

samcore::simple_display! {
    LifecycleEventKind {
        Splash => "splash",
        Preload => "preload",
        Launch => "launch",
        Foreground => "foreground",
        Background => "background",
        Pause => "pause",
        Close => "close",
        Stop => "stop",
    }
}

const CHANNEL_CAPACITY: usize = 256;

/// Broadcasts the three subscription kinds to however many listeners are
/// currently attached. A publish with no subscribers is not an error —
/// `broadcast::Sender::send` failing just means nobody is listening yet.
pub struct Publisher {
    life_status_tx: broadcast::Sender<Value>,
    running_tx: broadcast::Sender<Value>,
    dev_running_tx: broadcast::Sender<Value>,
    lifecycle_tx: broadcast::Sender<Value>,
    foreground_tx: broadcast::Sender<Value>,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher {
    pub fn new() -> Self {
        Self {
            life_status_tx: broadcast::channel(CHANNEL_CAPACITY).0,
            running_tx: broadcast::channel(CHANNEL_CAPACITY).0,
            dev_running_tx: broadcast::channel(CHANNEL_CAPACITY).0,
            lifecycle_tx: broadcast::channel(CHANNEL_CAPACITY).0,
            foreground_tx: broadcast::channel(CHANNEL_CAPACITY).0,
        }
    }

    pub fn subscribe_life_status(&self) -> broadcast::Receiver<Value> {
        self.life_status_tx.subscribe()
    }

    pub fn subscribe_running(&self) -> broadcast::Receiver<Value> {
        self.running_tx.subscribe()
    }

    pub fn subscribe_dev_running(&self) -> broadcast::Receiver<Value> {
        self.dev_running_tx.subscribe()
    }

    pub fn subscribe_lifecycle_events(&self) -> broadcast::Receiver<Value> {
        self.lifecycle_tx.subscribe()
    }

    pub fn subscribe_foreground_events(&self) -> broadcast::Receiver<Value> {
        self.foreground_tx.subscribe()
    }

    /// Build and publish the `getAppLifeStatus` payload for `app_id` (§4.9).
    /// `launch_reason` supplies `reason` while the app is Launching/
    /// Relaunching; `close_reasons` supplies it for Stop/Closing and is
    /// erased once the app reaches Stop.
    pub fn publish_app_life_status(
        &self,
        registry: &Registry,
        app_id: &str,
        launch_reason: Option<&str>,
        close_reasons: &mut HashMap<String, String>,
    ) {
        let Some(info) = registry.get(app_id) else { return };

        let mut payload = json!({
            "status": info.life_status.as_status_str(),
            "appId": app_id,
        });
        if let Some(pid) = &info.pid {
            payload["processId"] = json!(pid);
        }

        let reason = match info.life_status {
            LifeStatus::Launching | LifeStatus::Relaunching => launch_reason.map(String::from),
            LifeStatus::Stop | LifeStatus::Closing => close_reasons.get(app_id).cloned(),
            _ => None,
        };
        if let Some(reason) = reason {
            payload["reason"] = json!(reason);
        }

        if let Some(foreground_info) = &info.foreground_info {
            for key in ["windowType", "windowGroup", "windowGroupOwner", "windowGroupOwnerId"] {
                if let Some(value) = foreground_info.get(key) {
                    payload[key] = value.clone();
                }
            }
        }
        payload["backgroundStatus"] = json!(if info.preload_mode { "preload" } else { "normal" });

        let _ = self.life_status_tx.send(payload);
        if info.life_status == LifeStatus::Stop {
            close_reasons.remove(app_id);
        }
    }

    pub fn publish_running(&self, registry: &Registry) {
        let running = registry.get_running_list(false);
        let _ = self.running_tx.send(json!({"returnValue": true, "running": running}));
    }

    pub fn publish_dev_running(&self, registry: &Registry) {
        let running = registry.get_running_list(true);
        let _ = self.dev_running_tx.send(json!({"returnValue": true, "running": running}));
    }

    pub fn publish_lifecycle_event(&self, app_id: &str, kind: LifecycleEventKind) {
        let _ = self.lifecycle_tx.send(json!({"appId": app_id, "event": kind.to_string()}));
    }

    /// `eventForegroundAppChanged` (§4.8 step 5): the fullscreen owner changed.
    pub fn publish_foreground_app_changed(&self, new_owner: Option<&str>) {
        let _ = self.foreground_tx.send(json!({"event": "foregroundAppChanged", "appId": new_owner}));
    }

    /// `eventForegroundExtraInfoChanged` (§4.8 step 5): the foreground-app
    /// snapshot set differs from the previous one, independent of whether
    /// the owner itself changed.
    pub fn publish_foreground_extra_info_changed(&self, info: &[Value]) {
        let _ = self.foreground_tx.send(json!({"event": "foregroundExtraInfoChanged", "foregroundAppInfo": info}));
    }
}

/// Whether a `splash` lifecycle event should fire for this launch
/// (testable property 7, §4.9): only when the item requested splash or
/// spinner AND the state it is transitioning out of was Stop, Preloading,
/// or preload-mode Background.
pub fn should_emit_splash(requested: bool, previous_life_status: LifeStatus, preload_mode_before: bool) -> bool {
    if !requested {
        return false;
    }
    matches!(previous_life_status, LifeStatus::Stop | LifeStatus::Preloading)
        || (previous_life_status == LifeStatus::Background && preload_mode_before)
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
