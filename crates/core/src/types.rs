// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value types shared across the lifecycle core: the read-only app package
//! view, and the two status enums (`RuntimeStatus`, `LifeStatus`) that the
//! router maps between.

use serde::{Deserialize, Serialize};

/// How a package declares its runtime. Distinct from `HandlerType` because a
/// package's declared `appType` and the handler that actually runs it may
/// diverge for legacy packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Web,
    Native,
    Qml,
}

/// Which backend (C4 implementation) a package is dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerType {
    Web,
    Native,
    Qml,
}

/// Native registration interface version a native package was built
/// against. `registerApp` requires `V2`; the legacy `connectNativeApp` entry
/// point requires `V1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NativeInterfaceVersion {
    V1 = 1,
    V2 = 2,
}

/// Distinguishes developer-loaded packages from catalog packages, used to
/// filter the `dev/running` subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeByDir {
    Dev,
    System,
}

/// Read-only package metadata, owned by a catalog outside this crate's
/// scope. The orchestrator only ever looks packages up by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPackage {
    pub app_id: String,
    pub app_type: AppType,
    pub handler_type: HandlerType,
    pub native_interface_version: NativeInterfaceVersion,
    pub default_window_type: String,
    pub is_child_window: bool,
    pub title: String,
    pub splash_background: String,
    pub type_by_dir: TypeByDir,
}

impl AppPackage {
    /// A fullscreen-candidate window type is `"card"` or `"minimal"` (§4.7
    /// last-app machinery).
    pub fn is_fullscreen_window_type(&self) -> bool {
        matches!(self.default_window_type.as_str(), "card" | "minimal")
    }
}

/// Backend-reported execution phase (glossary: Runtime status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeStatus {
    Stopped,
    Starting,
    Running,
    Registered,
    Closing,
}

crate::simple_display! {
    RuntimeStatus {
        Stopped => "stopped",
        Starting => "starting",
        Running => "running",
        Registered => "registered",
        Closing => "closing",
    }
}

/// User-visible lifecycle phase of an app (glossary: Life status). This is
/// the sole field C9 publishes externally (invariant 2, §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    Stop,
    Preloading,
    Launching,
    Relaunching,
    Foreground,
    Background,
    Pausing,
    Paused,
    Closing,
}

impl LifeStatus {
    /// Lowercase string form used in `getAppLifeStatus` subscription
    /// payloads (§6).
    pub fn as_status_str(&self) -> &'static str {
        match self {
            LifeStatus::Stop => "stop",
            LifeStatus::Preloading => "preloading",
            LifeStatus::Launching => "launching",
            LifeStatus::Relaunching => "relaunching",
            LifeStatus::Foreground => "foreground",
            LifeStatus::Background => "background",
            LifeStatus::Pausing => "pausing",
            LifeStatus::Paused => "paused",
            LifeStatus::Closing => "closing",
        }
    }

    /// Parse the subscription string form back into a `LifeStatus`. Identity
    /// with `as_status_str` for every defined value (testable property §8).
    pub fn parse_status_str(s: &str) -> Option<Self> {
        Some(match s {
            "stop" => LifeStatus::Stop,
            "preloading" => LifeStatus::Preloading,
            "launching" => LifeStatus::Launching,
            "relaunching" => LifeStatus::Relaunching,
            "foreground" => LifeStatus::Foreground,
            "background" => LifeStatus::Background,
            "pausing" => LifeStatus::Pausing,
            "paused" => LifeStatus::Paused,
            "closing" => LifeStatus::Closing,
            _ => return None,
        })
    }

    /// True for the states that belong to the loading list (invariant 5,
    /// §3): entered on Launching/Relaunching, left on Pausing/Background/Stop.
    pub fn enters_loading_list(&self) -> bool {
        matches!(self, LifeStatus::Launching | LifeStatus::Relaunching)
    }

    pub fn leaves_loading_list(&self) -> bool {
        matches!(self, LifeStatus::Pausing | LifeStatus::Background | LifeStatus::Stop)
    }
}

crate::simple_display! {
    LifeStatus {
        Stop => "stop",
        Preloading => "preloading",
        Launching => "launching",
        Relaunching => "relaunching",
        Foreground => "foreground",
        Background => "background",
        Pausing => "pausing",
        Paused => "paused",
        Closing => "closing",
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
