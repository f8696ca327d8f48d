// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings surface consumed by the orchestrator and the foreground
//! reconciler (§6 collaborator interfaces). Decoupled behind a trait so
//! tests can supply fixed values without a config file; the production
//! implementation loads a `toml` file and falls back to documented defaults
//! for any missing key.

use std::collections::HashSet;
use std::time::Duration;

/// Internal-SAM caller id, exempt from keep-alive conversion (§4.7, §6
/// sentinels).
pub const SAM_INTERNAL_ID: &str = "com.webos.applicationManager";
/// Memory-manager caller id, exempt from keep-alive conversion.
pub const MEMORY_MANAGER_ID: &str = "com.webos.memorymanager";
/// App-install-service caller id, exempt from keep-alive conversion.
pub const APP_INSTALL_SERVICE_ID: &str = "com.webos.appInstallService";
/// Window-ext caller id whose `"recent"` reason is exempt from keep-alive
/// conversion (§1B, §9 decided open question).
pub const SURFACE_MANAGER_WINDOW_EXT_ID: &str = "com.webos.surfacemanager.windowext";
/// appIds excluded from last-app tracking and loading-list membership (§6
/// sentinels).
pub const CONTAINER_APP_ID: &str = "com.webos.app.container";
pub const INPUT_COMMON_APP_ID: &str = "com.webos.app.inputcommon";

/// Settings surface required by the orchestrator (§6).
pub trait Settings: Send + Sync {
    fn is_keep_alive_app(&self, app_id: &str) -> bool;
    fn get_close_reason(&self, caller_id: &str, reason: Option<&str>) -> Option<String>;
    fn fullscreen_window_types(&self) -> &HashSet<String>;
    fn last_loading_app_timeout(&self) -> Duration;
    fn launch_expired_timeout(&self) -> Duration;
    fn loading_expired_timeout(&self) -> Duration;
}

/// Whether `caller` is exempt from keep-alive-triggered pause conversion for
/// the given `reason` (§4.7 keep-alive policy, §1B precision note).
pub fn is_keep_alive_exempt(caller: &str, reason: Option<&str>) -> bool {
    if matches!(caller, SAM_INTERNAL_ID | MEMORY_MANAGER_ID | APP_INSTALL_SERVICE_ID) {
        return true;
    }
    caller == SURFACE_MANAGER_WINDOW_EXT_ID && reason == Some("recent")
}

/// File-backed settings, merging a `toml` document with documented
/// defaults for any key it omits.
#[derive(Debug, Clone)]
pub struct TomlSettings {
    keep_alive_apps: HashSet<String>,
    fullscreen_window_types: HashSet<String>,
    last_loading_app_timeout: Duration,
    launch_expired_timeout: Duration,
    loading_expired_timeout: Duration,
}

#[derive(Debug, serde::Deserialize, Default)]
struct RawSettings {
    #[serde(default)]
    keep_alive_apps: Vec<String>,
    #[serde(default)]
    fullscreen_window_types: Vec<String>,
    #[serde(default)]
    last_loading_app_timeout_ms: Option<u64>,
    #[serde(default)]
    launch_expired_timeout_ms: Option<u64>,
    #[serde(default)]
    loading_expired_timeout_ms: Option<u64>,
}

impl Default for TomlSettings {
    fn default() -> Self {
        Self {
            keep_alive_apps: HashSet::new(),
            fullscreen_window_types: ["_WEBOS_WINDOW_TYPE_CARD", "_WEBOS_WINDOW_TYPE_RESTRICTED"]
                .into_iter()
                .map(String::from)
                .collect(),
            last_loading_app_timeout: Duration::from_secs(3),
            launch_expired_timeout: Duration::from_secs(10),
            loading_expired_timeout: Duration::from_secs(10),
        }
    }
}

impl TomlSettings {
    /// Parse a `toml` document, falling back to defaults for any key it
    /// omits. Never fails on a missing or empty document (testable
    /// property 8).
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let raw: RawSettings = toml::from_str(contents)?;
        let defaults = Self::default();
        Ok(Self {
            keep_alive_apps: if raw.keep_alive_apps.is_empty() {
                defaults.keep_alive_apps
            } else {
                raw.keep_alive_apps.into_iter().collect()
            },
            fullscreen_window_types: if raw.fullscreen_window_types.is_empty() {
                defaults.fullscreen_window_types
            } else {
                raw.fullscreen_window_types.into_iter().collect()
            },
            last_loading_app_timeout: raw
                .last_loading_app_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.last_loading_app_timeout),
            launch_expired_timeout: raw
                .launch_expired_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.launch_expired_timeout),
            loading_expired_timeout: raw
                .loading_expired_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.loading_expired_timeout),
        })
    }
}

impl Settings for TomlSettings {
    fn is_keep_alive_app(&self, app_id: &str) -> bool {
        self.keep_alive_apps.contains(app_id)
    }

    fn get_close_reason(&self, caller_id: &str, reason: Option<&str>) -> Option<String> {
        reason.map(String::from).or_else(|| Some(caller_id.to_string()))
    }

    fn fullscreen_window_types(&self) -> &HashSet<String> {
        &self.fullscreen_window_types
    }

    fn last_loading_app_timeout(&self) -> Duration {
        self.last_loading_app_timeout
    }

    fn launch_expired_timeout(&self) -> Duration {
        self.launch_expired_timeout
    }

    fn loading_expired_timeout(&self) -> Duration {
        self.loading_expired_timeout
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
