// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;
use std::time::Duration;

struct FixedSettings {
    fullscreen_types: HashSet<String>,
}

impl Settings for FixedSettings {
    fn is_keep_alive_app(&self, _app_id: &str) -> bool {
        false
    }
    fn get_close_reason(&self, caller_id: &str, reason: Option<&str>) -> Option<String> {
        reason.map(String::from).or_else(|| Some(caller_id.to_string()))
    }
    fn fullscreen_window_types(&self) -> &HashSet<String> {
        &self.fullscreen_types
    }
    fn last_loading_app_timeout(&self) -> Duration {
        Duration::from_secs(3)
    }
    fn launch_expired_timeout(&self) -> Duration {
        Duration::from_secs(10)
    }
    fn loading_expired_timeout(&self) -> Duration {
        Duration::from_secs(10)
    }
}

fn settings() -> FixedSettings {
    FixedSettings { fullscreen_types: ["_WEBOS_WINDOW_TYPE_CARD"].into_iter().map(String::from).collect() }
}

#[test]
fn fullscreen_entry_becomes_owner_and_foreground() {
    let mut registry = Registry::new();
    let snapshot = ForegroundSnapshot {
        info: vec![json!({"appId": "com.test.alpha", "windowType": "_WEBOS_WINDOW_TYPE_CARD", "windowGroup": false})],
        reason: None,
    };
    let result = reconcile(&mut registry, &settings(), &snapshot);
    assert_eq!(result.new_owner.as_deref(), Some("com.test.alpha"));
    assert_eq!(result.to_foreground, vec!["com.test.alpha".to_string()]);
    assert!(result.owner_changed);
    assert!(!result.trigger_last_app);
    assert!(registry.is_app_on_fullscreen("com.test.alpha"));
}

#[test]
fn foreground_app_missing_from_new_snapshot_goes_background() {
    let mut registry = Registry::new();
    registry.get_or_create("com.test.alpha").life_status = LifeStatus::Foreground;
    registry.set_foreground_app("com.test.alpha");
    registry.set_foreground_app_ids(&["com.test.alpha".to_string()]);

    let snapshot = ForegroundSnapshot {
        info: vec![json!({"appId": "com.test.delta", "windowType": "_WEBOS_WINDOW_TYPE_CARD", "windowGroup": false})],
        reason: None,
    };
    let result = reconcile(&mut registry, &settings(), &snapshot);
    assert_eq!(result.to_background, vec!["com.test.alpha".to_string()]);
    assert_eq!(result.to_foreground, vec!["com.test.delta".to_string()]);
    assert!(result.owner_changed);
}

#[test]
fn background_only_app_is_not_driven_background_again() {
    let mut registry = Registry::new();
    registry.get_or_create("com.test.alpha").life_status = LifeStatus::Background;
    registry.set_foreground_app_ids(&["com.test.alpha".to_string()]);

    let snapshot = ForegroundSnapshot { info: vec![], reason: None };
    let result = reconcile(&mut registry, &settings(), &snapshot);
    assert!(result.to_background.is_empty());
}

#[test]
fn empty_snapshot_with_force_minimize_suppresses_last_app() {
    let mut registry = Registry::new();
    let snapshot = ForegroundSnapshot { info: vec![], reason: Some(FORCE_MINIMIZE_REASON.to_string()) };
    let result = reconcile(&mut registry, &settings(), &snapshot);
    assert!(!result.trigger_last_app);
    assert!(result.new_owner.is_none());
}

#[test]
fn empty_snapshot_without_reason_triggers_last_app() {
    let mut registry = Registry::new();
    let snapshot = ForegroundSnapshot { info: vec![], reason: None };
    let result = reconcile(&mut registry, &settings(), &snapshot);
    assert!(result.trigger_last_app);
}

#[test]
fn non_owner_windowgroup_member_does_not_become_owner() {
    let mut registry = Registry::new();
    let snapshot = ForegroundSnapshot {
        info: vec![json!({
            "appId": "com.test.alpha",
            "windowType": "_WEBOS_WINDOW_TYPE_CARD",
            "windowGroup": true,
            "windowGroupOwner": false,
        })],
        reason: None,
    };
    let result = reconcile(&mut registry, &settings(), &snapshot);
    assert!(result.new_owner.is_none());
}
