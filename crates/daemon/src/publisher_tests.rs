// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn life_status_publish_includes_reason_for_launching() {
    let publisher = Publisher::new();
    let mut registry = Registry::new();
    registry.get_or_create("com.test.alpha").life_status = LifeStatus::Launching;
    let mut close_reasons = HashMap::new();

    let mut rx = publisher.subscribe_life_status();
    publisher.publish_app_life_status(&registry, "com.test.alpha", Some("user"), &mut close_reasons);

    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["status"], "launching");
    assert_eq!(payload["reason"], "user");
}

#[tokio::test]
async fn stop_erases_close_reason_after_publish() {
    let publisher = Publisher::new();
    let mut registry = Registry::new();
    registry.get_or_create("com.test.alpha").life_status = LifeStatus::Stop;
    let mut close_reasons = HashMap::new();
    close_reasons.insert("com.test.alpha".to_string(), "user".to_string());

    let mut rx = publisher.subscribe_life_status();
    publisher.publish_app_life_status(&registry, "com.test.alpha", None, &mut close_reasons);

    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["reason"], "user");
    assert!(!close_reasons.contains_key("com.test.alpha"));
}

#[tokio::test]
async fn running_publish_matches_registry_snapshot() {
    let publisher = Publisher::new();
    let mut registry = Registry::new();
    registry.get_or_create("com.test.alpha").pid = Some("42".into());
    let mut rx = publisher.subscribe_running();
    publisher.publish_running(&registry);
    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["returnValue"], true);
    assert_eq!(payload["running"][0]["appId"], "com.test.alpha");
}

#[tokio::test]
async fn lifecycle_event_payload_carries_kind() {
    let publisher = Publisher::new();
    let mut rx = publisher.subscribe_lifecycle_events();
    publisher.publish_lifecycle_event("com.test.alpha", LifecycleEventKind::Launch);
    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["event"], "launch");
    assert_eq!(payload["appId"], "com.test.alpha");
}

#[test]
fn splash_suppressed_without_request() {
    assert!(!should_emit_splash(false, LifeStatus::Stop, false));
}

#[test]
fn splash_fires_from_stop() {
    assert!(should_emit_splash(true, LifeStatus::Stop, false));
}

#[test]
fn splash_fires_from_preload_mode_background() {
    assert!(should_emit_splash(true, LifeStatus::Background, true));
}

#[test]
fn splash_suppressed_from_plain_background() {
    assert!(!should_emit_splash(true, LifeStatus::Background, false));
}

#[test]
fn splash_suppressed_from_foreground() {
    assert!(!should_emit_splash(true, LifeStatus::Foreground, false));
}

#[tokio::test]
async fn foreground_app_changed_carries_new_owner() {
    let publisher = Publisher::new();
    let mut rx = publisher.subscribe_foreground_events();
    publisher.publish_foreground_app_changed(Some("com.test.delta"));
    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["event"], "foregroundAppChanged");
    assert_eq!(payload["appId"], "com.test.delta");
}

#[tokio::test]
async fn foreground_extra_info_changed_carries_snapshot() {
    let publisher = Publisher::new();
    let mut rx = publisher.subscribe_foreground_events();
    let info = vec![json!({"appId": "com.test.delta"})];
    publisher.publish_foreground_extra_info_changed(&info);
    let payload = rx.recv().await.unwrap();
    assert_eq!(payload["event"], "foregroundExtraInfoChanged");
    assert_eq!(payload["foregroundAppInfo"][0]["appId"], "com.test.delta");
}
