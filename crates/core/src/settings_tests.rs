// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn empty_toml_falls_back_to_defaults() {
    let settings = TomlSettings::from_toml_str("").unwrap();
    assert!(!settings.is_keep_alive_app("com.test.alpha"));
    assert!(settings.fullscreen_window_types().contains("_WEBOS_WINDOW_TYPE_CARD"));
    assert_eq!(settings.last_loading_app_timeout(), Duration::from_secs(3));
}

#[test]
fn keep_alive_apps_parsed_from_toml() {
    let toml = r#"
        keep_alive_apps = ["com.test.beta"]
    "#;
    let settings = TomlSettings::from_toml_str(toml).unwrap();
    assert!(settings.is_keep_alive_app("com.test.beta"));
    assert!(!settings.is_keep_alive_app("com.test.alpha"));
}

#[test]
fn timeout_overrides_parsed_from_toml() {
    let toml = r#"
        last_loading_app_timeout_ms = 5000
        launch_expired_timeout_ms = 20000
    "#;
    let settings = TomlSettings::from_toml_str(toml).unwrap();
    assert_eq!(settings.last_loading_app_timeout(), Duration::from_millis(5000));
    assert_eq!(settings.launch_expired_timeout(), Duration::from_millis(20000));
    // untouched key keeps its default
    assert_eq!(settings.loading_expired_timeout(), Duration::from_secs(10));
}

#[test]
fn keep_alive_exemption_scoped_to_sam_internal_and_service_ids() {
    assert!(is_keep_alive_exempt(SAM_INTERNAL_ID, None));
    assert!(is_keep_alive_exempt(MEMORY_MANAGER_ID, None));
    assert!(is_keep_alive_exempt(APP_INSTALL_SERVICE_ID, None));
    assert!(!is_keep_alive_exempt("user", None));
}

#[test]
fn keep_alive_exemption_recent_reason_scoped_to_window_ext_only() {
    assert!(is_keep_alive_exempt(SURFACE_MANAGER_WINDOW_EXT_ID, Some("recent")));
    assert!(!is_keep_alive_exempt(SURFACE_MANAGER_WINDOW_EXT_ID, Some("other")));
    assert!(!is_keep_alive_exempt("some.other.caller", Some("recent")));
}

#[test]
fn close_reason_prefers_explicit_reason_over_caller_id() {
    let settings = TomlSettings::default();
    assert_eq!(settings.get_close_reason("user", Some("tapped-close")), Some("tapped-close".into()));
    assert_eq!(settings.get_close_reason("user", None), Some("user".into()));
}
