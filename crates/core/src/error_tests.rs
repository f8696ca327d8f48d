// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::app_item::{APP_LAUNCH_ERR_GENERAL, APP_LAUNCH_ERR_NOT_EXIST};

#[test]
fn missing_app_id_maps_to_not_exist_code() {
    let err: LifecycleError = LaunchItemError::MissingAppId.into();
    assert_eq!(err.code(), Some(APP_LAUNCH_ERR_NOT_EXIST));
    assert_eq!(err.message(), "not exist");
}

#[test]
fn cancelled_maps_to_general_launch_error_code() {
    let err: LifecycleError = OrchestratorError::Cancelled.into();
    assert_eq!(err.code(), Some(APP_LAUNCH_ERR_GENERAL));
    assert_eq!(err.message(), "stopped launching");
}

#[test]
fn free_text_errors_carry_no_numeric_code() {
    let err: LifecycleError = OrchestratorError::UnmatchedNativeInterfaceVersion.into();
    assert_eq!(err.code(), None);
    assert_eq!(
        err.message(),
        "trying to register via unmatched method with nativeLifeCycleInterfaceVersion"
    );
}

#[test]
fn not_running_message() {
    let err: LifecycleError = OrchestratorError::NotRunning.into();
    assert_eq!(err.message(), "app is not running");
}

#[test]
fn invalid_status_message() {
    let err: LifecycleError = OrchestratorError::InvalidRuntimeStatus.into();
    assert_eq!(err.message(), "invalid_status");
}

#[test]
fn registry_not_found_display() {
    assert_eq!(RegistryError::NotFound.to_string(), "not exist");
}
