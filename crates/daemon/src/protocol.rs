// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External request/reply wire shapes (§6). `LaunchRequest` is simply
//! `samcore::LaunchTask`; the others are small enough not to warrant a
//! core-crate home of their own.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use samcore::LaunchTask as LaunchRequest;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloseRequest {
    pub id: String,
    #[serde(default)]
    pub pid: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(rename = "letAppHandle", default)]
    pub let_app_handle: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PauseRequest {
    pub id: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloseAllRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterAppRequest {
    pub id: String,
}

/// The uniform `{returnValue, errorCode?, errorText?, appId?}` reply shape
/// used by every public operation (§6).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Reply {
    #[serde(rename = "returnValue")]
    pub return_value: bool,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(rename = "errorText", skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
    #[serde(rename = "appId", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl Reply {
    pub fn ok(app_id: impl Into<String>) -> Self {
        Self { return_value: true, error_code: None, error_text: None, app_id: Some(app_id.into()) }
    }

    pub fn err(error_code: Option<i32>, error_text: impl Into<String>) -> Self {
        Self { return_value: false, error_code, error_text: Some(error_text.into()), app_id: None }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
