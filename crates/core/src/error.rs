// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy (§7). Each module boundary owns its own `thiserror` enum;
//! `LifecycleError` wraps them (rather than flattening into one crate-wide
//! type) so the orchestrator's public entry points can match on provenance
//! while the external `{returnValue, errorCode, errorText}` reply mapping
//! stays centralized.

use crate::app_item::LaunchItemError;
use thiserror::Error;

/// Registry-boundary errors (C1).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("not exist")]
    NotFound,
}

/// Orchestrator-boundary errors (C7) not already covered by a more specific
/// module error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrchestratorError {
    #[error("invalid_status")]
    InvalidRuntimeStatus,
    #[error("trying to register via unmatched method with nativeLifeCycleInterfaceVersion")]
    UnmatchedNativeInterfaceVersion,
    #[error("no valid life handler")]
    NoLifeHandler,
    #[error("app is not running")]
    NotRunning,
    #[error("stopped launching")]
    Cancelled,
}

/// Top-level error returned by the orchestrator's public entry points.
/// Wraps the per-module error so callers can inspect provenance; `code()`
/// and `message()` project it onto the external reply shape (§6, §7).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    LaunchItem(#[from] LaunchItemError),
    #[error(transparent)]
    Orchestrator(#[from] OrchestratorError),
}

impl LifecycleError {
    /// Numeric `errorCode` for the external reply, when one is defined.
    /// Free-text-only errors (keep-alive violations, invalid interface
    /// version, "invalid_status") carry no numeric code (§6).
    pub fn code(&self) -> Option<i32> {
        match self {
            LifecycleError::LaunchItem(LaunchItemError::MissingAppId) => {
                Some(crate::app_item::APP_LAUNCH_ERR_NOT_EXIST)
            }
            LifecycleError::Orchestrator(OrchestratorError::Cancelled) => {
                Some(crate::app_item::APP_LAUNCH_ERR_GENERAL)
            }
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
