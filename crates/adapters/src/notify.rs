// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fire-and-forget user notifications (pincode prompts on a locked-down
//! app launch). Out-of-band from the lifecycle pipeline: a notifier never
//! blocks or fails a launch, it only informs the user.

use async_trait::async_trait;

#[async_trait]
pub trait NotificationAdapter: Send + Sync {
    /// Surface a pincode prompt for `app_id`. No return value by design —
    /// the orchestrator never waits on or retries this.
    async fn create_pincode_prompt(&self, app_id: &str);
}

/// Default notifier: logs at `info` instead of drawing UI. Adequate for a
/// headless daemon build; a UI-backed implementation lives outside this
/// crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl NotificationAdapter for LoggingNotifier {
    async fn create_pincode_prompt(&self, app_id: &str) {
        tracing::info!(app_id, "pincode prompt requested");
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
