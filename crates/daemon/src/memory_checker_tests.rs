// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use samcore::LaunchTask;

struct FakeManager {
    deny: Option<&'static str>,
}

#[async_trait]
impl MemoryManager for FakeManager {
    async fn check(&self, _app_id: &str) -> Result<(), String> {
        match self.deny {
            Some(reason) => Err(reason.to_string()),
            None => Ok(()),
        }
    }
}

fn item(app_id: &str) -> LaunchItem {
    LaunchItem::create(LaunchTask { id: Some(app_id.to_string()), ..Default::default() }, 0).unwrap()
}

#[tokio::test]
async fn allowed_launch_passes_through_unchanged() {
    let checker = MemoryChecker::new(FakeManager { deny: None });
    let result = checker.run(item("com.test.alpha")).await;
    assert!(!result.has_error());
}

#[tokio::test]
async fn denied_launch_carries_reason_as_error() {
    let checker = MemoryChecker::new(FakeManager { deny: Some("low memory") });
    let result = checker.run(item("com.test.alpha")).await;
    assert!(result.has_error());
    assert_eq!(result.error_code, Some(APP_LAUNCH_ERR_GENERAL));
    assert_eq!(result.error_text.as_deref(), Some("low memory"));
}

#[tokio::test]
async fn in_flight_count_tracks_and_clears() {
    let checker = MemoryChecker::new(FakeManager { deny: None });
    assert_eq!(checker.in_flight_count(), 0);
    checker.run(item("com.test.alpha")).await;
    assert_eq!(checker.in_flight_count(), 0);
}
