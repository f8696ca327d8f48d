// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::app_item::Uid;

#[test]
fn running_app_added_serializes_with_type_tag() {
    let event = Event::RunningAppAdded {
        app_id: "com.test.alpha".into(),
        pid: Some("123".into()),
        web_process_id: None,
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "runningAppAdded");
    assert_eq!(json["app_id"], "com.test.alpha");
    assert_eq!(json["pid"], "123");
}

#[test]
fn launching_done_round_trips() {
    let event = Event::LaunchingDone { uid: Uid::new() };
    let json = serde_json::to_string(&event).unwrap();
    let parsed: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(event, parsed);
}

#[test]
fn display_matches_event_name() {
    let event = Event::PrelaunchingDone { uid: Uid::new() };
    assert_eq!(event.to_string(), "prelaunchingDone");
}
