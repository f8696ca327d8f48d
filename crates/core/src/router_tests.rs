// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    stop_stop = { LifeStatus::Stop, Candidate::Stop, LifeStatus::Stop, RouteAction::Ignore, RouteLog::None },
    stop_preloading = { LifeStatus::Stop, Candidate::Preloading, LifeStatus::Preloading, RouteAction::Set, RouteLog::None },
    stop_launching = { LifeStatus::Stop, Candidate::Launching, LifeStatus::Launching, RouteAction::Set, RouteLog::None },
    stop_foreground = { LifeStatus::Stop, Candidate::Foreground, LifeStatus::Foreground, RouteAction::Set, RouteLog::Warn },
    stop_background = { LifeStatus::Stop, Candidate::Background, LifeStatus::Background, RouteAction::Set, RouteLog::Warn },
    stop_pausing = { LifeStatus::Stop, Candidate::Pausing, LifeStatus::Stop, RouteAction::Ignore, RouteLog::Warn },
    stop_closing = { LifeStatus::Stop, Candidate::Closing, LifeStatus::Stop, RouteAction::Ignore, RouteLog::None },

    preloading_stop = { LifeStatus::Preloading, Candidate::Stop, LifeStatus::Stop, RouteAction::Set, RouteLog::None },
    preloading_preloading = { LifeStatus::Preloading, Candidate::Preloading, LifeStatus::Preloading, RouteAction::Ignore, RouteLog::None },
    preloading_launching = { LifeStatus::Preloading, Candidate::Launching, LifeStatus::Relaunching, RouteAction::Set, RouteLog::None },
    preloading_foreground = { LifeStatus::Preloading, Candidate::Foreground, LifeStatus::Foreground, RouteAction::Set, RouteLog::Warn },
    preloading_background = { LifeStatus::Preloading, Candidate::Background, LifeStatus::Background, RouteAction::Set, RouteLog::None },
    preloading_pausing = { LifeStatus::Preloading, Candidate::Pausing, LifeStatus::Preloading, RouteAction::Ignore, RouteLog::Warn },
    preloading_closing = { LifeStatus::Preloading, Candidate::Closing, LifeStatus::Closing, RouteAction::Set, RouteLog::None },

    launching_stop = { LifeStatus::Launching, Candidate::Stop, LifeStatus::Stop, RouteAction::Set, RouteLog::None },
    launching_preloading = { LifeStatus::Launching, Candidate::Preloading, LifeStatus::Launching, RouteAction::Ignore, RouteLog::Warn },
    launching_launching = { LifeStatus::Launching, Candidate::Launching, LifeStatus::Launching, RouteAction::Ignore, RouteLog::None },
    launching_foreground = { LifeStatus::Launching, Candidate::Foreground, LifeStatus::Foreground, RouteAction::Set, RouteLog::None },
    launching_background = { LifeStatus::Launching, Candidate::Background, LifeStatus::Background, RouteAction::Set, RouteLog::None },
    launching_pausing = { LifeStatus::Launching, Candidate::Pausing, LifeStatus::Pausing, RouteAction::Set, RouteLog::None },
    launching_closing = { LifeStatus::Launching, Candidate::Closing, LifeStatus::Closing, RouteAction::Set, RouteLog::None },

    foreground_stop = { LifeStatus::Foreground, Candidate::Stop, LifeStatus::Stop, RouteAction::Set, RouteLog::None },
    foreground_preloading = { LifeStatus::Foreground, Candidate::Preloading, LifeStatus::Foreground, RouteAction::Ignore, RouteLog::Warn },
    foreground_launching = { LifeStatus::Foreground, Candidate::Launching, LifeStatus::Relaunching, RouteAction::Set, RouteLog::None },
    foreground_foreground = { LifeStatus::Foreground, Candidate::Foreground, LifeStatus::Foreground, RouteAction::Ignore, RouteLog::None },
    foreground_background = { LifeStatus::Foreground, Candidate::Background, LifeStatus::Background, RouteAction::Set, RouteLog::None },
    foreground_pausing = { LifeStatus::Foreground, Candidate::Pausing, LifeStatus::Pausing, RouteAction::Set, RouteLog::None },
    foreground_closing = { LifeStatus::Foreground, Candidate::Closing, LifeStatus::Closing, RouteAction::Set, RouteLog::None },

    background_stop = { LifeStatus::Background, Candidate::Stop, LifeStatus::Stop, RouteAction::Set, RouteLog::None },
    background_preloading = { LifeStatus::Background, Candidate::Preloading, LifeStatus::Preloading, RouteAction::Set, RouteLog::None },
    background_launching = { LifeStatus::Background, Candidate::Launching, LifeStatus::Relaunching, RouteAction::Set, RouteLog::None },
    background_foreground = { LifeStatus::Background, Candidate::Foreground, LifeStatus::Foreground, RouteAction::Set, RouteLog::None },
    background_background = { LifeStatus::Background, Candidate::Background, LifeStatus::Background, RouteAction::Ignore, RouteLog::None },
    background_pausing = { LifeStatus::Background, Candidate::Pausing, LifeStatus::Pausing, RouteAction::Set, RouteLog::None },
    background_closing = { LifeStatus::Background, Candidate::Closing, LifeStatus::Closing, RouteAction::Set, RouteLog::None },

    pausing_stop = { LifeStatus::Pausing, Candidate::Stop, LifeStatus::Stop, RouteAction::Set, RouteLog::None },
    pausing_preloading = { LifeStatus::Pausing, Candidate::Preloading, LifeStatus::Pausing, RouteAction::Ignore, RouteLog::Warn },
    pausing_launching = { LifeStatus::Pausing, Candidate::Launching, LifeStatus::Relaunching, RouteAction::Set, RouteLog::None },
    pausing_foreground = { LifeStatus::Pausing, Candidate::Foreground, LifeStatus::Foreground, RouteAction::Set, RouteLog::Warn },
    pausing_background = { LifeStatus::Pausing, Candidate::Background, LifeStatus::Background, RouteAction::Set, RouteLog::None },
    pausing_pausing = { LifeStatus::Pausing, Candidate::Pausing, LifeStatus::Pausing, RouteAction::Ignore, RouteLog::None },
    pausing_closing = { LifeStatus::Pausing, Candidate::Closing, LifeStatus::Closing, RouteAction::Set, RouteLog::None },

    closing_stop = { LifeStatus::Closing, Candidate::Stop, LifeStatus::Stop, RouteAction::Set, RouteLog::None },
    closing_preloading = { LifeStatus::Closing, Candidate::Preloading, LifeStatus::Closing, RouteAction::Ignore, RouteLog::Error },
    closing_launching = { LifeStatus::Closing, Candidate::Launching, LifeStatus::Closing, RouteAction::Ignore, RouteLog::Error },
    closing_foreground = { LifeStatus::Closing, Candidate::Foreground, LifeStatus::Closing, RouteAction::Ignore, RouteLog::Error },
    closing_background = { LifeStatus::Closing, Candidate::Background, LifeStatus::Closing, RouteAction::Ignore, RouteLog::Error },
    closing_pausing = { LifeStatus::Closing, Candidate::Pausing, LifeStatus::Closing, RouteAction::Ignore, RouteLog::Error },
    closing_closing = { LifeStatus::Closing, Candidate::Closing, LifeStatus::Closing, RouteAction::Ignore, RouteLog::None },
)]
fn policy_table_cell(
    prev: LifeStatus,
    candidate: Candidate,
    expected_next: LifeStatus,
    expected_action: RouteAction,
    expected_log: RouteLog,
) {
    let (next, action, log) = route_policy(prev, candidate);
    assert_eq!(next, expected_next);
    assert_eq!(action, expected_action);
    assert_eq!(log, expected_log);
}

#[test]
fn relaunching_prev_buckets_with_launching() {
    let (next, action, _) = route_policy(LifeStatus::Relaunching, Candidate::Foreground);
    assert_eq!(next, LifeStatus::Foreground);
    assert_eq!(action, RouteAction::Set);
}

#[test]
fn paused_prev_buckets_with_pausing() {
    let (next, action, log) = route_policy(LifeStatus::Paused, Candidate::Preloading);
    assert_eq!(next, LifeStatus::Paused);
    assert_eq!(action, RouteAction::Ignore);
    assert_eq!(log, RouteLog::Warn);
}

#[test]
fn life_status_from_runtime_status_mapping() {
    assert_eq!(life_status_from_runtime_status(RuntimeStatus::Stopped, false), Candidate::Stop);
    assert_eq!(life_status_from_runtime_status(RuntimeStatus::Starting, false), Candidate::Launching);
    assert_eq!(
        life_status_from_runtime_status(RuntimeStatus::Running, true),
        Candidate::Foreground
    );
    assert_eq!(
        life_status_from_runtime_status(RuntimeStatus::Running, false),
        Candidate::Background
    );
    assert_eq!(
        life_status_from_runtime_status(RuntimeStatus::Registered, true),
        Candidate::Foreground
    );
    assert_eq!(life_status_from_runtime_status(RuntimeStatus::Closing, false), Candidate::Closing);
}
