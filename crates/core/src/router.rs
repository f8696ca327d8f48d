// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The Lifecycle Router (C2): two pure functions mapping runtime facts to
//! lifecycle transitions. Holds no state beyond its mapping tables (§4.2).

use crate::types::{LifeStatus, RuntimeStatus};

/// What the orchestrator should do with a computed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    Set,
    Ignore,
}

/// Log severity the router recommends for a transition, independent of
/// whether it is applied (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLog {
    None,
    Check,
    Warn,
    Error,
}

/// A candidate lifecycle value proposed to the router. Distinct from the
/// full `LifeStatus` because `Relaunching` and `Paused` are never proposed
/// as candidates — they only ever appear as the *result* of a transition
/// (`Relaunching`) or are set directly by the orchestrator on a backend
/// pause acknowledgement (`Paused`), never routed through the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Stop,
    Preloading,
    Launching,
    Foreground,
    Background,
    Pausing,
    Closing,
}

impl Candidate {
    fn as_life_status(self) -> LifeStatus {
        match self {
            Candidate::Stop => LifeStatus::Stop,
            Candidate::Preloading => LifeStatus::Preloading,
            Candidate::Launching => LifeStatus::Launching,
            Candidate::Foreground => LifeStatus::Foreground,
            Candidate::Background => LifeStatus::Background,
            Candidate::Pausing => LifeStatus::Pausing,
            Candidate::Closing => LifeStatus::Closing,
        }
    }
}

/// The 7 row/column buckets of the policy table. `Relaunching` in `prev`
/// position buckets with `Launching`, and `Paused` buckets with `Pausing` —
/// both are behaviorally identical to their bucket-mate for routing purposes
/// (decided design choice, see DESIGN.md).
fn bucket(status: LifeStatus) -> Candidate {
    match status {
        LifeStatus::Stop => Candidate::Stop,
        LifeStatus::Preloading => Candidate::Preloading,
        LifeStatus::Launching | LifeStatus::Relaunching => Candidate::Launching,
        LifeStatus::Foreground => Candidate::Foreground,
        LifeStatus::Background => Candidate::Background,
        LifeStatus::Pausing | LifeStatus::Paused => Candidate::Pausing,
        LifeStatus::Closing => Candidate::Closing,
    }
}

/// Default mapping from a backend-reported `RuntimeStatus` to a `LifeStatus`
/// candidate (§4.2 function 1). `is_foreground` reflects whether this appId
/// currently owns the foreground per the registry.
pub fn life_status_from_runtime_status(rt: RuntimeStatus, is_foreground: bool) -> Candidate {
    match rt {
        RuntimeStatus::Stopped => Candidate::Stop,
        RuntimeStatus::Starting => Candidate::Launching,
        RuntimeStatus::Running | RuntimeStatus::Registered => {
            if is_foreground {
                Candidate::Foreground
            } else {
                Candidate::Background
            }
        }
        RuntimeStatus::Closing => Candidate::Closing,
    }
}

/// The policy table (§4.2). Pure: no state, no I/O.
pub fn route_policy(prev: LifeStatus, candidate: Candidate) -> (LifeStatus, RouteAction, RouteLog) {
    let row = bucket(prev);

    if row == candidate {
        return (candidate.as_life_status(), RouteAction::Ignore, RouteLog::None);
    }

    use Candidate::*;
    match (row, candidate) {
        // Stop row
        (Stop, Preloading) => (LifeStatus::Preloading, RouteAction::Set, RouteLog::None),
        (Stop, Launching) => (LifeStatus::Launching, RouteAction::Set, RouteLog::None),
        (Stop, Foreground) => (LifeStatus::Foreground, RouteAction::Set, RouteLog::Warn),
        (Stop, Background) => (LifeStatus::Background, RouteAction::Set, RouteLog::Warn),
        (Stop, Pausing) => (prev, RouteAction::Ignore, RouteLog::Warn),
        (Stop, Closing) => (prev, RouteAction::Ignore, RouteLog::None),

        // Preloading row
        (Preloading, Stop) => (LifeStatus::Stop, RouteAction::Set, RouteLog::None),
        (Preloading, Launching) => (LifeStatus::Relaunching, RouteAction::Set, RouteLog::None),
        (Preloading, Foreground) => (LifeStatus::Foreground, RouteAction::Set, RouteLog::Warn),
        (Preloading, Background) => (LifeStatus::Background, RouteAction::Set, RouteLog::None),
        (Preloading, Pausing) => (prev, RouteAction::Ignore, RouteLog::Warn),
        (Preloading, Closing) => (LifeStatus::Closing, RouteAction::Set, RouteLog::None),

        // Launching row
        (Launching, Stop) => (LifeStatus::Stop, RouteAction::Set, RouteLog::None),
        (Launching, Preloading) => (prev, RouteAction::Ignore, RouteLog::Warn),
        (Launching, Foreground) => (LifeStatus::Foreground, RouteAction::Set, RouteLog::None),
        (Launching, Background) => (LifeStatus::Background, RouteAction::Set, RouteLog::None),
        (Launching, Pausing) => (LifeStatus::Pausing, RouteAction::Set, RouteLog::None),
        (Launching, Closing) => (LifeStatus::Closing, RouteAction::Set, RouteLog::None),

        // Foreground row
        (Foreground, Stop) => (LifeStatus::Stop, RouteAction::Set, RouteLog::None),
        (Foreground, Preloading) => (prev, RouteAction::Ignore, RouteLog::Warn),
        (Foreground, Launching) => (LifeStatus::Relaunching, RouteAction::Set, RouteLog::None),
        (Foreground, Background) => (LifeStatus::Background, RouteAction::Set, RouteLog::None),
        (Foreground, Pausing) => (LifeStatus::Pausing, RouteAction::Set, RouteLog::None),
        (Foreground, Closing) => (LifeStatus::Closing, RouteAction::Set, RouteLog::None),

        // Background row
        (Background, Stop) => (LifeStatus::Stop, RouteAction::Set, RouteLog::None),
        (Background, Preloading) => (LifeStatus::Preloading, RouteAction::Set, RouteLog::None),
        (Background, Launching) => (LifeStatus::Relaunching, RouteAction::Set, RouteLog::None),
        (Background, Foreground) => (LifeStatus::Foreground, RouteAction::Set, RouteLog::None),
        (Background, Pausing) => (LifeStatus::Pausing, RouteAction::Set, RouteLog::None),
        (Background, Closing) => (LifeStatus::Closing, RouteAction::Set, RouteLog::None),

        // Pausing row
        (Pausing, Stop) => (LifeStatus::Stop, RouteAction::Set, RouteLog::None),
        (Pausing, Preloading) => (prev, RouteAction::Ignore, RouteLog::Warn),
        (Pausing, Launching) => (LifeStatus::Relaunching, RouteAction::Set, RouteLog::None),
        (Pausing, Foreground) => (LifeStatus::Foreground, RouteAction::Set, RouteLog::Warn),
        (Pausing, Background) => (LifeStatus::Background, RouteAction::Set, RouteLog::None),
        (Pausing, Closing) => (LifeStatus::Closing, RouteAction::Set, RouteLog::None),

        // Closing row: every outbound transition except Stop is impossible
        (Closing, Stop) => (LifeStatus::Stop, RouteAction::Set, RouteLog::None),
        (Closing, _) => (prev, RouteAction::Ignore, RouteLog::Error),

        // Unreachable: every (row, candidate) pair is enumerated above or
        // caught by the `row == candidate` short-circuit.
        _ => (prev, RouteAction::Ignore, RouteLog::Error),
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
