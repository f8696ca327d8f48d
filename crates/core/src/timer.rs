// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timer identifier type for the last-loading-app guard timer.
//!
//! Only one such timer is ever active at a time (§5 of the design): adding a
//! timer for a new guarded app cancels and rearms any existing one
//! atomically. The id is scoped to the appId it guards so a fired timer can
//! be matched back against the orchestrator's live guard without a side
//! table.

crate::define_id! {
    /// Identifies one scheduling of the last-loading-app guard timer.
    pub struct TimerId("tmr-");
}

impl TimerId {
    /// A timer id scoped to the app currently guarded by it.
    pub fn for_app(app_id: &str) -> Self {
        Self::from_string(format!("{}{app_id}", Self::PREFIX))
    }

    /// The appId this timer id was minted for, if it matches the scheme.
    pub fn app_id(&self) -> Option<&str> {
        self.as_str().strip_prefix(Self::PREFIX)
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
