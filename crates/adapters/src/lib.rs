// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! samadapters: the Runtime-Backend trait (C4) and its collaborator
//! interfaces, plus test doubles behind `test-support`.

pub mod backend;
pub mod notify;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use backend::{BackendError, NativeChannel, RuntimeBackendAdapter};
pub use notify::{LoggingNotifier, NotificationAdapter};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeBackend, FakeNotifier};
