// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn logging_notifier_does_not_panic() {
    let notifier = LoggingNotifier;
    notifier.create_pincode_prompt("com.test.alpha").await;
}
