// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    single_wait = { ExecutionLimit::SingleWait },
    throttle_wait = { ExecutionLimit::ThrottleWait },
)]
fn waiting_modes_are_flagged(limit: ExecutionLimit) {
    assert!(limit.waits());
}

#[yare::parameterized(
    single = { ExecutionLimit::Single },
    throttle = { ExecutionLimit::Throttle },
    rate_limit = { ExecutionLimit::ThrottleRateLimit },
    once = { ExecutionLimit::Once },
)]
fn non_waiting_modes_are_not_flagged(limit: ExecutionLimit) {
    assert!(!limit.waits());
}

#[yare::parameterized(
    throttle = { ExecutionLimit::Throttle },
    throttle_wait = { ExecutionLimit::ThrottleWait },
    rate_limit = { ExecutionLimit::ThrottleRateLimit },
)]
fn throttle_family_is_flagged(limit: ExecutionLimit) {
    assert!(limit.is_throttle_family());
}

#[yare::parameterized(
    single = { ExecutionLimit::Single },
    single_wait = { ExecutionLimit::SingleWait },
    once = { ExecutionLimit::Once },
)]
fn non_throttle_modes_are_not_in_throttle_family(limit: ExecutionLimit) {
    assert!(!limit.is_throttle_family());
}

#[test]
fn display_matches_snake_case_tag() {
    assert_eq!(ExecutionLimit::ThrottleRateLimit.to_string(), "throttle_rate_limit");
}
