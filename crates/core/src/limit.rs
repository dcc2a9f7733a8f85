// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-limit modes: the concurrency/rate policy applied to a job's body.

use std::time::Duration;

/// Concurrency/rate admission policy for a job's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionLimit {
    /// Reject immediately if a body is already in flight.
    Single,
    /// Queue (FIFO) until the in-flight body finishes, then admit.
    SingleWait,
    /// Reject silently if the last admission was within `throttle_period`.
    Throttle,
    /// Same window check as `Throttle`, but serializes contenders through a
    /// queue instead of admitting concurrently.
    ThrottleWait,
    /// Admit up to `rate_limit_max` times per fixed `throttle_period` window.
    ThrottleRateLimit,
    /// Like `Single`, but overlap is treated as a hard failure rather than a
    /// quiet skip — intended for destructive-if-duplicated jobs (backup,
    /// reboot).
    Once,
}

impl ExecutionLimit {
    /// `true` for the two modes that queue on a fairness lock instead of
    /// rejecting immediately.
    pub fn waits(self) -> bool {
        matches!(self, ExecutionLimit::SingleWait | ExecutionLimit::ThrottleWait)
    }

    /// `true` for the three throttle-family modes, which require
    /// `throttle_period` to be configured.
    pub fn is_throttle_family(self) -> bool {
        matches!(
            self,
            ExecutionLimit::Throttle | ExecutionLimit::ThrottleWait | ExecutionLimit::ThrottleRateLimit
        )
    }
}

crate::simple_display! {
    ExecutionLimit {
        Single => "single",
        SingleWait => "single_wait",
        Throttle => "throttle",
        ThrottleWait => "throttle_wait",
        ThrottleRateLimit => "throttle_rate_limit",
        Once => "once",
    }
}

/// Tunables required by the throttle-family modes.
///
/// `throttle_period` is required by all three; `rate_limit_max` is required
/// only by [`ExecutionLimit::ThrottleRateLimit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrottleConfig {
    pub throttle_period: Option<Duration>,
    pub rate_limit_max: Option<u32>,
}

#[cfg(test)]
#[path = "limit_tests.rs"]
mod tests;
