// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job mutable state the execution limiter admits/rejects against.

use crate::limit::ThrottleConfig;
use parking_lot::Mutex;
use std::time::Instant;

/// Counters and window bookkeeping mutated only inside the limiter's
/// critical section. Kept separate from `lock` so non-waiting modes never
/// touch the async mutex.
#[derive(Debug, Default)]
pub(crate) struct RecordState {
    pub active_count: u32,
    pub last_run_at: Option<Instant>,
    pub rate_window_start: Option<Instant>,
    pub rate_window_count: u32,
}

/// One record per decorated operation, keyed by stable operation identity
/// and kept for the lifetime of the process (see `jg-registry`).
pub struct JobRecord {
    name: String,
    pub(crate) throttle: ThrottleConfig,
    pub(crate) state: Mutex<RecordState>,
    /// Serializes admission for `SINGLE_WAIT`/`THROTTLE_WAIT`; held across
    /// the body's execution, so it must be an async-aware mutex.
    pub(crate) lock: tokio::sync::Mutex<()>,
}

impl JobRecord {
    pub fn new(name: impl Into<String>, throttle: ThrottleConfig) -> Self {
        Self {
            name: name.into(),
            throttle,
            state: Mutex::new(RecordState::default()),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// In-flight invocations currently admitted (awaiting or holding the lock).
    pub fn active_count(&self) -> u32 {
        self.state.lock().active_count
    }

    /// Monotonic timestamp of the most recent successful admission.
    pub fn last_run_at(&self) -> Option<Instant> {
        self.state.lock().last_run_at
    }
}

impl std::fmt::Debug for JobRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobRecord")
            .field("name", &self.name)
            .field("active_count", &self.active_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
