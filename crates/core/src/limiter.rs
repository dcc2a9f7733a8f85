// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution limiter: admits or rejects a body invocation against a
//! [`JobRecord`]'s mutable state, according to an [`ExecutionLimit`] mode.
//!
//! Lives alongside [`JobRecord`] rather than in a separate crate because the
//! admission check and counter update must be atomic with respect to other
//! callers, which requires direct access to the record's private state that
//! crate boundaries would otherwise have to re-expose through a public API
//! anyway. `jg-guard` composes this with the condition evaluator; see
//! `DESIGN.md`.

use crate::clock::Clock;
use crate::limit::ExecutionLimit;
use crate::record::JobRecord;

/// Outcome of attempting to admit a body invocation.
pub enum LimitOutcome<'a> {
    /// Admitted — the returned guard must be held for the body's duration
    /// and dropped on every exit path (success, failure, or cancellation).
    Admitted(AdmissionGuard<'a>),
    /// `SINGLE`/`ONCE` rejected: a body is already in flight.
    Busy,
    /// `THROTTLE`/`THROTTLE_WAIT` rejected: within the throttle period. Never
    /// surfaced as an error — always the neutral result.
    Throttled,
    /// `THROTTLE_RATE_LIMIT` rejected: the current window is exhausted.
    RateLimited { max: u32 },
}

/// RAII admission: decrements `active_count` and releases the serialization
/// lock (if held) on every exit path, including when the enclosing future is
/// dropped due to cancellation.
pub struct AdmissionGuard<'a> {
    record: &'a JobRecord,
    _lock: Option<tokio::sync::MutexGuard<'a, ()>>,
}

impl Drop for AdmissionGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.record.state.lock();
        debug_assert!(state.active_count > 0);
        state.active_count = state.active_count.saturating_sub(1);
    }
}

/// Attempt to admit a call to `record`'s body under `limit`.
///
/// Non-waiting modes (`Single`, `Throttle`, `ThrottleRateLimit`, `Once`)
/// never suspend: the whole check-and-update runs inside a single
/// non-async critical section. Waiting modes (`SingleWait`,
/// `ThrottleWait`) may suspend while queuing for `record`'s lock, and honor
/// cancellation: a caller dropped while queued never touches `active_count`.
pub async fn admit<'a>(record: &'a JobRecord, limit: ExecutionLimit, clock: &impl Clock) -> LimitOutcome<'a> {
    match limit {
        ExecutionLimit::Single | ExecutionLimit::Once => admit_single(record),
        ExecutionLimit::SingleWait => admit_single_wait(record).await,
        ExecutionLimit::Throttle => admit_throttle(record, clock),
        ExecutionLimit::ThrottleWait => admit_throttle_wait(record, clock).await,
        ExecutionLimit::ThrottleRateLimit => admit_rate_limit(record, clock),
    }
}

fn admit_single(record: &JobRecord) -> LimitOutcome<'_> {
    let mut state = record.state.lock();
    if state.active_count > 0 {
        return LimitOutcome::Busy;
    }
    state.active_count += 1;
    drop(state);
    LimitOutcome::Admitted(AdmissionGuard { record, _lock: None })
}

async fn admit_single_wait(record: &JobRecord) -> LimitOutcome<'_> {
    // FIFO queue: tokio::sync::Mutex grants the lock to waiters in arrival
    // order. A caller dropped while awaiting this never reaches the line
    // below, so active_count is untouched.
    let lock = record.lock.lock().await;
    let mut state = record.state.lock();
    state.active_count += 1;
    drop(state);
    LimitOutcome::Admitted(AdmissionGuard { record, _lock: Some(lock) })
}

fn admit_throttle(record: &JobRecord, clock: &impl Clock) -> LimitOutcome<'_> {
    let period = match record.throttle.throttle_period {
        Some(period) => period,
        None => {
            // Misconfiguration: treat as always-admit rather than panic.
            tracing::warn!(job = record.name(), "throttle job has no throttle_period configured");
            Default::default()
        }
    };
    let mut state = record.state.lock();
    let now = clock.now();
    if let Some(last) = state.last_run_at {
        if now.duration_since(last) < period {
            return LimitOutcome::Throttled;
        }
    }
    state.last_run_at = Some(now);
    state.active_count += 1;
    drop(state);
    LimitOutcome::Admitted(AdmissionGuard { record, _lock: None })
}

async fn admit_throttle_wait<'a>(record: &'a JobRecord, clock: &impl Clock) -> LimitOutcome<'a> {
    // Every caller funnels through the lock so that, unlike plain THROTTLE,
    // contenders queue instead of racing the window check independently.
    let lock = record.lock.lock().await;
    let period = record.throttle.throttle_period.unwrap_or_default();
    let now = clock.now();
    let mut state = record.state.lock();
    if let Some(last) = state.last_run_at {
        if now.duration_since(last) < period {
            drop(state);
            drop(lock);
            return LimitOutcome::Throttled;
        }
    }
    state.last_run_at = Some(now);
    state.active_count += 1;
    drop(state);
    LimitOutcome::Admitted(AdmissionGuard { record, _lock: Some(lock) })
}

fn admit_rate_limit<'a>(record: &'a JobRecord, clock: &impl Clock) -> LimitOutcome<'a> {
    let period = record.throttle.throttle_period.unwrap_or_default();
    let max = record.throttle.rate_limit_max.unwrap_or(u32::MAX);
    let now = clock.now();
    let mut state = record.state.lock();

    let window_expired =
        state.rate_window_start.map(|start| now.duration_since(start) >= period).unwrap_or(true);
    if window_expired {
        state.rate_window_start = Some(now);
        state.rate_window_count = 0;
    }

    if state.rate_window_count >= max {
        return LimitOutcome::RateLimited { max };
    }
    state.rate_window_count += 1;
    state.active_count += 1;
    drop(state);
    LimitOutcome::Admitted(AdmissionGuard { record, _lock: None })
}

#[cfg(test)]
#[path = "limiter_tests.rs"]
mod tests;
