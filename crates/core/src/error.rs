// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for the job execution guard.

use crate::condition::JobCondition;
use std::fmt;

/// Marker for the "domain error hierarchy" a guarded operation's own
/// `Result::Err` belongs to. Descendants pass through the guard unchanged.
pub trait SupervisorError: std::error::Error + Send + Sync + 'static {}

impl<T> SupervisorError for T where T: std::error::Error + Send + Sync + 'static {}

/// An unexpected failure inside a job body (anything other than the body's
/// own declared domain error). In this crate's static rendering, "unexpected"
/// means the body panicked rather than returning `Err`.
#[derive(Debug, thiserror::Error)]
#[error("job `{job}` failed unexpectedly: {reason}")]
pub struct JobException {
    pub job: String,
    pub reason: String,
}

/// `SINGLE`/`ONCE` rejected admission because a body was already in flight.
#[derive(Debug, Clone, thiserror::Error)]
#[error("job `{job}` is already running")]
pub struct JobConditionBusy {
    pub job: String,
}

/// `THROTTLE_RATE_LIMIT` rejected admission because the current window is exhausted.
#[derive(Debug, Clone, thiserror::Error)]
#[error("job `{job}` exceeded its rate limit ({max} per window)")]
pub struct JobConditionRateLimit {
    pub job: String,
    pub max: u32,
}

/// A pre-condition failed and the job was configured with `on_condition`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("job `{job}` failed condition `{condition}`")]
pub struct JobConditionFailed {
    pub job: String,
    pub condition: JobCondition,
}

/// Which gate rejected admission, passed to an `on_condition` mapping
/// function so it can build a precise domain error.
#[derive(Debug, Clone, Copy)]
pub enum ConditionFailure {
    /// A pre-condition in the job's `conditions` list failed.
    Precondition(JobCondition),
    /// `SINGLE`/`ONCE` rejected because a body was already in flight.
    Busy,
    /// `THROTTLE_RATE_LIMIT` rejected because the window is exhausted.
    RateLimited { max: u32 },
}

impl fmt::Display for ConditionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionFailure::Precondition(condition) => write!(f, "condition `{condition}` failed"),
            ConditionFailure::Busy => write!(f, "already running"),
            ConditionFailure::RateLimited { max } => write!(f, "rate limit of {max} exceeded"),
        }
    }
}

impl ConditionFailure {
    /// Build the crate's own ready-made domain error for this failure, for
    /// callers that don't need a bespoke `on_condition` error type.
    pub fn into_guard_condition(self, job: impl Into<String>) -> GuardCondition {
        let job = job.into();
        match self {
            ConditionFailure::Precondition(condition) => {
                GuardCondition::Failed(JobConditionFailed { job, condition })
            }
            ConditionFailure::Busy => GuardCondition::Busy(JobConditionBusy { job }),
            ConditionFailure::RateLimited { max } => {
                GuardCondition::RateLimit(JobConditionRateLimit { job, max })
            }
        }
    }
}

/// A ready-made domain error covering every gate rejection kind, for callers
/// who don't need to define their own `on_condition` error type.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GuardCondition {
    #[error(transparent)]
    Failed(#[from] JobConditionFailed),
    #[error(transparent)]
    Busy(#[from] JobConditionBusy),
    #[error(transparent)]
    RateLimit(#[from] JobConditionRateLimit),
}

/// Envelope returned by a guarded operation.
///
/// `Domain(E)` covers both a body's own pass-through error and an
/// `on_condition`-mapped gate rejection (both are values of the caller's
/// declared domain error type `E`). `Unexpected` covers the "any other
/// raised error" case (a caught panic).
#[derive(Debug, thiserror::Error)]
pub enum GuardError<E: SupervisorError> {
    #[error(transparent)]
    Domain(E),
    #[error(transparent)]
    Unexpected(#[from] JobException),
}

impl<E: SupervisorError> GuardError<E> {
    pub fn domain(error: E) -> Self {
        GuardError::Domain(error)
    }

    /// The domain error, if this is a `Domain` variant.
    pub fn as_domain(&self) -> Option<&E> {
        match self {
            GuardError::Domain(error) => Some(error),
            GuardError::Unexpected(_) => None,
        }
    }
}

/// The zero/null/false value a gated operation returns when a gate silently
/// rejects admission instead of raising an error.
pub trait Neutral {
    fn neutral() -> Self;
}

impl Neutral for bool {
    fn neutral() -> Self {
        false
    }
}

impl Neutral for () {
    fn neutral() -> Self {}
}

impl<T> Neutral for Option<T> {
    fn neutral() -> Self {
        None
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
