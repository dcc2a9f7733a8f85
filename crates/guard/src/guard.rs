// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job guard: binds the condition evaluator and execution limiter around a
//! caller-supplied body, producing the single `Result<R, GuardError<E>>`
//! surface every guarded operation returns through.

use crate::evaluator::{self, Admission};
use futures_util::future::FutureExt;
use jg_core::{
    Clock, ConditionFailure, ExecutionLimit, GuardError, IgnoreSet, JobCondition, JobException,
    LimitOutcome, Neutral, SupervisorError, SystemStateProvider, ThrottleConfig,
};
use jg_registry::JobRegistry;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

type OnCondition<E> = Box<dyn Fn(ConditionFailure) -> E + Send + Sync>;

/// Builds a [`JobGuard`] for one named operation.
pub struct JobGuardBuilder<E: SupervisorError> {
    name: String,
    conditions: Vec<JobCondition>,
    limit: ExecutionLimit,
    throttle_period: Option<Duration>,
    rate_limit_max: Option<u32>,
    on_condition: Option<OnCondition<E>>,
}

impl<E: SupervisorError> JobGuardBuilder<E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            limit: ExecutionLimit::Single,
            throttle_period: None,
            rate_limit_max: None,
            on_condition: None,
        }
    }

    jg_core::setters! {
        set { limit: ExecutionLimit, }
        option { throttle_period: Duration, rate_limit_max: u32, }
    }

    /// Append a pre-condition this job must satisfy before its body runs.
    /// Hand-written: pushes onto a `Vec`, not a direct-assignment setter.
    pub fn condition(mut self, condition: JobCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Hand-written: extends a `Vec`, not a direct-assignment setter.
    pub fn conditions(mut self, conditions: impl IntoIterator<Item = JobCondition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    /// Map a gate rejection to this job's own domain error type, rather than
    /// silently returning a neutral result.
    /// Hand-written: boxes a generic closure into a trait object, not an
    /// `impl Into<T>` conversion.
    pub fn on_condition(mut self, map: impl Fn(ConditionFailure) -> E + Send + Sync + 'static) -> Self {
        self.on_condition = Some(Box::new(map));
        self
    }

    /// Materialize this job's record in `registry` and produce the guard.
    pub fn build(self, registry: &JobRegistry) -> JobGuard<E> {
        let throttle = ThrottleConfig { throttle_period: self.throttle_period, rate_limit_max: self.rate_limit_max };
        let record = registry.get_or_create(&self.name, throttle);
        JobGuard {
            name: self.name,
            conditions: self.conditions,
            limit: self.limit,
            record,
            on_condition: self.on_condition,
        }
    }
}

/// A registered, gated operation. Call [`JobGuard::run`] each time the
/// operation is invoked; the guard itself is cheap to clone-and-share since
/// its record is reference-counted.
pub struct JobGuard<E: SupervisorError> {
    name: String,
    conditions: Vec<JobCondition>,
    limit: ExecutionLimit,
    record: Arc<jg_core::JobRecord>,
    on_condition: Option<OnCondition<E>>,
}

impl<E: SupervisorError> JobGuard<E> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate pre-conditions, apply the concurrency/rate gate, then run
    /// `body`. `body` is a zero-argument closure so callers can capture
    /// whatever arguments their own operation needs; its future runs only
    /// once admission has been granted, and a panic inside it is caught and
    /// reported as [`GuardError::Unexpected`] rather than unwinding past the
    /// guard.
    pub async fn run<R, Fut>(
        &self,
        provider: &impl SystemStateProvider,
        ignore: &IgnoreSet,
        clock: &impl Clock,
        body: impl FnOnce() -> Fut,
    ) -> Result<R, GuardError<E>>
    where
        R: Neutral,
        Fut: Future<Output = Result<R, E>>,
    {
        let snapshot = provider.snapshot();
        if let Admission::Reject(condition) = evaluator::evaluate(&self.conditions, &snapshot, ignore) {
            return self.reject(ConditionFailure::Precondition(condition));
        }

        let admission = jg_core::admit(&self.record, self.limit, clock).await;
        let _permit = match admission {
            LimitOutcome::Admitted(permit) => permit,
            LimitOutcome::Busy => return self.reject(ConditionFailure::Busy),
            LimitOutcome::Throttled => {
                tracing::debug!(job = %self.name, "throttled; skipping this invocation");
                return Ok(R::neutral());
            }
            LimitOutcome::RateLimited { max } => return self.reject(ConditionFailure::RateLimited { max }),
        };

        match AssertUnwindSafe(body()).catch_unwind().await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(domain_error)) => Err(GuardError::Domain(domain_error)),
            Err(payload) => Err(GuardError::Unexpected(JobException {
                job: self.name.clone(),
                reason: describe_panic(payload),
            })),
        }
    }

    fn reject<R: Neutral>(&self, failure: ConditionFailure) -> Result<R, GuardError<E>> {
        match &self.on_condition {
            Some(map) => Err(GuardError::Domain(map(failure))),
            None => {
                tracing::warn!(job = %self.name, reason = %failure, "gate rejected admission; returning neutral result");
                Ok(R::neutral())
            }
        }
    }
}

fn describe_panic(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "job body panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
