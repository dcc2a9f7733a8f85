// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator escape hatch: conditions forced to pass process-wide.

use crate::condition::JobCondition;
use parking_lot::RwLock;
use std::collections::HashSet;

/// Process-wide set of conditions that always pass the evaluator.
///
/// Scope is intentionally process-wide rather than per-job: an operator
/// disabling `Running` suppresses it for every job in the process. Reads
/// (on every admission) are cheap and frequent; writes are rare operator
/// actions, so a reader-friendly lock is the right primitive.
#[derive(Debug, Default)]
pub struct IgnoreSet {
    conditions: RwLock<HashSet<JobCondition>>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ignore set with exactly the given conditions.
    pub fn set(&self, conditions: impl IntoIterator<Item = JobCondition>) {
        *self.conditions.write() = conditions.into_iter().collect();
    }

    /// Clear the ignore set.
    pub fn clear(&self) {
        self.conditions.write().clear();
    }

    /// True if `condition` is in the ignore set and should be forced to pass.
    pub fn contains(&self, condition: JobCondition) -> bool {
        self.conditions.read().contains(&condition)
    }

    /// Snapshot the currently ignored conditions.
    pub fn snapshot(&self) -> Vec<JobCondition> {
        self.conditions.read().iter().copied().collect()
    }
}

#[cfg(test)]
#[path = "ignore_tests.rs"]
mod tests;
