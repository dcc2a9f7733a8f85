// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jg-registry: the process-wide store of known jobs.
//!
//! Created once at supervisor boot and torn down at shutdown; there is no
//! persistence, so every restart starts with an empty registry.

use jg_core::{IgnoreSet, JobRecord, ThrottleConfig};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Diagnostic view of one job, as returned by [`JobRegistry::snapshot`].
#[derive(Debug, Clone)]
pub struct JobRecordSnapshot {
    pub name: String,
    pub active_count: u32,
    pub last_run_at: Option<Instant>,
}

/// Process-wide registry of [`JobRecord`]s, indexed by stable operation identity.
///
/// Records are materialized lazily on first call and live for the process's
/// lifetime. The registry also owns the single process-wide [`IgnoreSet`]
/// operators use to force conditions to pass.
pub struct JobRegistry {
    records: RwLock<HashMap<String, Arc<JobRecord>>>,
    ignore: IgnoreSet,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self { records: RwLock::new(HashMap::new()), ignore: IgnoreSet::new() }
    }

    /// Look up the record for `name`, materializing one with the given
    /// throttle tunables if this is the first call for that identity.
    ///
    /// Uses a double-checked read before taking the write lock, since after
    /// warm-up almost every call is a hit.
    pub fn get_or_create(&self, name: &str, throttle: ThrottleConfig) -> Arc<JobRecord> {
        if let Some(existing) = self.records.read().get(name) {
            return Arc::clone(existing);
        }
        let mut records = self.records.write();
        if let Some(existing) = records.get(name) {
            return Arc::clone(existing);
        }
        let record = Arc::new(JobRecord::new(name, throttle));
        records.insert(name.to_string(), Arc::clone(&record));
        tracing::debug!(job = name, "registered new job record");
        record
    }

    /// The operator-controlled ignore set every condition evaluation consults.
    pub fn ignore_conditions(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Diagnostic enumeration of every known job.
    pub fn snapshot(&self) -> Vec<JobRecordSnapshot> {
        self.records
            .read()
            .values()
            .map(|record| JobRecordSnapshot {
                name: record.name().to_string(),
                active_count: record.active_count(),
                last_run_at: record.last_run_at(),
            })
            .collect()
    }

    /// Number of distinct jobs registered so far.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for JobRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
