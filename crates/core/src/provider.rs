// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator contract for the `system_snapshot()` dependency.
//!
//! The surrounding supervisor owns the live system state; this crate only
//! needs a synchronous, non-suspending way to read a snapshot of it on every
//! admission. Modeling it as a trait (rather than reaching for a global
//! handle) keeps the guard testable in isolation.

use crate::snapshot::SystemSnapshot;

/// Supplies the current [`SystemSnapshot`] on demand.
///
/// Must not suspend: a slow implementation penalizes every gated call.
pub trait SystemStateProvider: Send + Sync {
    fn snapshot(&self) -> SystemSnapshot;
}

/// Wraps a fixed [`SystemSnapshot`] value, for callers that already have one
/// in hand (the common case when the supervisor's own state holder is
/// queried just before invoking a guarded operation).
#[derive(Debug, Clone)]
pub struct StaticSnapshot(pub SystemSnapshot);

impl SystemStateProvider for StaticSnapshot {
    fn snapshot(&self) -> SystemSnapshot {
        self.0.clone()
    }
}

impl From<SystemSnapshot> for StaticSnapshot {
    fn from(snapshot: SystemSnapshot) -> Self {
        Self(snapshot)
    }
}
