// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view of system state consulted by the condition evaluator.

use crate::state::{CoreState, Tri};
use std::collections::HashSet;

/// Read-only snapshot of supervisor/system state.
///
/// Produced by an external collaborator (see `crate::provider::SystemStateProvider`)
/// and re-read on every admission — never cached by this crate.
#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    pub core_state: CoreState,
    pub unhealthy_reasons: HashSet<String>,
    pub unsupported_reasons: HashSet<String>,
    pub connectivity_host: Tri,
    pub connectivity_supervisor: Tri,
    pub free_disk_gib: f64,
    pub haos_available: bool,
    pub os_agent_available: bool,
    pub auth_present: bool,
    pub plugins_up_to_date: bool,
    pub supervisor_up_to_date: bool,
}

impl SystemSnapshot {
    /// A snapshot representing a fully healthy, running, well-connected system.
    /// Convenient base for tests that only need to flip one field.
    pub fn healthy_running() -> Self {
        Self {
            core_state: CoreState::Running,
            unhealthy_reasons: HashSet::new(),
            unsupported_reasons: HashSet::new(),
            connectivity_host: Tri::Up,
            connectivity_supervisor: Tri::Up,
            free_disk_gib: 16.0,
            haos_available: true,
            os_agent_available: true,
            auth_present: true,
            plugins_up_to_date: true,
            supervisor_up_to_date: true,
        }
    }

    /// Minimum free disk space (GiB) the `FreeSpace` condition requires.
    pub const FREE_SPACE_MINIMUM_GIB: f64 = 1.0;
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
