// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Condition evaluator: a pure, non-suspending function from a list of
//! conditions plus system state to admit/reject.

use jg_core::{CoreState, IgnoreSet, JobCondition, SystemSnapshot};

/// Result of evaluating a job's `conditions` list against current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admit,
    Reject(JobCondition),
}

impl Admission {
    pub fn is_admit(self) -> bool {
        matches!(self, Admission::Admit)
    }
}

/// Evaluate every condition in `conditions` against `snapshot`, honoring
/// `ignore`. Returns the first failing condition, or `Admit` if all pass.
pub fn evaluate(conditions: &[JobCondition], snapshot: &SystemSnapshot, ignore: &IgnoreSet) -> Admission {
    for &condition in conditions {
        if ignore.contains(condition) {
            tracing::warn!(%condition, "condition ignored by operator override");
            continue;
        }
        if !passes(condition, snapshot) {
            return Admission::Reject(condition);
        }
    }
    Admission::Admit
}

fn passes(condition: JobCondition, snapshot: &SystemSnapshot) -> bool {
    if condition.is_boot_gated() && snapshot.core_state.skips_boot_gated_conditions() {
        return true;
    }

    match condition {
        JobCondition::Healthy => snapshot.unhealthy_reasons.is_empty(),
        JobCondition::Running => snapshot.core_state == CoreState::Running,
        JobCondition::FreeSpace => snapshot.free_disk_gib >= SystemSnapshot::FREE_SPACE_MINIMUM_GIB,
        JobCondition::InternetHost => snapshot.connectivity_host.is_not_known_down(),
        JobCondition::InternetSystem => snapshot.connectivity_supervisor.is_not_known_down(),
        JobCondition::Haos => snapshot.haos_available,
        JobCondition::OsAgent => snapshot.os_agent_available,
        JobCondition::HostNetwork => snapshot.connectivity_host.is_not_known_down(),
        JobCondition::Auth => snapshot.auth_present,
        JobCondition::PluginsUpdated => snapshot.plugins_up_to_date,
        JobCondition::SupervisorUpdated => snapshot.supervisor_up_to_date,
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
