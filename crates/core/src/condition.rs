// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job pre-conditions: stateless predicates over a [`crate::snapshot::SystemSnapshot`].

/// A named pre-condition a job can require before its body runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobCondition {
    Healthy,
    Running,
    FreeSpace,
    InternetHost,
    InternetSystem,
    Haos,
    OsAgent,
    HostNetwork,
    Auth,
    PluginsUpdated,
    SupervisorUpdated,
}

impl JobCondition {
    /// All condition tags, for iterating e.g. when building an ignore-set UI.
    pub const ALL: &'static [JobCondition] = &[
        JobCondition::Healthy,
        JobCondition::Running,
        JobCondition::FreeSpace,
        JobCondition::InternetHost,
        JobCondition::InternetSystem,
        JobCondition::Haos,
        JobCondition::OsAgent,
        JobCondition::HostNetwork,
        JobCondition::Auth,
        JobCondition::PluginsUpdated,
        JobCondition::SupervisorUpdated,
    ];

    /// True for conditions that are auto-passed while the system is not yet,
    /// or no longer, expected to be fully booted (see
    /// [`crate::state::CoreState::skips_boot_gated_conditions`]).
    pub fn is_boot_gated(self) -> bool {
        matches!(
            self,
            JobCondition::FreeSpace | JobCondition::InternetHost | JobCondition::InternetSystem
        )
    }
}

crate::simple_display! {
    JobCondition {
        Healthy => "healthy",
        Running => "running",
        FreeSpace => "free_space",
        InternetHost => "internet_host",
        InternetSystem => "internet_system",
        Haos => "haos",
        OsAgent => "os_agent",
        HostNetwork => "host_network",
        Auth => "auth",
        PluginsUpdated => "plugins_updated",
        SupervisorUpdated => "supervisor_updated",
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
