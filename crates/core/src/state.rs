// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Supervisor lifecycle state, as seen by the condition evaluator.

/// Phase of the surrounding supervisor's boot/run/shutdown lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreState {
    Initialize,
    Setup,
    Startup,
    Running,
    Freeze,
    Close,
    Shutdown,
    Stopping,
}

impl CoreState {
    /// True while the system is not yet, or no longer, expected to satisfy
    /// boot-gated conditions ([`crate::condition::JobCondition::is_boot_gated`]).
    ///
    /// When this is true those conditions are auto-passed; otherwise they're
    /// evaluated normally against the live snapshot.
    pub fn skips_boot_gated_conditions(self) -> bool {
        matches!(
            self,
            CoreState::Initialize
                | CoreState::Startup
                | CoreState::Close
                | CoreState::Shutdown
                | CoreState::Stopping
        )
    }
}

crate::simple_display! {
    CoreState {
        Initialize => "initialize",
        Setup => "setup",
        Startup => "startup",
        Running => "running",
        Freeze => "freeze",
        Close => "close",
        Shutdown => "shutdown",
        Stopping => "stopping",
    }
}

/// Tri-valued connectivity reading: a probe that hasn't run yet reports
/// `Unknown`, which is treated as "probably up" so gated jobs aren't blocked
/// during boot before the first probe completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tri {
    Up,
    Down,
    Unknown,
}

impl Tri {
    /// True for `Up` and `Unknown` — the "not known to be down" test used by
    /// every connectivity-derived condition.
    pub fn is_not_known_down(self) -> bool {
        !matches!(self, Tri::Down)
    }
}

impl From<Option<bool>> for Tri {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Tri::Up,
            Some(false) => Tri::Down,
            None => Tri::Unknown,
        }
    }
}

crate::simple_display! {
    Tri {
        Up => "up",
        Down => "down",
        Unknown => "unknown",
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
