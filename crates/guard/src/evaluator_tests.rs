// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jg_core::Tri;

#[test]
fn admits_when_all_conditions_pass() {
    let snapshot = SystemSnapshot::healthy_running();
    let ignore = IgnoreSet::new();
    let conditions = [JobCondition::Healthy, JobCondition::Running, JobCondition::Auth];
    assert_eq!(evaluate(&conditions, &snapshot, &ignore), Admission::Admit);
}

#[test]
fn rejects_on_unhealthy_reasons() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.unhealthy_reasons.insert("disk_read_error".to_string());
    let ignore = IgnoreSet::new();
    let result = evaluate(&[JobCondition::Healthy], &snapshot, &ignore);
    assert_eq!(result, Admission::Reject(JobCondition::Healthy));
}

#[test]
fn returns_first_failing_condition_when_several_fail() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.core_state = CoreState::Freeze;
    snapshot.auth_present = false;
    let ignore = IgnoreSet::new();
    let result = evaluate(&[JobCondition::Running, JobCondition::Auth], &snapshot, &ignore);
    assert_eq!(result, Admission::Reject(JobCondition::Running));
}

#[test]
fn free_space_boundary_at_exactly_minimum_passes() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.free_disk_gib = SystemSnapshot::FREE_SPACE_MINIMUM_GIB;
    let ignore = IgnoreSet::new();
    assert!(evaluate(&[JobCondition::FreeSpace], &snapshot, &ignore).is_admit());
}

#[test]
fn free_space_just_below_minimum_fails() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.free_disk_gib = SystemSnapshot::FREE_SPACE_MINIMUM_GIB - 0.001;
    let ignore = IgnoreSet::new();
    let result = evaluate(&[JobCondition::FreeSpace], &snapshot, &ignore);
    assert_eq!(result, Admission::Reject(JobCondition::FreeSpace));
}

#[test]
fn unknown_connectivity_passes_internet_conditions() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.connectivity_host = Tri::Unknown;
    snapshot.connectivity_supervisor = Tri::Unknown;
    let ignore = IgnoreSet::new();
    let conditions = [JobCondition::InternetHost, JobCondition::InternetSystem, JobCondition::HostNetwork];
    assert!(evaluate(&conditions, &snapshot, &ignore).is_admit());
}

#[test]
fn known_down_connectivity_fails_internet_conditions() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.connectivity_host = Tri::Down;
    let ignore = IgnoreSet::new();
    let result = evaluate(&[JobCondition::InternetHost], &snapshot, &ignore);
    assert_eq!(result, Admission::Reject(JobCondition::InternetHost));
}

#[test]
fn ignore_set_forces_a_failing_condition_to_pass() {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.auth_present = false;
    let ignore = IgnoreSet::new();
    ignore.set([JobCondition::Auth]);
    assert!(evaluate(&[JobCondition::Auth], &snapshot, &ignore).is_admit());
}

/// Boot-gated conditions (FREE_SPACE, INTERNET_HOST, INTERNET_SYSTEM) are
/// skipped entirely during states where the supervisor itself is coming up
/// or going down, regardless of the underlying value.
#[yare::parameterized(
    initialize = { CoreState::Initialize },
    startup = { CoreState::Startup },
    close = { CoreState::Close },
    shutdown = { CoreState::Shutdown },
    stopping = { CoreState::Stopping },
)]
fn boot_gated_conditions_pass_during_transitional_states(state: CoreState) {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.core_state = state;
    snapshot.free_disk_gib = 0.0;
    snapshot.connectivity_host = Tri::Down;
    snapshot.connectivity_supervisor = Tri::Down;
    let ignore = IgnoreSet::new();
    let conditions = [JobCondition::FreeSpace, JobCondition::InternetHost, JobCondition::InternetSystem];
    assert!(evaluate(&conditions, &snapshot, &ignore).is_admit());
}

#[yare::parameterized(
    setup = { CoreState::Setup },
    running = { CoreState::Running },
    freeze = { CoreState::Freeze },
)]
fn boot_gated_conditions_are_evaluated_normally_in_these_states(state: CoreState) {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.core_state = state;
    snapshot.free_disk_gib = 0.0;
    let ignore = IgnoreSet::new();
    let result = evaluate(&[JobCondition::FreeSpace], &snapshot, &ignore);
    assert_eq!(result, Admission::Reject(JobCondition::FreeSpace));
}

#[yare::parameterized(
    haos = { JobCondition::Haos },
    os_agent = { JobCondition::OsAgent },
    auth = { JobCondition::Auth },
    plugins_updated = { JobCondition::PluginsUpdated },
    supervisor_updated = { JobCondition::SupervisorUpdated },
)]
fn boolean_conditions_reject_when_their_flag_is_false(condition: JobCondition) {
    let mut snapshot = SystemSnapshot::healthy_running();
    snapshot.haos_available = false;
    snapshot.os_agent_available = false;
    snapshot.auth_present = false;
    snapshot.plugins_up_to_date = false;
    snapshot.supervisor_up_to_date = false;
    let ignore = IgnoreSet::new();
    let result = evaluate(&[condition], &snapshot, &ignore);
    assert_eq!(result, Admission::Reject(condition));
}
