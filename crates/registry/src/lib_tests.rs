// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jg_core::JobCondition;

#[test]
fn get_or_create_materializes_once_and_reuses() {
    let registry = JobRegistry::new();
    let first = registry.get_or_create("backup.run", ThrottleConfig::default());
    let second = registry.get_or_create("backup.run", ThrottleConfig::default());
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn distinct_names_get_distinct_records() {
    let registry = JobRegistry::new();
    registry.get_or_create("backup.run", ThrottleConfig::default());
    registry.get_or_create("reboot.run", ThrottleConfig::default());
    assert_eq!(registry.len(), 2);
}

#[test]
fn snapshot_reflects_each_registered_job() {
    let registry = JobRegistry::new();
    registry.get_or_create("backup.run", ThrottleConfig::default());
    registry.get_or_create("reboot.run", ThrottleConfig::default());

    let mut names: Vec<_> = registry.snapshot().into_iter().map(|entry| entry.name).collect();
    names.sort();
    assert_eq!(names, vec!["backup.run", "reboot.run"]);
}

#[test]
fn new_registry_is_empty() {
    let registry = JobRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.snapshot().is_empty());
}

#[test]
fn ignore_conditions_is_process_wide_within_the_registry() {
    let registry = JobRegistry::new();
    registry.ignore_conditions().set([JobCondition::Running]);
    assert!(registry.ignore_conditions().contains(JobCondition::Running));
}
