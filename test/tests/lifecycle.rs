//! Watches bound to a component's lifecycle scope.

use seuil::reactive::{Scope, with_scope};
use seuil_test::prelude::*;

#[test]
fn watch_outside_a_scope_needs_manual_removal() {
    let harness = TestHarness::new(1000.0);
    let tracker = StateTracker::new();

    assert!(Scope::current().is_none());
    let unwatch = tracker.watch(harness.seuil());

    let unrelated = Scope::new();
    unrelated.dispose();
    assert_eq!(harness.seuil().watcher_count(), 1);

    unwatch.unwatch();
    assert_eq!(harness.seuil().watcher_count(), 0);
}

#[test]
fn disposing_the_component_scope_unwatches() {
    let harness = TestHarness::new(1000.0);
    let tracker = StateTracker::new();
    let component = Scope::new();

    with_scope(component, || {
        let _ = tracker.watch(harness.seuil());
    });

    harness.resize(200.0);
    harness.settle();
    assert_eq!(tracker.count(), 1);

    component.dispose();
    assert_eq!(harness.seuil().watcher_count(), 0);

    harness.resize(1600.0);
    harness.settle();
    assert_eq!(tracker.count(), 1);
}

#[test]
fn disposing_a_parent_unwatches_children() {
    let harness = TestHarness::new(1000.0);
    let parent = Scope::new();
    let child = parent.create_child();
    let in_parent = StateTracker::new();
    let in_child = StateTracker::new();

    parent.enter(|| {
        let _ = in_parent.watch(harness.seuil());
    });
    child.enter(|| {
        let _ = in_child.watch(harness.seuil());
    });
    assert_eq!(harness.seuil().watcher_count(), 2);

    child.dispose();
    assert_eq!(harness.seuil().watcher_count(), 1);

    parent.dispose();
    assert_eq!(harness.seuil().watcher_count(), 0);
}

#[test]
fn manual_unwatch_before_dispose_is_fine() {
    let harness = TestHarness::new(1000.0);
    let tracker = StateTracker::new();
    let component = Scope::new();

    let unwatch = component.enter(|| tracker.watch(harness.seuil()));
    unwatch.unwatch();
    component.dispose();
    assert_eq!(harness.seuil().watcher_count(), 0);
}
