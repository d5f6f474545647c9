//! One observer per application, reachable through the context.

use std::time::Duration;

use seuil::headless::HeadlessViewport;
use seuil::timer::TimerQueue;
use seuil::{install, use_seuil};
use seuil_test::prelude::*;

#[test]
fn install_provides_the_observer() {
    assert!(use_seuil().is_none());

    let harness = TestHarness::installed(&SeuilConfig::default(), 900.0);
    let seuil = use_seuil().unwrap();
    assert_eq!(seuil.name(), Tier::Md);

    // watchers registered through the context see the harness' resizes
    let tracker = StateTracker::new();
    let _unwatch = tracker.watch(&seuil);
    harness.resize(100.0);
    harness.settle();
    assert_eq!(tracker.names(), vec![Tier::Xs]);
}

#[test]
fn later_installs_ignore_their_arguments() {
    let config = SeuilConfig::default().with_debounce_delay(Duration::from_millis(700));
    let harness = TestHarness::installed(&config, 900.0);

    let again = install(
        &SeuilConfig::default(),
        std::rc::Rc::new(HeadlessViewport::new(50.0)),
        TimerQueue::new(),
    );
    assert_eq!(again.debounce_delay(), Duration::from_millis(700));
    assert_eq!(again.width(), 900.0);

    let also = Seuil::get_or_install(
        &SeuilConfig::default(),
        std::rc::Rc::new(HeadlessViewport::new(50.0)),
        TimerQueue::new(),
    );
    let tracker = StateTracker::new();
    let _unwatch = tracker.watch(&also);
    assert_eq!(harness.seuil().watcher_count(), 1);
}

#[test]
fn json_config() {
    let config = SeuilConfig::from_json(r#"{"debounceDelay": 700}"#).unwrap();
    let harness = TestHarness::installed(&config, 900.0);
    assert_eq!(harness.seuil().debounce_delay(), Duration::from_millis(700));
    assert_eq!(harness.seuil().thresholds(), seuil::responsive::DEFAULT_THRESHOLDS);
}

#[test]
fn detached_viewport_never_updates() {
    let harness = TestHarness::detached();
    let tracker = StateTracker::new();
    let _unwatch = tracker.watch(harness.seuil());

    assert!(!harness.seuil().is_listening());
    assert_eq!(harness.seuil().width(), 0.0);

    harness.resize(1000.0);
    harness.settle();
    assert_eq!(tracker.count(), 0);
    assert_eq!(harness.seuil().name(), Tier::Xs);
}
