//! Properties of the observer over arbitrary resize sequences.

use proptest::prelude::*;
use seuil::responsive::DEFAULT_THRESHOLDS;
use seuil_test::prelude::*;

proptest! {
    #[test]
    fn burst_collapses_to_last_width(widths in proptest::collection::vec(0.0f64..4000.0, 1..20)) {
        let harness = TestHarness::new(1000.0);
        let tracker = StateTracker::new();
        let _unwatch = tracker.watch(harness.seuil());

        for width in &widths {
            harness.resize(*width);
            harness.advance_ms(10);
        }
        harness.settle();

        let last = *widths.last().unwrap();
        prop_assert_eq!(tracker.count(), 1);
        prop_assert_eq!(tracker.widths(), vec![last]);
        prop_assert_eq!(tracker.names(), vec![DEFAULT_THRESHOLDS.tier_for(last)]);
    }

    #[test]
    fn spaced_resizes_each_notify(widths in proptest::collection::vec(0.0f64..4000.0, 1..10)) {
        let harness = TestHarness::new(1000.0);
        let tracker = StateTracker::new();
        let _unwatch = tracker.watch(harness.seuil());

        for width in &widths {
            harness.resize(*width);
            harness.advance_ms(500);
        }
        prop_assert_eq!(tracker.widths(), widths);
    }
}
