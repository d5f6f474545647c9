//! Testing utilities for seuil breakpoint observers.
//!
//! [`TestHarness`] owns a manual clock, a timer queue and a headless
//! viewport, so tests can resize the window and step time without waiting.
//!
//! # Example
//!
//! ```rust
//! use seuil::Tier;
//! use seuil_test::prelude::*;
//!
//! let harness = TestHarness::new(1000.0);
//! let tracker = StateTracker::new();
//! let _unwatch = tracker.watch(harness.seuil());
//!
//! harness.resize(200.0);
//! harness.advance_ms(300);
//!
//! assert_eq!(tracker.count(), 1);
//! assert_eq!(tracker.names(), vec![Tier::Xs]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use seuil::headless::HeadlessViewport;
use seuil::timer::{ManualClock, TimerQueue};
use seuil::{BreakpointState, Handler, Seuil, SeuilConfig, Tier, Unwatch};

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{StateTracker, TestHarness};
    pub use seuil::{BreakpointState, Handler, Seuil, SeuilConfig, Tier, Unwatch};
}

/// A breakpoint observer wired to a manual clock and a headless viewport.
pub struct TestHarness {
    clock: ManualClock,
    timers: TimerQueue,
    viewport: Rc<HeadlessViewport>,
    seuil: Seuil,
}

impl TestHarness {
    /// Create a harness with the default configuration and the given width.
    pub fn new(width: f64) -> Self {
        Self::with_config(&SeuilConfig::default(), width)
    }

    pub fn with_config(config: &SeuilConfig, width: f64) -> Self {
        let viewport = Rc::new(HeadlessViewport::new(width));
        Self::build(viewport, |viewport, timers| {
            Seuil::new(config, viewport, timers)
        })
    }

    /// Create a harness whose observer is installed in the application
    /// context, like a real application would.
    pub fn installed(config: &SeuilConfig, width: f64) -> Self {
        let viewport = Rc::new(HeadlessViewport::new(width));
        Self::build(viewport, |viewport, timers| {
            seuil::install(config, viewport, timers)
        })
    }

    /// A harness whose viewport has no window behind it.
    pub fn detached() -> Self {
        let viewport = Rc::new(HeadlessViewport::detached());
        Self::build(viewport, |viewport, timers| {
            Seuil::new(&SeuilConfig::default(), viewport, timers)
        })
    }

    fn build(
        viewport: Rc<HeadlessViewport>,
        create: impl FnOnce(Rc<HeadlessViewport>, TimerQueue) -> Seuil,
    ) -> Self {
        let clock = ManualClock::new();
        let timers = TimerQueue::with_clock(clock.clone());
        let seuil = create(viewport.clone(), timers.clone());
        Self {
            clock,
            timers,
            viewport,
            seuil,
        }
    }

    pub fn seuil(&self) -> &Seuil {
        &self.seuil
    }

    pub fn viewport(&self) -> &HeadlessViewport {
        &self.viewport
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Resize the viewport, dispatching a resize event.
    pub fn resize(&self, width: f64) {
        self.viewport.resize(width);
    }

    /// Move the clock forward and run the timers that became due.
    ///
    /// Returns how many timers ran.
    pub fn advance(&self, duration: Duration) -> usize {
        self.clock.advance(duration);
        self.timers.handle_timers()
    }

    pub fn advance_ms(&self, ms: u64) -> usize {
        self.advance(Duration::from_millis(ms))
    }

    /// Advance past the debounce delay so any pending update runs.
    pub fn settle(&self) -> usize {
        self.advance(self.seuil.debounce_delay())
    }
}

/// Records every snapshot delivered to a watcher.
///
/// The tracker's handler is a single `Rc`, so watching twice with the
/// same tracker registers once.
#[derive(Clone)]
pub struct StateTracker {
    states: Rc<RefCell<Vec<BreakpointState>>>,
    handler: Handler,
}

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StateTracker {
    pub fn new() -> Self {
        let states = Rc::new(RefCell::new(Vec::new()));
        let handler: Handler = Rc::new({
            let states = states.clone();
            move |state: &BreakpointState| states.borrow_mut().push(state.clone())
        });
        Self { states, handler }
    }

    pub fn handler(&self) -> Handler {
        self.handler.clone()
    }

    pub fn watch(&self, seuil: &Seuil) -> Unwatch {
        seuil.watch(self.handler())
    }

    /// Returns the number of notifications recorded.
    pub fn count(&self) -> usize {
        self.states.borrow().len()
    }

    pub fn states(&self) -> Vec<BreakpointState> {
        self.states.borrow().clone()
    }

    pub fn last(&self) -> Option<BreakpointState> {
        self.states.borrow().last().cloned()
    }

    /// Returns the tier names of every notification in order.
    pub fn names(&self) -> Vec<Tier> {
        self.states.borrow().iter().map(|state| state.name).collect()
    }

    pub fn widths(&self) -> Vec<f64> {
        self.states.borrow().iter().map(|state| state.width).collect()
    }

    pub fn reset(&self) {
        self.states.borrow_mut().clear();
    }
}
