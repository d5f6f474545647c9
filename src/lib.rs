//! # seuil
//!
//! Viewport breakpoints for UI applications. `seuil` tracks the width of
//! the application window, classifies it into one of five tiers
//! (`xs`, `sm`, `md`, `lg`, `xl`) and tells watchers when it changes.
//!
//! ```rust
//! use std::{rc::Rc, time::Duration};
//!
//! use seuil::{
//!     headless::HeadlessViewport,
//!     timer::{ManualClock, TimerQueue},
//!     BreakpointState, SeuilConfig, Tier,
//! };
//!
//! let clock = ManualClock::new();
//! let timers = TimerQueue::with_clock(clock.clone());
//! let viewport = Rc::new(HeadlessViewport::new(1280.0));
//!
//! let breakpoints = seuil::install(&SeuilConfig::default(), viewport.clone(), timers.clone());
//! assert_eq!(breakpoints.name(), Tier::Lg);
//! assert!(breakpoints.md_and_up());
//!
//! let _unwatch = breakpoints.watch(Rc::new(|state: &BreakpointState| {
//!     assert_eq!(state.name, Tier::Sm);
//! }));
//!
//! viewport.resize(600.0);
//! clock.advance(Duration::from_millis(300));
//! timers.handle_timers();
//! assert!(breakpoints.sm());
//! ```
//!
//! ## Tiers
//!
//! A width belongs to the first tier whose boundary it is strictly below,
//! so a width equal to a boundary belongs to the next tier up. Everything
//! at or above the `lg` boundary is `xl`. The default boundaries are
//! `320`, `768`, `1200`, `1500` and `1920` pixels; see
//! [`Thresholds`](responsive::Thresholds).
//!
//! ## Updates
//!
//! Resize events are debounced: a burst of resizes produces one update,
//! [`DEFAULT_DELAY`](config::DEFAULT_DELAY) after the last one. Timers run
//! when the host calls [`TimerQueue::handle_timers`](timer::TimerQueue::handle_timers)
//! from its event loop, and watchers are called synchronously from there,
//! in the order they were registered.
//!
//! ## One observer per application
//!
//! [`install`] stores the observer in the application context, and
//! [`use_seuil`] gets it back from anywhere. A watch registered while a
//! [`Scope`](seuil_reactive::Scope) is current is removed when that scope
//! is disposed.

pub mod action;
pub mod config;
mod context;
pub mod error;
pub mod headless;
pub mod responsive;
mod observer;
pub mod state;
pub mod timer;
pub mod window;

pub use config::SeuilConfig;
pub use context::{install, use_seuil};
pub use error::{SeuilError, ViewportError};
pub use responsive::{Breakpoint, Thresholds, Tier, TierFlags};
pub use observer::{Handler, Seuil, Unwatch};
pub use seuil_reactive as reactive;
pub use state::BreakpointState;
