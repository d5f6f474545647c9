//! Single-threaded timers driven by the host's event loop.
//!
//! Nothing here spawns a thread or sleeps. The host asks for the
//! [`next_deadline`](TimerQueue::next_deadline), waits until then however
//! its event loop waits, and calls [`handle_timers`](TimerQueue::handle_timers).

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    sync::atomic::AtomicU64,
    time::Duration,
};

use rustc_hash::FxHashMap;
use tracing::trace;
use web_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    /// A token that does not correspond to any timer.
    pub const INVALID: TimerToken = TimerToken(0);

    /// Create a new token.
    pub fn next() -> TimerToken {
        static TIMER_COUNTER: AtomicU64 = AtomicU64::new(1);
        TimerToken(TIMER_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }

    /// Create a new token from a raw value.
    pub const fn from_raw(id: u64) -> TimerToken {
        TimerToken(id)
    }

    /// Get the raw value for a token.
    pub const fn into_raw(self) -> u64 {
        self.0
    }
}

/// Source of the current time for a [`TimerQueue`].
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

pub(crate) struct Timer {
    pub(crate) action: Box<dyn FnOnce(TimerToken)>,
    pub(crate) deadline: Instant,
}

struct QueueState {
    clock: Box<dyn Clock>,
    timers: RefCell<FxHashMap<TimerToken, Timer>>,
}

/// Pending timers of one application. Clones share the same queue.
#[derive(Clone)]
pub struct TimerQueue {
    state: Rc<QueueState>,
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            state: Rc::new(QueueState {
                clock: Box::new(clock),
                timers: RefCell::new(FxHashMap::default()),
            }),
        }
    }

    pub fn now(&self) -> Instant {
        self.state.clock.now()
    }

    /// Run `action` on the first [`handle_timers`](Self::handle_timers) call
    /// at least `duration` from now.
    pub fn exec_after(
        &self,
        duration: Duration,
        action: impl FnOnce(TimerToken) + 'static,
    ) -> TimerToken {
        let token = TimerToken::next();
        let deadline = self.now() + duration;
        self.state.timers.borrow_mut().insert(
            token,
            Timer {
                action: Box::new(action),
                deadline,
            },
        );
        trace!(token = token.into_raw(), ?duration, "timer requested");
        token
    }

    /// Drop a pending timer. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&self, token: TimerToken) -> bool {
        self.state.timers.borrow_mut().remove(&token).is_some()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.state.timers.borrow().contains_key(&token)
    }

    pub fn len(&self) -> usize {
        self.state.timers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.timers.borrow().is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.state
            .timers
            .borrow()
            .values()
            .map(|timer| timer.deadline)
            .min()
    }

    /// How long the host may wait before timers are due, `None` when idle.
    pub fn time_until_next(&self) -> Option<Duration> {
        let deadline = self.next_deadline()?;
        Some(deadline.saturating_duration_since(self.now()))
    }

    /// Run every timer whose deadline has passed, earliest first, and return
    /// how many ran. Timers requested by those actions wait for the next call.
    pub fn handle_timers(&self) -> usize {
        let now = self.now();
        let mut due: Vec<(Instant, TimerToken)> = self
            .state
            .timers
            .borrow()
            .iter()
            .filter_map(|(token, timer)| {
                if timer.deadline <= now {
                    Some((timer.deadline, *token))
                } else {
                    None
                }
            })
            .collect();
        due.sort();

        let mut ran = 0;
        for (_, token) in due {
            // an earlier action may have cancelled this one
            let timer = self.state.timers.borrow_mut().remove(&token);
            if let Some(timer) = timer {
                (timer.action)(token);
                ran += 1;
            }
        }
        ran
    }
}
