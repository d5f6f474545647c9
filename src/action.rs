use std::{cell::Cell, fmt, time::Duration};

use tracing::trace;

use crate::timer::{TimerQueue, TimerToken};

/// Trailing-edge debounce on top of a [`TimerQueue`].
///
/// Every [`trigger`](Debounce::trigger) cancels the pending action and
/// schedules the new one `delay` later, so a burst of triggers runs only the
/// last action, once the burst has been quiet for `delay`.
pub struct Debounce {
    timers: TimerQueue,
    delay: Duration,
    pending: Cell<TimerToken>,
}

impl fmt::Debug for Debounce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

impl Debounce {
    pub fn new(timers: TimerQueue, delay: Duration) -> Self {
        Self {
            timers,
            delay,
            pending: Cell::new(TimerToken::INVALID),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn trigger(&self, action: impl FnOnce() + 'static) {
        if self.cancel() {
            trace!("debounce rescheduled");
        }
        let token = self.timers.exec_after(self.delay, move |_| action());
        self.pending.set(token);
    }

    /// Drop the pending action, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let token = self.pending.replace(TimerToken::INVALID);
        token != TimerToken::INVALID && self.timers.cancel(token)
    }

    pub fn is_pending(&self) -> bool {
        self.timers.is_pending(self.pending.get())
    }
}
