use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

use seuil_reactive::Scope;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    action::Debounce,
    config::SeuilConfig,
    responsive::{Breakpoint, Thresholds, Tier, TierFlags},
    state::BreakpointState,
    timer::TimerQueue,
    window::{ListenerId, ListenerOptions, Viewport},
};

/// A breakpoint watcher. Identity is the `Rc` allocation, so keep a clone
/// around to register the same handler again or compare it later.
pub type Handler = Rc<dyn Fn(&BreakpointState)>;

type Handlers = SmallVec<[Handler; 4]>;

fn same_handler(a: &Handler, b: &Handler) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

struct SeuilState {
    breakpoint: RefCell<Breakpoint>,
    handlers: RefCell<Handlers>,
    debounce: Debounce,
    viewport: Rc<dyn Viewport>,
    listener: Cell<Option<ListenerId>>,
}

impl SeuilState {
    fn handle_resize(self: &Rc<Self>) {
        trace!("viewport resize received");
        let state = Rc::downgrade(self);
        self.debounce.trigger(move || {
            if let Some(state) = state.upgrade() {
                state.refresh();
            }
        });
    }

    fn refresh(&self) {
        match self.viewport.inner_width() {
            Some(width) => self.breakpoint.borrow_mut().set_width(width),
            None => debug!("viewport width unavailable, keeping the previous width"),
        }
        self.notify();
    }

    fn snapshot(&self) -> BreakpointState {
        let breakpoint = self.breakpoint.borrow();
        BreakpointState::new(breakpoint.width(), breakpoint.flags())
    }

    fn notify(&self) {
        let state = self.snapshot();
        // handlers may watch or unwatch while being notified
        let handlers = self.handlers.borrow().clone();
        debug!(
            name = %state.name,
            width = state.width,
            watchers = handlers.len(),
            "breakpoint updated"
        );
        for handler in handlers {
            handler(&state);
        }
    }

    fn remove(&self, handler: &Handler) {
        let mut handlers = self.handlers.borrow_mut();
        if let Some(idx) = handlers.iter().position(|h| same_handler(h, handler)) {
            handlers.remove(idx);
        }
    }
}

/// Tracks the viewport width, classifies it, and notifies watchers.
///
/// `Seuil` is a cheap handle: clones share the same state. An application
/// normally has exactly one, created through [`install`](crate::install).
#[derive(Clone)]
pub struct Seuil {
    state: Rc<SeuilState>,
}

impl fmt::Debug for Seuil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seuil")
            .field("width", &self.width())
            .field("name", &self.name())
            .field("watchers", &self.watcher_count())
            .field("debounce", &self.state.debounce)
            .finish()
    }
}

impl Seuil {
    /// Create an observer reading `viewport` and scheduling on `timers`.
    ///
    /// The initial width is read right away. A viewport that refuses the
    /// resize listener leaves the observer at its initial state.
    pub fn new(config: &SeuilConfig, viewport: Rc<dyn Viewport>, timers: TimerQueue) -> Self {
        let mut breakpoint = Breakpoint::new(config.thresholds());
        match viewport.inner_width() {
            Some(width) => breakpoint.set_width(width),
            None => debug!("viewport width unavailable, starting at 0"),
        }

        let state = Rc::new(SeuilState {
            breakpoint: RefCell::new(breakpoint),
            handlers: RefCell::new(SmallVec::new()),
            debounce: Debounce::new(timers, config.debounce_delay()),
            viewport,
            listener: Cell::new(None),
        });

        let weak = Rc::downgrade(&state);
        let listener = Box::new(move || {
            if let Some(state) = weak.upgrade() {
                state.handle_resize();
            }
        });
        match state
            .viewport
            .add_resize_listener(listener, ListenerOptions::PASSIVE)
        {
            Ok(id) => state.listener.set(Some(id)),
            Err(err) => debug!(%err, "resize listener not installed"),
        }

        Self { state }
    }

    /// Return the application's observer, creating it on the first call.
    ///
    /// Arguments of later calls are ignored.
    pub fn get_or_install(
        config: &SeuilConfig,
        viewport: Rc<dyn Viewport>,
        timers: TimerQueue,
    ) -> Self {
        crate::context::install(config, viewport, timers)
    }

    /// Everything derived from the current width.
    pub fn state(&self) -> BreakpointState {
        self.state.snapshot()
    }

    /// Register `handler` to be called after every debounced resize.
    ///
    /// Registering the same handler twice keeps one registration. When a
    /// [`Scope`] is current the handler is also removed once that scope is
    /// disposed, otherwise removal is left to the returned [`Unwatch`].
    ///
    /// ```rust
    /// use std::rc::Rc;
    ///
    /// use seuil::{headless::HeadlessViewport, timer::TimerQueue, BreakpointState, Seuil, SeuilConfig};
    ///
    /// let seuil = Seuil::new(
    ///     &SeuilConfig::default(),
    ///     Rc::new(HeadlessViewport::new(800.0)),
    ///     TimerQueue::new(),
    /// );
    /// let unwatch = seuil.watch(Rc::new(|state: &BreakpointState| {
    ///     println!("now {} at {}px", state.name, state.width);
    /// }));
    /// assert_eq!(seuil.watcher_count(), 1);
    ///
    /// unwatch.unwatch();
    /// unwatch.unwatch();
    /// assert_eq!(seuil.watcher_count(), 0);
    /// ```
    pub fn watch(&self, handler: Handler) -> Unwatch {
        {
            let mut handlers = self.state.handlers.borrow_mut();
            if !handlers.iter().any(|h| same_handler(h, &handler)) {
                handlers.push(handler.clone());
            }
        }

        let unwatch = Unwatch {
            state: Rc::downgrade(&self.state),
            handler,
        };

        if let Some(scope) = Scope::current() {
            let unwatch = unwatch.clone();
            scope.on_cleanup(move || unwatch.unwatch());
        }

        unwatch
    }

    pub fn watcher_count(&self) -> usize {
        self.state.handlers.borrow().len()
    }

    /// Read the viewport width now and notify every watcher, skipping the debounce.
    pub fn refresh(&self) {
        self.state.debounce.cancel();
        self.state.refresh();
    }

    /// Whether a debounced update is waiting for its timer.
    pub fn is_update_pending(&self) -> bool {
        self.state.debounce.is_pending()
    }

    /// Whether the viewport accepted the resize listener.
    pub fn is_listening(&self) -> bool {
        self.state.listener.get().is_some()
    }

    pub fn thresholds(&self) -> Thresholds {
        *self.state.breakpoint.borrow().thresholds()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.state.debounce.delay()
    }

    /// Current breakpoint name
    pub fn name(&self) -> Tier {
        self.state.breakpoint.borrow().tier()
    }

    pub fn width(&self) -> f64 {
        self.state.breakpoint.borrow().width()
    }

    pub fn flags(&self) -> TierFlags {
        self.state.breakpoint.borrow().flags()
    }

    pub fn xs(&self) -> bool {
        self.state.breakpoint.borrow().xs()
    }

    pub fn sm(&self) -> bool {
        self.state.breakpoint.borrow().sm()
    }

    pub fn md(&self) -> bool {
        self.state.breakpoint.borrow().md()
    }

    pub fn lg(&self) -> bool {
        self.state.breakpoint.borrow().lg()
    }

    pub fn xl(&self) -> bool {
        self.state.breakpoint.borrow().xl()
    }

    pub fn sm_and_down(&self) -> bool {
        self.flags().and_down(Tier::Sm)
    }

    pub fn sm_and_up(&self) -> bool {
        self.flags().and_up(Tier::Sm)
    }

    pub fn md_and_down(&self) -> bool {
        self.flags().and_down(Tier::Md)
    }

    pub fn md_and_up(&self) -> bool {
        self.flags().and_up(Tier::Md)
    }

    pub fn lg_and_down(&self) -> bool {
        self.flags().and_down(Tier::Lg)
    }

    pub fn lg_and_up(&self) -> bool {
        self.flags().and_up(Tier::Lg)
    }
}

/// Removes a handler registered with [`Seuil::watch`].
///
/// Calling [`unwatch`](Unwatch::unwatch) more than once does nothing, and
/// dropping an `Unwatch` leaves the handler registered.
#[derive(Clone)]
pub struct Unwatch {
    state: Weak<SeuilState>,
    handler: Handler,
}

impl fmt::Debug for Unwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unwatch").finish_non_exhaustive()
    }
}

impl Unwatch {
    pub fn unwatch(&self) {
        if let Some(state) = self.state.upgrade() {
            state.remove(&self.handler);
        }
    }
}
