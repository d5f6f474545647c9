//! A viewport without a window.
//!
//! [`HeadlessViewport`] holds a width in memory and dispatches resize
//! events when told to. Hosts that learn about window sizes some other way
//! can forward them through it, and tests use it to drive the observer.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use seuil::{headless::HeadlessViewport, timer::TimerQueue, Seuil, SeuilConfig, Tier};
//!
//! let viewport = Rc::new(HeadlessViewport::new(1024.0));
//! let seuil = Seuil::new(&SeuilConfig::default(), viewport.clone(), TimerQueue::new());
//! assert_eq!(seuil.name(), Tier::Md);
//!
//! // Resizes are debounced, the state changes once the timer fires
//! viewport.resize(400.0);
//! assert_eq!(seuil.name(), Tier::Md);
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use tracing::trace;

use crate::{
    error::ViewportError,
    window::{ListenerId, ListenerOptions, ResizeListener, Viewport},
};

pub struct HeadlessViewport {
    width: Cell<Option<f64>>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>>,
}

impl HeadlessViewport {
    pub fn new(width: f64) -> Self {
        Self {
            width: Cell::new(Some(width)),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// A viewport with no window behind it: no width, and listeners are refused.
    pub fn detached() -> Self {
        Self {
            width: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.width.get().is_some()
    }

    /// Set the width and dispatch a resize event to every listener.
    ///
    /// Does nothing on a detached viewport.
    pub fn resize(&self, width: f64) {
        if !self.is_attached() {
            return;
        }
        self.width.set(Some(width));
        let listeners: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        trace!(width, listeners = listeners.len(), "headless resize");
        for listener in listeners {
            listener();
        }
    }

    pub fn remove_resize_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let len = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != len
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Viewport for HeadlessViewport {
    fn inner_width(&self) -> Option<f64> {
        self.width.get()
    }

    fn add_resize_listener(
        &self,
        listener: ResizeListener,
        _options: ListenerOptions,
    ) -> Result<ListenerId, ViewportError> {
        if !self.is_attached() {
            return Err(ViewportError::Unavailable);
        }
        let id = ListenerId::next();
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        Ok(id)
    }
}
