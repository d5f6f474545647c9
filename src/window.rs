//! The host window as seen by the breakpoint observer.

use std::{rc::Rc, sync::atomic::AtomicU64};

use crate::error::ViewportError;

/// Called by the viewport every time it is resized.
pub type ResizeListener = Box<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn next() -> ListenerId {
        static LISTENER_COUNTER: AtomicU64 = AtomicU64::new(0);
        ListenerId(LISTENER_COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The listener never blocks or cancels the resize.
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: ListenerOptions = ListenerOptions { passive: true };
}

pub trait Viewport {
    /// Current inner width in logical pixels, `None` when there is no window.
    fn inner_width(&self) -> Option<f64>;

    fn add_resize_listener(
        &self,
        listener: ResizeListener,
        options: ListenerOptions,
    ) -> Result<ListenerId, ViewportError>;
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn inner_width(&self) -> Option<f64> {
        (**self).inner_width()
    }

    fn add_resize_listener(
        &self,
        listener: ResizeListener,
        options: ListenerOptions,
    ) -> Result<ListenerId, ViewportError> {
        (**self).add_resize_listener(listener, options)
    }
}
