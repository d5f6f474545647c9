use std::sync::atomic::AtomicU64;

use crate::runtime::RUNTIME;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Hash)]
/// A stable identifier for a scope.
pub(crate) struct Id(u64);

impl Id {
    pub(crate) fn next() -> Id {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Id(COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }

    pub(crate) fn is_alive(&self) -> bool {
        RUNTIME.with(|runtime| runtime.scopes.borrow().contains(self))
    }

    pub(crate) fn register(&self, parent: Option<Id>) {
        RUNTIME.with(|runtime| {
            runtime.scopes.borrow_mut().insert(*self);
            if let Some(parent) = parent {
                runtime
                    .children
                    .borrow_mut()
                    .entry(parent)
                    .or_default()
                    .push(*self);
                runtime.parents.borrow_mut().insert(*self, parent);
            }
        });
    }

    /// Disposes the children first, then runs this scope's own cleanups in
    /// the order they were added. Nothing is borrowed while a cleanup runs.
    pub(crate) fn dispose(&self) {
        let (children, cleanups) = RUNTIME.with(|runtime| {
            if !runtime.scopes.borrow_mut().remove(self) {
                return (None, None);
            }
            if let Some(parent) = runtime.parents.borrow_mut().remove(self)
                && let Some(siblings) = runtime.children.borrow_mut().get_mut(&parent)
            {
                siblings.retain(|id| id != self);
            }
            (
                runtime.children.borrow_mut().remove(self),
                runtime.cleanups.borrow_mut().remove(self),
            )
        });

        if let Some(children) = children {
            for child in children {
                child.dispose();
            }
        }

        if let Some(cleanups) = cleanups {
            for cleanup in cleanups {
                cleanup();
            }
        }
    }
}
