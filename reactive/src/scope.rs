use std::fmt;

use crate::{id::Id, runtime::RUNTIME};

/// A lifecycle region, usually owned by a component.
///
/// Cleanups registered while a Scope is current run when that Scope is
/// disposed, and disposing a Scope disposes all of its child Scopes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope(pub(crate) Id);

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Scope");
        s.field("id", &self.0);
        s.finish()
    }
}

impl Scope {
    /// Create a new Scope that isn't a child or parent of any scope
    pub fn new() -> Self {
        let id = Id::next();
        id.register(None);
        Self(id)
    }

    /// The Scope the caller is currently running under, if any.
    ///
    /// Code that runs outside of [`with_scope`] has no current Scope.
    pub fn current() -> Option<Scope> {
        RUNTIME.with(|runtime| runtime.current_scope.get().map(Scope))
    }

    /// Create a child Scope of this Scope
    pub fn create_child(&self) -> Scope {
        let child = Id::next();
        child.register(Some(self.0));
        Scope(child)
    }

    /// Runs `f` with this Scope as the current one.
    pub fn enter<T>(&self, f: impl FnOnce() -> T) -> T {
        with_scope(*self, f)
    }

    /// Register `f` to run when this Scope is disposed.
    ///
    /// If the Scope was already disposed `f` runs immediately.
    pub fn on_cleanup(&self, f: impl FnOnce() + 'static) {
        if !self.is_alive() {
            f();
            return;
        }
        RUNTIME.with(|runtime| {
            runtime
                .cleanups
                .borrow_mut()
                .entry(self.0)
                .or_default()
                .push(Box::new(f));
        });
    }

    /// Whether this Scope has not been disposed yet.
    pub fn is_alive(&self) -> bool {
        self.0.is_alive()
    }

    /// Dispose this Scope, and it will run the cleanups of all the child
    /// Scopes and then its own. Disposing twice does nothing.
    pub fn dispose(&self) {
        self.0.dispose();
    }
}

/// Runs the given code with the given Scope
pub fn with_scope<T>(scope: Scope, f: impl FnOnce() -> T) -> T {
    let prev_scope = RUNTIME.with(|runtime| runtime.current_scope.replace(Some(scope.0)));

    let result = f();

    RUNTIME.with(|runtime| runtime.current_scope.set(prev_scope));

    result
}

/// Register `f` on the current Scope.
///
/// Returns `false`, dropping `f` without running it, when there is no
/// current Scope. The caller is then responsible for the cleanup.
pub fn on_cleanup(f: impl FnOnce() + 'static) -> bool {
    match Scope::current() {
        Some(scope) => {
            scope.on_cleanup(f);
            true
        }
        None => false,
    }
}
