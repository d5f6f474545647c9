//! Lifecycle scopes and application contexts.
//!
//! Everything lives in a thread local runtime: a UI application runs on one
//! thread, so a [`Scope`] or a context value is only visible on the thread
//! that created it.

mod context;
mod id;
mod runtime;
mod scope;

pub use context::{provide_context, take_context, use_context};
pub use scope::{Scope, on_cleanup, with_scope};
