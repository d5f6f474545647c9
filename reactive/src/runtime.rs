use std::{
    any::{Any, TypeId},
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet},
};

use smallvec::SmallVec;

use crate::id::Id;

pub(crate) type Cleanup = Box<dyn FnOnce()>;

thread_local! {
    pub(crate) static RUNTIME: Runtime = Runtime::new();
}

/// The internal Runtime which stores every live scope, the cleanups bound to
/// them, and the application contexts in a thread local
pub(crate) struct Runtime {
    pub(crate) current_scope: Cell<Option<Id>>,
    pub(crate) scopes: RefCell<HashSet<Id>>,
    pub(crate) children: RefCell<HashMap<Id, Vec<Id>>>,
    pub(crate) parents: RefCell<HashMap<Id, Id>>,
    pub(crate) cleanups: RefCell<HashMap<Id, SmallVec<[Cleanup; 4]>>>,
    pub(crate) contexts: RefCell<HashMap<TypeId, Box<dyn Any>>>,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    pub(crate) fn new() -> Self {
        Self {
            current_scope: Cell::new(None),
            scopes: Default::default(),
            children: Default::default(),
            parents: Default::default(),
            cleanups: Default::default(),
            contexts: Default::default(),
        }
    }
}
