use std::any::{Any, TypeId};

use crate::runtime::RUNTIME;

/// Try to retrieve a stored Context value.
/// You can store a Context value anywhere, and retrieve it from anywhere afterwards.
///
/// # Example
/// At application start:
/// ```rust
/// # use seuil_reactive::provide_context;
/// provide_context(42);
/// provide_context(String::from("Hello world"));
/// ```
///
/// And so in a component you can retrieve each context data by specifying the type:
/// ```rust
/// # use seuil_reactive::use_context;
/// let foo: Option<i32> = use_context();
/// let bar: Option<String> = use_context();
/// ```
pub fn use_context<T>() -> Option<T>
where
    T: Clone + 'static,
{
    let ty = TypeId::of::<T>();
    RUNTIME.with(|runtime| {
        let contexts = runtime.contexts.borrow();
        contexts
            .get(&ty)
            .and_then(|val| val.downcast_ref::<T>())
            .cloned()
    })
}

/// Sets a context value, replacing any previous value of the same type.
/// The stored value can be retrieved from anywhere by using [use_context](use_context)
pub fn provide_context<T>(value: T)
where
    T: Clone + 'static,
{
    let id = value.type_id();

    RUNTIME.with(|runtime| {
        let mut contexts = runtime.contexts.borrow_mut();
        contexts.insert(id, Box::new(value) as Box<dyn Any>);
    });
}

/// Removes and returns the context value of type `T`.
pub fn take_context<T>() -> Option<T>
where
    T: 'static,
{
    let ty = TypeId::of::<T>();
    let value = RUNTIME.with(|runtime| runtime.contexts.borrow_mut().remove(&ty))?;
    value.downcast::<T>().ok().map(|value| *value)
}
