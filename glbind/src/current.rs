//! The context installed for the calling thread.
//!
//! Each thread owns its slot; contexts move in and out of it but are never
//! shared between threads here.

use crate::context::Context;
use std::cell::RefCell;

thread_local! {
    static CURRENT: RefCell<Option<Context>> = const { RefCell::new(None) };
}

/// Installs `context` for this thread, returning the one it replaces.
pub fn make_current(context: Context) -> Option<Context> {
    CURRENT.with(|current| current.borrow_mut().replace(context))
}

/// Runs `f` with this thread's context, if one is installed.
///
/// # Panics
///
/// When `f` itself calls [`make_current`] or [`take_current`].
pub fn with_current<R>(f: impl FnOnce(&Context) -> R) -> Option<R> {
    CURRENT.with(|current| current.borrow().as_ref().map(f))
}

pub fn take_current() -> Option<Context> {
    CURRENT.with(|current| current.borrow_mut().take())
}
