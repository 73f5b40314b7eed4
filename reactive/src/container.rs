//! Owning reactive storage.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::signal::Signal;
use crate::watcher::{Context, WatchGuard, Watchers};

/// A reactive cell that owns a current value and notifies watchers on every
/// write.
///
/// Clones share the same storage and watcher set, so a `Container` doubles as
/// the broadcast handle for whatever state it holds. Writes always notify,
/// even when the new value equals the old one.
pub struct Container<T> {
    value: Rc<RefCell<T>>,
    watchers: Watchers<T>,
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            watchers: self.watchers.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Container").field(&*self.value.borrow()).finish()
    }
}

impl<T: Default> Default for Container<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Container<T> {
    /// Creates a container holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            watchers: Watchers::new(),
        }
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replaces the current value and notifies every watcher.
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        *self.value.borrow_mut() = value.clone();
        self.watchers.notify(&value);
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Registers a watcher for every subsequent write.
    pub fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> WatchGuard<T> {
        self.watchers.register(watcher)
    }
}

impl<T: Clone + 'static> Signal for Container<T> {
    type Output = T;
    type Guard = WatchGuard<T>;

    fn get(&self) -> T {
        Self::get(self)
    }

    fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> Self::Guard {
        Self::watch(self, watcher)
    }
}
