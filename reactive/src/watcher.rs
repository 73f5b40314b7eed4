//! Watcher registration, notification payloads, and guard types.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;
use core::ops::Deref;

/// Payload handed to a watcher when a signal publishes a value.
#[derive(Debug, Clone, Copy)]
pub struct Context<T> {
    value: T,
}

impl<T> Context<T> {
    /// Wraps a freshly published value.
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// A shared reference to the published value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the context, returning the published value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transforms the published value, keeping the context shape.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Context<U> {
        Context {
            value: f(self.value),
        }
    }

    /// Reborrows the published value, e.g. `Context<Vec<T>>` as `Context<&[T]>`.
    pub fn as_deref(&self) -> Context<&T::Target>
    where
        T: Deref,
    {
        Context {
            value: &*self.value,
        }
    }
}

/// Marker for values that keep an observation alive.
///
/// Dropping the guard ends the observation; there is no other cancellation
/// primitive.
pub trait WatcherGuard: 'static {}

/// A type-erased watcher guard.
pub type BoxWatcherGuard = Box<dyn WatcherGuard>;

impl WatcherGuard for () {}
impl WatcherGuard for Box<dyn WatcherGuard> {}
impl<T: WatcherGuard> WatcherGuard for Option<T> {}
impl<T: WatcherGuard> WatcherGuard for Vec<T> {}
impl<A: WatcherGuard, B: WatcherGuard> WatcherGuard for (A, B) {}

type WatcherId = u64;

struct Registry<T> {
    entries: RefCell<BTreeMap<WatcherId, Rc<dyn Fn(Context<T>)>>>,
    next_id: Cell<WatcherId>,
}

/// A shared set of watchers for one value type.
pub(crate) struct Watchers<T> {
    inner: Rc<Registry<T>>,
}

impl<T> Clone for Watchers<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Watchers<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Registry {
                entries: RefCell::new(BTreeMap::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn register(&self, watcher: impl Fn(Context<T>) + 'static) -> WatchGuard<T> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .entries
            .borrow_mut()
            .insert(id, Rc::new(watcher));
        WatchGuard {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn notify(&self, value: &T)
    where
        T: Clone,
    {
        // Snapshot the entries so watchers may register or drop guards
        // while the notification runs.
        let entries: Vec<Rc<dyn Fn(Context<T>)>> =
            self.inner.entries.borrow().values().cloned().collect();
        for watcher in entries {
            watcher(Context::new(value.clone()));
        }
    }
}

/// Keeps one watcher registered; dropping it removes the registration.
pub struct WatchGuard<T> {
    registry: Weak<Registry<T>>,
    id: WatcherId,
}

impl<T> fmt::Debug for WatchGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchGuard").field("id", &self.id).finish()
    }
}

impl<T> Drop for WatchGuard<T> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.entries.borrow_mut().remove(&self.id);
        }
    }
}

impl<T: 'static> WatcherGuard for WatchGuard<T> {}
