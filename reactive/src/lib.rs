//! Reactive signal primitives for waterline.
//!
//! The model is deliberately small and single-threaded: a [`Container`] owns
//! a current value and notifies registered watchers on every write, a
//! [`Computed`] is a read-only, type-erased view of any signal, and watcher
//! registrations live exactly as long as the guard returned by
//! [`Signal::watch`].
//!
//! Notification is unconditional: publishing a value equal to the previous
//! one still reaches every watcher. Sources that settle repeatedly on the
//! same reading rely on this; deduplication belongs to whoever needs it.

#![no_std]

extern crate alloc;

pub mod computed;
pub mod container;
pub mod signal;
pub mod watcher;

pub use computed::Computed;
pub use container::Container;
pub use signal::{Constant, IntoComputed, Map, Signal, SignalExt, constant};
pub use watcher::{BoxWatcherGuard, Context, WatchGuard, WatcherGuard};
