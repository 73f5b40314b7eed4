//! The [`Signal`] trait and its combinators.

use alloc::rc::Rc;
use core::fmt;

use crate::computed::Computed;
use crate::watcher::{Context, WatcherGuard};

/// A readable, watchable source of values.
///
/// Signals are cheap to clone; clones observe the same underlying source.
pub trait Signal: Clone + 'static {
    /// The value this signal produces.
    type Output;

    /// The guard type keeping a watcher registered.
    type Guard: WatcherGuard;

    /// Returns the current value.
    fn get(&self) -> Self::Output;

    /// Registers `watcher` for every subsequent publication.
    ///
    /// The registration lasts until the returned guard is dropped.
    fn watch(&self, watcher: impl Fn(Context<Self::Output>) + 'static) -> Self::Guard;
}

/// Combinators available on every signal.
pub trait SignalExt: Signal {
    /// Derives a signal by applying `f` to every produced value.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U + 'static,
        U: 'static,
    {
        Map::new(self, f)
    }

    /// Erases this signal into a [`Computed`].
    fn computed(self) -> Computed<Self::Output>
    where
        Self: Sized,
        Self::Output: 'static,
    {
        Computed::new(self)
    }
}

impl<S: Signal> SignalExt for S {}

/// Conversion into a type-erased, read-only signal.
pub trait IntoComputed<T>: Sized {
    /// Erases this value into a [`Computed`].
    fn into_computed(self) -> Computed<T>;
}

impl<S, T> IntoComputed<T> for S
where
    S: Signal<Output = T>,
    T: 'static,
{
    fn into_computed(self) -> Computed<T> {
        Computed::new(self)
    }
}

/// A signal that always yields the same value and never notifies.
#[derive(Debug, Clone)]
pub struct Constant<T>(T);

impl<T> Constant<T> {
    /// Wraps a plain value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T: Clone + 'static> Signal for Constant<T> {
    type Output = T;
    type Guard = ();

    fn get(&self) -> T {
        self.0.clone()
    }

    fn watch(&self, _watcher: impl Fn(Context<T>) + 'static) -> Self::Guard {}
}

/// Wraps a plain value as a constant signal.
pub fn constant<T: Clone + 'static>(value: T) -> Constant<T> {
    Constant::new(value)
}

/// Implements [`Signal`] for plain value types, treating each value as a
/// constant signal of itself. This is what lets APIs accept
/// `impl IntoComputed<T>` and be called with a bare `T`.
#[macro_export]
macro_rules! impl_constant {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::Signal for $ty {
            type Output = Self;
            type Guard = ();

            fn get(&self) -> Self::Output {
                self.clone()
            }

            fn watch(
                &self,
                _watcher: impl Fn($crate::Context<Self::Output>) + 'static,
            ) -> Self::Guard {
            }
        }
    )*};
}

impl_constant!(bool, i32, i64, u32, u64, usize, f32, f64);

/// Signal produced by [`SignalExt::map`].
pub struct Map<S, F> {
    source: S,
    f: Rc<F>,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(source: S, f: F) -> Self {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            f: Rc::clone(&self.f),
        }
    }
}

impl<S, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

impl<S, F, U> Signal for Map<S, F>
where
    S: Signal,
    F: Fn(S::Output) -> U + 'static,
    U: 'static,
{
    type Output = U;
    type Guard = S::Guard;

    fn get(&self) -> U {
        (self.f)(self.source.get())
    }

    fn watch(&self, watcher: impl Fn(Context<U>) + 'static) -> Self::Guard {
        let f = Rc::clone(&self.f);
        self.source.watch(move |ctx| watcher(ctx.map(|value| f(value))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use core::cell::Cell;

    #[test]
    fn plain_values_are_constant_signals() {
        assert_eq!(7.5f32.get(), 7.5);
        assert!(true.get());
    }

    #[test]
    fn constant_ignores_watchers() {
        let signal = constant(3);
        signal.watch(|_| panic!("constant signals never notify"));
        assert_eq!(signal.get(), 3);
    }

    #[test]
    fn map_follows_source() {
        let source = Container::new(2);
        let doubled = source.clone().map(|value| value * 2);
        assert_eq!(doubled.get(), 4);

        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _guard = doubled.watch(move |ctx| sink.set(*ctx.value()));

        source.set(10);
        assert_eq!(seen.get(), 20);
    }
}
