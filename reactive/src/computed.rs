//! Type-erased, read-only signals.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use crate::signal::{Constant, Signal};
use crate::watcher::{BoxWatcherGuard, Context};

/// A read-only signal with its concrete source erased.
///
/// `Computed` is the currency of component configuration: producers build an
/// arbitrary signal chain and hand it over as a single cloneable value.
pub struct Computed<T>(Rc<dyn ComputedImpl<T>>);

trait ComputedImpl<T> {
    fn get(&self) -> T;
    fn watch(&self, watcher: Box<dyn Fn(Context<T>)>) -> BoxWatcherGuard;
}

impl<S, T> ComputedImpl<T> for S
where
    S: Signal<Output = T>,
    T: 'static,
{
    fn get(&self) -> T {
        Signal::get(self)
    }

    fn watch(&self, watcher: Box<dyn Fn(Context<T>)>) -> BoxWatcherGuard {
        Box::new(Signal::watch(self, move |ctx| watcher(ctx)))
    }
}

impl<T: 'static> Computed<T> {
    /// Erases `signal`.
    pub fn new(signal: impl Signal<Output = T>) -> Self {
        Self(Rc::new(signal))
    }

    /// A computed signal that always yields `value`.
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(Constant::new(value))
    }
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

impl<T: 'static> Signal for Computed<T> {
    type Output = T;
    type Guard = BoxWatcherGuard;

    fn get(&self) -> T {
        self.0.get()
    }

    fn watch(&self, watcher: impl Fn(Context<T>) + 'static) -> Self::Guard {
        self.0.watch(Box::new(watcher))
    }
}

#[cfg(test)]
mod tests {
    use super::Computed;
    use crate::container::Container;
    use crate::signal::{IntoComputed, Signal, SignalExt};
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn constant_yields_value() {
        let computed = Computed::constant(11);
        assert_eq!(computed.get(), 11);
    }

    #[test]
    fn erased_signal_still_notifies() {
        let source = Container::new(1);
        let computed = source.clone().map(|value| value + 1).computed();
        assert_eq!(computed.get(), 2);

        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _guard = computed.watch(move |ctx| sink.set(*ctx.value()));

        source.set(41);
        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn into_computed_accepts_plain_values() {
        let computed: Computed<bool> = true.into_computed();
        assert!(computed.get());
    }
}
