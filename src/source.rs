//! The inset source contract.
//!
//! A source is whatever produces [`SafeAreaEvent`]s for a surface: the DOM
//! probe backend, or a native embedder relaying platform callbacks. Backends
//! implement [`CustomInsetSource`]; applications install the type-erased
//! [`InsetSource`] into the environment, where an owning
//! [`SafeAreaProvider`](crate::SafeAreaProvider) picks it up at mount.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::fmt;

use waterline_reactive::BoxWatcherGuard;

use crate::insets::SafeAreaEvent;

/// A platform-side producer of safe-area events.
///
/// Implementations perform their one-time setup inside [`observe`]: build
/// whatever measurement machinery the surface needs, register for platform
/// change notifications, and emit an initial reading when one is available
/// right away. The observation ends when the returned guard drops; no event
/// may be delivered after that.
///
/// A source on a surface with nothing to measure (no document, no platform
/// channel) simply never calls `on_event`. Owners cannot distinguish "no
/// reading yet" from "no reading ever", by design.
///
/// [`observe`]: CustomInsetSource::observe
pub trait CustomInsetSource: 'static {
    /// Starts delivering events to `on_event` and returns the guard that
    /// keeps the observation alive.
    fn observe(&self, on_event: impl Fn(SafeAreaEvent) + 'static) -> BoxWatcherGuard;
}

/// Type-erased [`CustomInsetSource`] stored in the environment.
#[derive(Clone)]
pub struct InsetSource(Rc<dyn InsetSourceImpl>);

trait InsetSourceImpl: 'static {
    fn observe(&self, on_event: Box<dyn Fn(SafeAreaEvent)>) -> BoxWatcherGuard;
}

impl<T: CustomInsetSource> InsetSourceImpl for T {
    fn observe(&self, on_event: Box<dyn Fn(SafeAreaEvent)>) -> BoxWatcherGuard {
        CustomInsetSource::observe(self, on_event)
    }
}

impl InsetSource {
    /// Creates a new `InsetSource` from any type implementing
    /// [`CustomInsetSource`].
    pub fn new<T: CustomInsetSource>(source: T) -> Self {
        Self(Rc::new(source))
    }

    /// Starts delivering events to `on_event`.
    ///
    /// The observation lasts until the returned guard is dropped.
    pub fn observe(&self, on_event: impl Fn(SafeAreaEvent) + 'static) -> BoxWatcherGuard {
        self.0.observe(Box::new(on_event))
    }
}

impl fmt::Debug for InsetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsetSource").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insets::EdgeInsets;
    use std::cell::RefCell;

    struct OneShotSource(EdgeInsets);

    impl CustomInsetSource for OneShotSource {
        fn observe(&self, on_event: impl Fn(SafeAreaEvent) + 'static) -> BoxWatcherGuard {
            on_event(SafeAreaEvent::Insets(self.0));
            Box::new(())
        }
    }

    #[test]
    fn erased_source_forwards_events() {
        let source = InsetSource::new(OneShotSource(EdgeInsets::all(4.0)));
        let seen: Rc<RefCell<Vec<SafeAreaEvent>>> = Rc::default();

        let sink = Rc::clone(&seen);
        let _guard = source.observe(move |event| sink.borrow_mut().push(event));

        assert_eq!(
            *seen.borrow(),
            [SafeAreaEvent::Insets(EdgeInsets::all(4.0))]
        );
    }
}
