//! The view abstraction and its type erasure.

use alloc::boxed::Box;
use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::env::Environment;

/// A declarative piece of the interface tree.
///
/// A view describes itself in terms of other views: [`body`](Self::body)
/// resolves it one step, and a walker repeats that until it reaches a leaf
/// it knows how to handle. Views are consumed by resolution; state that must
/// outlive a single resolution belongs in the environment or in reactive
/// values captured by the view.
pub trait View: 'static {
    /// Resolves this view one step, given the environment assembled by its
    /// ancestors.
    fn body(self, env: &Environment) -> impl View;
}

/// Marker for views handled directly by a rendering backend.
pub trait NativeView: fmt::Debug + 'static {}

/// Wrapper marking a leaf the backend must intercept.
///
/// # Panics
///
/// Resolving the body panics: by the time a walker reaches a `Native`, the
/// backend was expected to have recognized and consumed it.
#[derive(Debug)]
pub struct Native<T: NativeView>(pub T);

impl<T: NativeView> Native<T> {
    /// Wraps a backend-handled view.
    pub const fn new(view: T) -> Self {
        Self(view)
    }
}

impl<T: NativeView> View for Native<T> {
    #[allow(clippy::needless_return, unreachable_code)]
    fn body(self, _env: &Environment) -> impl View {
        panic!(
            "native view ({}) must be handled by a backend",
            type_name::<T>()
        );
        return;
    }
}

crate::raw_view!(());

trait AnyViewImpl {
    fn body(self: Box<Self>, env: &Environment) -> AnyView;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn name(&self) -> &'static str;
}

impl<V: View> AnyViewImpl for V {
    fn body(self: Box<Self>, env: &Environment) -> AnyView {
        AnyView::new((*self).body(env))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn name(&self) -> &'static str {
        type_name::<V>()
    }
}

/// A type-erased view.
///
/// Erasure is idempotent: erasing an `AnyView` yields it back rather than
/// stacking a second box.
pub struct AnyView(Box<dyn AnyViewImpl>);

impl AnyView {
    /// Erases `view`.
    pub fn new<V: View>(view: V) -> Self {
        let any: Box<dyn Any> = Box::new(view);
        match any.downcast::<Self>() {
            Ok(erased) => *erased,
            Err(any) => match any.downcast::<V>() {
                Ok(view) => Self(view),
                // A value downcasts back to its own type.
                Err(_) => unreachable!(),
            },
        }
    }

    /// Attempts to recover the erased view as a concrete type.
    ///
    /// # Errors
    ///
    /// Returns the untouched erased view when the type does not match, so
    /// callers can keep probing.
    pub fn downcast<V: View>(self) -> Result<Box<V>, Self> {
        if self.0.as_any().is::<V>() {
            match self.0.into_any().downcast::<V>() {
                Ok(view) => Ok(view),
                Err(_) => unreachable!(),
            }
        } else {
            Err(self)
        }
    }

    /// The `TypeId` of the erased view.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.0.as_any().type_id()
    }
}

impl View for AnyView {
    fn body(self, env: &Environment) -> impl View {
        self.0.body(env)
    }
}

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyView").field(&self.0.name()).finish()
    }
}

/// Erases a view.
pub fn anyview(view: impl View) -> AnyView {
    AnyView::new(view)
}
