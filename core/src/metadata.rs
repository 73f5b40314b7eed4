//! Typed attachments on subtrees.

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::env::Environment;
use crate::view::{AnyView, View};

/// Marker for types that may be attached to a view as metadata.
pub trait MetadataKey: 'static {}

impl MetadataKey for Environment {}
impl MetadataKey for Retain {}

/// A view carrying a typed attachment for whoever walks the tree.
///
/// A walker that understands `T` consumes the attachment; one that does not
/// resolves straight to the content, dropping the value.
pub struct Metadata<T: MetadataKey> {
    /// The wrapped content.
    pub content: AnyView,
    /// The attached value.
    pub value: T,
}

impl<T: MetadataKey> Metadata<T> {
    /// Attaches `value` to `content`.
    pub fn new(content: impl View, value: T) -> Self {
        Self {
            content: AnyView::new(content),
            value,
        }
    }
}

impl<T: MetadataKey> fmt::Debug for Metadata<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

impl<T: MetadataKey> View for Metadata<T> {
    fn body(self, _env: &Environment) -> impl View {
        self.content
    }
}

/// Keeps an arbitrary value alive for as long as the subtree it is attached
/// to stays mounted.
///
/// The usual cargo is a watcher guard or a platform subscription: attach it
/// with [`retain`](Retain::new) and its drop runs at unmount, not before.
pub struct Retain(Box<dyn Any>);

impl Retain {
    /// Wraps a value to keep alive.
    pub fn new(value: impl Any) -> Self {
        Self(Box::new(value))
    }
}

crate::impl_debug!(Retain);

/// Environment injection: provides a value to every descendant of a subtree.
///
/// Resolves to a [`Metadata<Environment>`] carrying the extended
/// environment; the walker swaps it in for the subtree.
pub struct With<V, T> {
    content: V,
    value: T,
}

impl<V: View, T: 'static> With<V, T> {
    /// Provides `value` to the subtree rooted at `content`.
    pub const fn new(content: V, value: T) -> Self {
        Self { content, value }
    }
}

impl<V, T> fmt::Debug for With<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

impl<V: View, T: 'static> View for With<V, T> {
    fn body(self, env: &Environment) -> impl View {
        Metadata::new(self.content, env.clone().with(self.value))
    }
}
