//! Extension methods available on every view.

use waterline_core::{AnyView, Metadata, MetadataKey, Retain, View, With};

use crate::padding::SafeAreaView;

/// Extension trait adding the kit's fluent modifiers to every view.
pub trait ViewExt: View + Sized {
    /// Attaches metadata to this view.
    fn metadata<T: MetadataKey>(self, metadata: T) -> Metadata<T> {
        Metadata::new(self, metadata)
    }

    /// Associates a value with this view's subtree in the environment.
    fn with<T: 'static>(self, value: T) -> With<Self, T> {
        With::new(self, value)
    }

    /// Keeps `value` alive for as long as this view stays mounted.
    fn retain<T: 'static>(self, value: T) -> Metadata<Retain> {
        Metadata::new(self, Retain::new(value))
    }

    /// Erases this view.
    fn anyview(self) -> AnyView {
        AnyView::new(self)
    }

    /// Pads this view by the current safe-area insets.
    ///
    /// Configure sides and explicit offsets on the returned
    /// [`SafeAreaView`].
    fn safe_area(self) -> SafeAreaView {
        SafeAreaView::new(self)
    }
}

impl<V: View + Sized> ViewExt for V {}
