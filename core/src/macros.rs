/// Implements `Debug` for a type by printing its type name.
///
/// For wrappers over type-erased or closure state, where field-by-field
/// output would expose nothing useful.
#[macro_export]
macro_rules! impl_debug {
    ($ty:ty) => {
        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(core::any::type_name::<Self>())
            }
        }
    };
}

/// Implements a leaf view handled by a rendering backend.
///
/// Implements both [`NativeView`](crate::NativeView) and
/// [`View`](crate::View) for the type; the generated `body` wraps the value
/// in [`Native`](crate::Native) so a tree walker hands it to the backend
/// instead of resolving it further.
#[macro_export]
macro_rules! raw_view {
    ($ty:ty) => {
        impl $crate::NativeView for $ty {}

        impl $crate::View for $ty {
            fn body(self, _env: &$crate::Environment) -> impl $crate::View {
                $crate::Native::new(self)
            }
        }
    };
}
