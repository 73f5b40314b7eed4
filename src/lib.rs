#![doc = include_str!("../README.md")]

extern crate alloc;

mod context;
mod edges;
mod error;
mod insets;
mod padding;
mod provider;
mod source;
pub mod tree;
mod view;

#[cfg(test)]
mod tests;

pub mod prelude {
    //! Commonly used traits and types for a single import.
    //!
    //! # Example
    //!
    //! ```rust
    //! use waterline::prelude::*;
    //!
    //! fn screen() -> impl View {
    //!     SafeAreaProvider::new(().safe_area())
    //! }
    //! ```
    pub use super::*;
}

pub use context::{SafeAreaContext, safe_area, try_safe_area};
pub use edges::EdgeSet;
pub use error::SafeAreaError;
pub use insets::{EdgeInsets, SafeAreaEvent, SafeAreaSnapshot, SurfaceSize};
pub use padding::{InsetPadding, SafeAreaView};
pub use provider::SafeAreaProvider;
pub use source::{CustomInsetSource, InsetSource};
#[doc(inline)]
pub use tree::{MountedTree, PaddingSite, mount};
pub use view::ViewExt;

#[doc(inline)]
pub use waterline_core::{
    AnyView, Environment, Metadata, MetadataKey, Native, NativeView, Retain, View, With, anyview,
    impl_debug, raw_view,
};

pub use waterline_reactive as reactive;
#[doc(inline)]
pub use reactive::{Computed, Container, Signal, SignalExt};

pub use tracing as log;
