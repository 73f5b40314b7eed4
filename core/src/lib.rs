//! Core composition substrate for waterline.
//!
//! Three pieces live here, and everything else in the workspace is built on
//! them:
//!
//! - [`Environment`]: a typemap of values flowing down the composition tree,
//!   the explicit dependency-injection channel between ancestors and
//!   descendants.
//! - [`View`] and [`AnyView`]: the declarative tree itself. A view resolves
//!   one step at a time through [`View::body`] until it reaches a leaf a
//!   backend knows how to handle ([`Native`]).
//! - [`Metadata`] wrappers: typed attachments a tree walker consumes, most
//!   importantly [`With`] (environment injection for a subtree) and
//!   [`Retain`] (tying a resource's lifetime to a subtree's mounted
//!   lifetime).

#![no_std]

extern crate alloc;

pub mod env;
mod macros;
pub mod metadata;
pub mod view;

pub use env::Environment;
pub use metadata::{Metadata, MetadataKey, Retain, With};
pub use view::{AnyView, Native, NativeView, View, anyview};

pub use waterline_reactive as reactive;
#[doc(inline)]
pub use reactive::{Computed, Container, Signal};
