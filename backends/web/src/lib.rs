#![allow(clippy::module_name_repetitions)]

//! Browser backend for `waterline`.
//!
//! Safe-area insets only exist in CSS on the web, so this crate discovers
//! them with a hidden probe element whose paddings are bound to the
//! platform's inset functions. [`DomInsetSource`] packages the probe as an
//! inset source for [`waterline::SafeAreaProvider`]; everything else in here
//! is the plumbing that keeps the probe honest across engines.
//!
//! The crate targets `wasm32-unknown-unknown` and degrades gracefully
//! anywhere the DOM is missing, such as server-side rendering.

mod error;
mod probe;
mod source;

pub use error::WebError;
pub use probe::InsetProbe;
pub use source::DomInsetSource;

/// Installs the panic hook that forwards panics to the browser console.
///
/// Call once at startup, before mounting any tree.
pub fn init() {
    console_error_panic_hook::set_once();
}
