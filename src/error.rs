//! Consumer-facing errors.

use thiserror::Error;

/// Why a safe-area read could not produce a value.
///
/// Both variants are usage-time conditions, not platform failures: platform
/// problems are absorbed inside the sources and never surface here. A zero
/// inset is a legitimate platform report, so neither condition is ever
/// substituted with a zero-valued reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SafeAreaError {
    /// No provider is mounted above the reading view.
    #[error("no safe area value available; mount a `SafeAreaProvider` above this view")]
    MissingProvider,

    /// A provider is mounted, but its source has not reported a value yet
    /// (or no source is installed and it never will).
    #[error("safe area not resolved yet; the provider's inset source has not reported a value")]
    Unresolved,
}
