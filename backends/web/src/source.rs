use tracing::warn;
use waterline::reactive::BoxWatcherGuard;
use waterline::{CustomInsetSource, SafeAreaEvent};

use crate::probe::InsetProbe;

/// The browser-backed inset source.
///
/// Install it in the environment that hosts a
/// [`SafeAreaProvider`](waterline::SafeAreaProvider) and each tree's
/// electing provider mounts one [`InsetProbe`] for its lifetime:
///
/// ```no_run
/// use waterline::prelude::*;
/// use waterline_web::DomInsetSource;
///
/// let env = Environment::new().with(InsetSource::new(DomInsetSource::new()));
/// let tree = mount(&env, SafeAreaProvider::new(().safe_area()));
/// # let _ = tree;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DomInsetSource;

impl DomInsetSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CustomInsetSource for DomInsetSource {
    fn observe(&self, on_event: impl Fn(SafeAreaEvent) + 'static) -> BoxWatcherGuard {
        match InsetProbe::mount(on_event) {
            Ok(probe) => Box::new(probe),
            Err(error) => {
                // Headless documents and server-side rendering get no probe;
                // the safe area simply stays unresolved there.
                warn!(%error, "safe area probing unavailable on this surface");
                Box::new(())
            }
        }
    }
}
