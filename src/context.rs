//! Shared safe-area state and the environment accessors that read it.

use alloc::rc::Rc;
use core::cell::Cell;

use waterline_core::Environment;
use waterline_reactive::{Computed, Container, SignalExt};

use crate::error::SafeAreaError;
use crate::insets::{EdgeInsets, SafeAreaEvent, SafeAreaSnapshot, SurfaceSize};

/// The safe-area state shared by one provider subtree.
///
/// The owning [`SafeAreaProvider`](crate::SafeAreaProvider) creates the
/// context, installs it into the environment, and folds source events into
/// it; descendants read it through [`safe_area`] and [`try_safe_area`].
/// Clones share storage, so a context handed to a source callback publishes
/// to every reader below the provider.
///
/// A context starts *unresolved*: no snapshot is available until the source
/// reports insets for the first time. Resolution is permanent; afterwards an
/// update replaces the previous snapshot wholesale.
#[derive(Debug, Clone, Default)]
pub struct SafeAreaContext {
    snapshot: Container<Option<SafeAreaSnapshot>>,
    frame: Rc<Cell<Option<SurfaceSize>>>,
}

impl SafeAreaContext {
    /// Creates an unresolved context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context already resolved to `snapshot`.
    ///
    /// Readers see the seed immediately; the first source report replaces it.
    #[must_use]
    pub fn seeded(snapshot: impl Into<SafeAreaSnapshot>) -> Self {
        let snapshot = snapshot.into();
        Self {
            snapshot: Container::new(Some(snapshot)),
            frame: Rc::new(Cell::new(snapshot.surface)),
        }
    }

    /// Returns the current snapshot, or `None` while unresolved.
    #[must_use]
    pub fn snapshot(&self) -> Option<SafeAreaSnapshot> {
        self.snapshot.get()
    }

    /// Whether the source has reported at least one inset value.
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.snapshot.with(Option::is_some)
    }

    /// The snapshot as a watchable signal.
    #[must_use]
    pub fn signal(&self) -> Computed<Option<SafeAreaSnapshot>> {
        self.snapshot.clone().computed()
    }

    /// Folds one source event into the context.
    ///
    /// Inset reports resolve the context, carrying the most recent frame
    /// along. A frame report alone never fabricates a snapshot; it is held
    /// back until insets arrive, and refreshes the published snapshot when
    /// one is already out.
    pub fn apply(&self, event: SafeAreaEvent) {
        match event {
            SafeAreaEvent::Insets(insets) => {
                let snapshot = SafeAreaSnapshot {
                    insets,
                    surface: self.frame.get(),
                };
                tracing::trace!(?snapshot, "publishing safe area snapshot");
                self.snapshot.set(Some(snapshot));
            }
            SafeAreaEvent::Frame(surface) => {
                self.frame.set(Some(surface));
                if let Some(current) = self.snapshot.get() {
                    self.snapshot.set(Some(current.with_surface(surface)));
                }
            }
        }
    }
}

/// Reads the safe-area insets from the environment.
///
/// Returns the insets of the nearest enclosing provider as a live signal.
/// The signal keeps following later source reports, so a platform change
/// (rotation, browser chrome appearing) flows through without remounting.
///
/// # Errors
///
/// [`SafeAreaError::MissingProvider`] when no provider encloses this view,
/// and [`SafeAreaError::Unresolved`] when the provider's source has not
/// reported yet.
pub fn try_safe_area(env: &Environment) -> Result<Computed<EdgeInsets>, SafeAreaError> {
    let context = env
        .get::<SafeAreaContext>()
        .ok_or(SafeAreaError::MissingProvider)?;
    if !context.resolved() {
        return Err(SafeAreaError::Unresolved);
    }
    Ok(context
        .signal()
        .map(|snapshot| snapshot.map_or(EdgeInsets::ZERO, |s| s.insets))
        .computed())
}

/// Reads the safe-area insets from the environment.
///
/// # Panics
///
/// Panics when no provider encloses this view or its source has not reported
/// yet; use [`try_safe_area`] to handle those cases.
#[must_use]
pub fn safe_area(env: &Environment) -> Computed<EdgeInsets> {
    match try_safe_area(env) {
        Ok(insets) => insets,
        Err(error) => panic!("{error}"),
    }
}
