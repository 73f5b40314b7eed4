//! The provider view that owns safe-area discovery for a subtree.

use waterline_core::{AnyView, Environment, View, With};

use crate::context::SafeAreaContext;
use crate::insets::SafeAreaSnapshot;
use crate::source::InsetSource;
use crate::view::ViewExt;

/// Establishes the safe area for everything below it.
///
/// The outermost provider in a tree *owns* discovery: it creates the shared
/// [`SafeAreaContext`], starts observing the [`InsetSource`] installed in
/// the environment, and injects the context for descendants. Any provider
/// mounted below an owning one detects the inherited context and becomes a
/// pass-through, so wrapping a reusable screen in its own provider is safe
/// and costs nothing extra.
///
/// Ownership is fixed at mount. The subscription lives exactly as long as
/// the provider's subtree; unmounting drops it and stops all publications.
#[derive(Debug)]
#[must_use]
pub struct SafeAreaProvider {
    content: AnyView,
    initial: Option<SafeAreaSnapshot>,
}

impl SafeAreaProvider {
    /// Wraps `content` in a provider.
    pub fn new(content: impl View) -> Self {
        Self {
            content: AnyView::new(content),
            initial: None,
        }
    }

    /// Seeds the context so descendants read a value before the source's
    /// first report, which then replaces the seed.
    ///
    /// Useful when a fresh surface already knows its insets, for example
    /// from a previous session or an embedder handoff.
    pub fn initial(mut self, snapshot: impl Into<SafeAreaSnapshot>) -> Self {
        self.initial = Some(snapshot.into());
        self
    }
}

impl View for SafeAreaProvider {
    fn body(self, env: &Environment) -> impl View {
        if env.contains::<SafeAreaContext>() {
            tracing::debug!("nested safe area provider inherits the enclosing context");
            return self.content;
        }

        let context = self
            .initial
            .map_or_else(SafeAreaContext::new, SafeAreaContext::seeded);

        let subscription = env.get::<InsetSource>().map(|source| {
            let sink = context.clone();
            source.observe(move |event| sink.apply(event))
        });
        if subscription.is_none() {
            tracing::debug!("no inset source installed; safe area stays unresolved");
        }

        AnyView::new(With::new(self.content, context).retain(subscription))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_without_source_still_injects_a_context() {
        let env = Environment::new();
        let resolved = AnyView::new(SafeAreaProvider::new(()).body(&env));

        // Resolve past the retention wrapper, then the injection itself.
        let resolved = AnyView::new(resolved.body(&env));
        let resolved = AnyView::new(resolved.body(&env));
        let metadata = resolved
            .downcast::<waterline_core::Metadata<Environment>>()
            .expect("provider injects a context into the subtree environment");

        let context = metadata
            .value
            .get::<SafeAreaContext>()
            .expect("context installed");
        assert!(!context.resolved());
    }
}
