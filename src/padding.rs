//! Applying the safe area as directional padding.

use waterline_core::{AnyView, Environment, View, raw_view};
use waterline_reactive::{Computed, SignalExt};

use crate::context::SafeAreaContext;
use crate::edges::EdgeSet;
use crate::error::SafeAreaError;
use crate::insets::EdgeInsets;

/// Renderer-facing padding leaf.
///
/// Carries the resolved padding as a live signal so later inset changes flow
/// to the renderer without re-running consumer composition.
#[derive(Debug)]
#[must_use]
pub struct InsetPadding {
    /// Padding to apply around the content, one value per edge.
    pub padding: Computed<EdgeInsets>,
    /// The padded content.
    pub content: AnyView,
}

raw_view!(InsetPadding);

/// Pads its content by the current safe-area insets.
///
/// By default every edge receives its inset. [`edges`](Self::edges) limits
/// which sides participate, and the per-side `padding_*` builders replace
/// the inset on that side with a caller-chosen offset.
///
/// Until the enclosing provider resolves, the applied padding is zero on
/// every non-overridden side; it snaps to the real insets on the first
/// report.
///
/// # Panics
///
/// Resolving the body panics when no [`SafeAreaProvider`] encloses this
/// view.
///
/// [`SafeAreaProvider`]: crate::SafeAreaProvider
#[derive(Debug)]
#[must_use]
pub struct SafeAreaView {
    content: AnyView,
    edges: EdgeSet,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
    left: Option<f32>,
}

impl SafeAreaView {
    /// Wraps `content` in safe-area padding on every edge.
    pub fn new(content: impl View) -> Self {
        Self {
            content: AnyView::new(content),
            edges: EdgeSet::ALL,
            top: None,
            right: None,
            bottom: None,
            left: None,
        }
    }

    /// Selects which edges receive the inset padding.
    pub const fn edges(mut self, edges: EdgeSet) -> Self {
        self.edges = edges;
        self
    }

    /// Replaces the top inset with an explicit padding.
    pub const fn padding_top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    /// Replaces the right inset with an explicit padding.
    pub const fn padding_right(mut self, value: f32) -> Self {
        self.right = Some(value);
        self
    }

    /// Replaces the bottom inset with an explicit padding.
    pub const fn padding_bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }

    /// Replaces the left inset with an explicit padding.
    pub const fn padding_left(mut self, value: f32) -> Self {
        self.left = Some(value);
        self
    }
}

fn side(explicit: Option<f32>, selected: bool, inset: f32) -> f32 {
    explicit.unwrap_or(if selected { inset } else { 0.0 })
}

impl View for SafeAreaView {
    fn body(self, env: &Environment) -> impl View {
        let Some(context) = env.get::<SafeAreaContext>() else {
            panic!("{}", SafeAreaError::MissingProvider)
        };

        let Self {
            content,
            edges,
            top,
            right,
            bottom,
            left,
        } = self;
        let padding = context
            .signal()
            .map(move |snapshot| {
                let insets = snapshot.map_or(EdgeInsets::ZERO, |s| s.insets);
                EdgeInsets {
                    top: side(top, edges.top, insets.top),
                    right: side(right, edges.right, insets.right),
                    bottom: side(bottom, edges.bottom, insets.bottom),
                    left: side(left, edges.left, insets.left),
                }
            })
            .computed();

        InsetPadding { padding, content }
    }
}
