//! Safe-area value types.
//!
//! Everything here is a plain immutable value: sources produce
//! [`SafeAreaEvent`]s, a provider folds them into [`SafeAreaSnapshot`]s, and
//! consumers only ever read fully-formed snapshots. Partial readings are not
//! representable; an update replaces the previous snapshot wholesale.

/// Distances from each edge of the visible area to the nearest unobstructed
/// content, in logical units of the rendering surface.
///
/// All four sides are always present. A side the platform could not resolve
/// reads as `0`, which is indistinguishable from a platform that genuinely
/// reports no inset there.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f32,
    /// Inset from the right edge.
    pub right: f32,
    /// Inset from the bottom edge.
    pub bottom: f32,
    /// Inset from the left edge.
    pub left: f32,
}

impl EdgeInsets {
    /// Zero inset on every edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates insets with explicit edges.
    #[must_use]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// Logical size of the measured layout region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSize {
    /// Width of the region.
    pub width: f32,
    /// Height of the region.
    pub height: f32,
}

impl SurfaceSize {
    /// Creates a size from explicit dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One fully-resolved reading of the safe area.
///
/// Exactly one snapshot is active per provider subtree at any time. The
/// surface size rides along when the source reports one; it never exists
/// without insets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafeAreaSnapshot {
    /// The resolved edge insets.
    pub insets: EdgeInsets,
    /// Size of the measured surface, when the source reported one.
    pub surface: Option<SurfaceSize>,
}

impl SafeAreaSnapshot {
    /// Creates an insets-only snapshot.
    #[must_use]
    pub const fn new(insets: EdgeInsets) -> Self {
        Self {
            insets,
            surface: None,
        }
    }

    /// Returns this snapshot with the surface size attached.
    #[must_use]
    pub const fn with_surface(mut self, surface: SurfaceSize) -> Self {
        self.surface = Some(surface);
        self
    }
}

impl From<EdgeInsets> for SafeAreaSnapshot {
    fn from(insets: EdgeInsets) -> Self {
        Self::new(insets)
    }
}

/// An inbound report from an inset source.
///
/// The provider treats every source identically, whether the event came from
/// the DOM probe backend or a native embedder relaying platform callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SafeAreaEvent {
    /// The platform reported new edge insets.
    Insets(EdgeInsets),
    /// The measured surface was laid out at a new size.
    Frame(SurfaceSize),
}
