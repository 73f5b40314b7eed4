//! Edge selection for consumer views.

/// Selects which edges of a view receive the safe-area padding.
///
/// Used with [`SafeAreaView`](crate::SafeAreaView) to pad only some sides,
/// letting the others extend into the obscured regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSet {
    /// Pad the top edge.
    pub top: bool,
    /// Pad the right edge.
    pub right: bool,
    /// Pad the bottom edge.
    pub bottom: bool,
    /// Pad the left edge.
    pub left: bool,
}

impl EdgeSet {
    /// Every edge (the default).
    pub const ALL: Self = Self::new(true, true, true, true);

    /// No edges.
    pub const NONE: Self = Self::new(false, false, false, false);

    /// Left and right edges only.
    pub const HORIZONTAL: Self = Self::new(false, true, false, true);

    /// Top and bottom edges only.
    pub const VERTICAL: Self = Self::new(true, false, true, false);

    /// Top edge only.
    pub const TOP: Self = Self::new(true, false, false, false);

    /// Bottom edge only.
    pub const BOTTOM: Self = Self::new(false, false, true, false);

    /// Creates a custom edge set.
    #[must_use]
    pub const fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Whether any edge is selected.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }

    /// Whether every edge is selected.
    #[must_use]
    pub const fn all(&self) -> bool {
        self.top && self.right && self.bottom && self.left
    }
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self::ALL
    }
}
