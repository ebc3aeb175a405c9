#![forbid(unsafe_code)]

//! Host-measured geometry: label boxes and the track rectangle.
//!
//! The engine never measures anything itself. Hosts hand in horizontal
//! extents taken from their own layout system (DOM rects, terminal cells,
//! anything with a left and a right edge) and the engine only compares them.

/// Horizontal extent of a rendered label, measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelBox {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
}

impl LabelBox {
    /// Create a new label box.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Width of the box.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Horizontal-axis overlap check. Touching edges count as overlapping;
    /// there is no gap tolerance.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &LabelBox) -> bool {
        !(self.right < other.left || self.left > other.right)
    }
}

/// Overlap check over possibly-unmeasured boxes.
///
/// Returns `false` when either box is absent: an unmeasured label is
/// conservatively treated as not overlapping, which keeps labels visible
/// until the host has real geometry.
#[inline]
#[must_use]
pub fn boxes_overlap(a: Option<LabelBox>, b: Option<LabelBox>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.overlaps(&b),
        _ => false,
    }
}

/// The track's horizontal placement, in the same coordinate space as
/// pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackRect {
    /// Left edge of the track.
    pub left: f64,
    /// Track width.
    pub width: f64,
}

impl TrackRect {
    /// Create a new track rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}
