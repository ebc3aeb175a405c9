#![forbid(unsafe_code)]

//! Pointer-gesture plumbing shared by both slider variants.

use rangekit_core::geometry::TrackRect;

/// Which endpoint of a range gesture is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handle {
    From,
    To,
}

/// Transient state for one pointer gesture.
///
/// Created on `start`, dropped on `end`; never persists across gestures.
/// The single variant instantiates this with a unit handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession<H> {
    /// The handle this gesture is moving.
    pub handle: H,
    /// Pointer x at gesture start.
    pub origin_x: f64,
    /// The handle's percent position at gesture start.
    pub origin_percent: f64,
}

impl<H> DragSession<H> {
    pub(crate) fn origin(&self) -> DragOrigin {
        DragOrigin {
            pointer_x: self.origin_x,
            percent: self.origin_percent,
        }
    }
}

/// Where the active gesture started, surfaced in render snapshots so the
/// host can draw a gesture-origin shadow marker.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOrigin {
    /// Pointer x at gesture start.
    pub pointer_x: f64,
    /// The grabbed handle's percent position at gesture start.
    pub percent: f64,
}

/// Percent position of a pointer along the track.
///
/// The pointer offset is clamped into `[0, width]` before converting, so a
/// pointer outside the track maps to the nearest edge. Returns `None` when
/// the track has no width yet (layout not settled) or when a coordinate is
/// non-finite; callers treat both as a no-op move so NaN never reaches the
/// stored value.
pub(crate) fn track_percent(pointer_x: f64, track: TrackRect) -> Option<f64> {
    if !pointer_x.is_finite() || !track.left.is_finite() || !(track.width > 0.0) {
        return None;
    }
    let x = (pointer_x - track.left).clamp(0.0, track.width);
    Some(x / track.width * 100.0)
}
