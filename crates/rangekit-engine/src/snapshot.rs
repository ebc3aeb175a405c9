#![forbid(unsafe_code)]

//! Render-state snapshots returned to the host after each mutation.
//!
//! The engine never pushes updates; the host calls `render_state()` after
//! every mutating call and redraws from the snapshot. All geometry is in
//! percent of track width, all label text is fully affixed and grouped.

use crate::drag::DragOrigin;
use crate::labels::LabelVisibility;

/// Filled-bar geometry in percent of track width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarGeometry {
    /// Left edge of the filled bar.
    pub left: f64,
    /// Width of the filled bar.
    pub width: f64,
}

/// Snapshot for a single-value slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleRenderState {
    /// Handle position.
    pub percent: f64,
    /// Filled bar from the track start to the handle.
    pub bar: BarGeometry,
    /// Affixed text of the value label.
    pub value_label: String,
    /// Affixed text of the default min edge label.
    pub min_label: String,
    /// Affixed text of the default max edge label.
    pub max_label: String,
    /// Outcome of the last `measure_labels` call.
    pub visibility: LabelVisibility,
    /// Present while a gesture is active.
    pub drag_origin: Option<DragOrigin>,
    /// Plain serialization for a hidden form field.
    pub form_value: String,
}

/// Snapshot for a range slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeRenderState {
    /// `From` handle position.
    pub from_percent: f64,
    /// `To` handle position.
    pub to_percent: f64,
    /// Filled bar between the two handles.
    pub bar: BarGeometry,
    /// Affixed text of the from-value label.
    pub from_label: String,
    /// Affixed text of the to-value label.
    pub to_label: String,
    /// Text shown in place of both value labels when they collapse.
    pub merged_label: String,
    /// Midpoint the merged label is centered on.
    pub merged_percent: f64,
    /// Affixed text of the default min edge label.
    pub min_label: String,
    /// Affixed text of the default max edge label.
    pub max_label: String,
    /// Outcome of the last `measure_labels` call.
    pub visibility: LabelVisibility,
    /// Present while a gesture is active.
    pub drag_origin: Option<DragOrigin>,
    /// `"from,to"` serialization for a hidden form field.
    pub form_value: String,
}
