#![forbid(unsafe_code)]

//! Label-overlap resolution.
//!
//! Runs after every value or layout change, over label boxes measured by
//! the host. Two tiers for the range variant: first decide whether the two
//! value labels collapse into one merged label, then check the min/max edge
//! labels against *whichever* label is actually shown on that side — the
//! merged label when collapsed, the individual from/to label otherwise.
//! Checking against the wrong tier produces visible flicker.

use rangekit_core::geometry::{LabelBox, boxes_overlap};

/// Derived label visibility and merge flags.
///
/// A pure function of the most recently measured boxes; it has no lifecycle
/// of its own and is recomputed on every `measure_labels` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelVisibility {
    /// Hide the default min edge label.
    pub hide_min_label: bool,
    /// Hide the default max edge label.
    pub hide_max_label: bool,
    /// Replace the two value labels with one merged label (range only).
    pub merge_value_labels: bool,
}

/// Host-measured label boxes for a range slider. Unmeasured labels stay
/// `None` and never hide anything.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeLabelBoxes {
    pub min: Option<LabelBox>,
    pub max: Option<LabelBox>,
    pub from: Option<LabelBox>,
    pub to: Option<LabelBox>,
    pub merged: Option<LabelBox>,
}

/// Host-measured label boxes for a single-value slider.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SingleLabelBoxes {
    pub min: Option<LabelBox>,
    pub max: Option<LabelBox>,
    pub value: Option<LabelBox>,
}

pub(crate) fn resolve_range(boxes: &RangeLabelBoxes) -> LabelVisibility {
    let merge = boxes_overlap(boxes.from, boxes.to);
    let (hide_min, hide_max) = if merge {
        (
            boxes_overlap(boxes.min, boxes.merged),
            boxes_overlap(boxes.merged, boxes.max),
        )
    } else {
        (
            boxes_overlap(boxes.min, boxes.from),
            boxes_overlap(boxes.to, boxes.max),
        )
    };
    LabelVisibility {
        hide_min_label: hide_min,
        hide_max_label: hide_max,
        merge_value_labels: merge,
    }
}

pub(crate) fn resolve_single(boxes: &SingleLabelBoxes) -> LabelVisibility {
    LabelVisibility {
        hide_min_label: boxes_overlap(boxes.min, boxes.value),
        hide_max_label: boxes_overlap(boxes.value, boxes.max),
        merge_value_labels: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bx(left: f64, right: f64) -> Option<LabelBox> {
        Some(LabelBox::new(left, right))
    }

    #[test]
    fn separated_value_labels_do_not_merge() {
        let vis = resolve_range(&RangeLabelBoxes {
            min: bx(0.0, 20.0),
            max: bx(180.0, 200.0),
            from: bx(60.0, 80.0),
            to: bx(120.0, 140.0),
            merged: bx(85.0, 115.0),
        });
        assert!(!vis.merge_value_labels);
        assert!(!vis.hide_min_label);
        assert!(!vis.hide_max_label);
    }

    #[test]
    fn overlapping_value_labels_merge() {
        let vis = resolve_range(&RangeLabelBoxes {
            min: bx(0.0, 20.0),
            max: bx(180.0, 200.0),
            from: bx(90.0, 110.0),
            to: bx(105.0, 125.0),
            merged: bx(85.0, 130.0),
        });
        assert!(vis.merge_value_labels);
        assert!(!vis.hide_min_label);
        assert!(!vis.hide_max_label);
    }

    #[test]
    fn edge_labels_hide_behind_individual_labels() {
        let vis = resolve_range(&RangeLabelBoxes {
            min: bx(0.0, 20.0),
            max: bx(180.0, 200.0),
            from: bx(10.0, 40.0),
            to: bx(170.0, 195.0),
            merged: None,
        });
        assert!(!vis.merge_value_labels);
        assert!(vis.hide_min_label);
        assert!(vis.hide_max_label);
    }

    #[test]
    fn edge_labels_check_the_merged_box_when_merged() {
        // from/to overlap near the min edge; the merged label is what
        // actually covers the min label.
        let vis = resolve_range(&RangeLabelBoxes {
            min: bx(0.0, 20.0),
            max: bx(180.0, 200.0),
            from: bx(15.0, 35.0),
            to: bx(30.0, 50.0),
            merged: bx(10.0, 55.0),
        });
        assert!(vis.merge_value_labels);
        assert!(vis.hide_min_label);
        assert!(!vis.hide_max_label);
    }

    #[test]
    fn unmeasured_boxes_keep_labels_visible() {
        let vis = resolve_range(&RangeLabelBoxes::default());
        assert_eq!(vis, LabelVisibility::default());

        // Merge detected but merged box not yet measured: edges stay.
        let vis = resolve_range(&RangeLabelBoxes {
            min: bx(0.0, 20.0),
            max: bx(180.0, 200.0),
            from: bx(10.0, 30.0),
            to: bx(25.0, 45.0),
            merged: None,
        });
        assert!(vis.merge_value_labels);
        assert!(!vis.hide_min_label);
        assert!(!vis.hide_max_label);
    }

    #[test]
    fn single_variant_checks_only_edge_labels() {
        let vis = resolve_single(&SingleLabelBoxes {
            min: bx(0.0, 20.0),
            max: bx(180.0, 200.0),
            value: bx(10.0, 40.0),
        });
        assert!(vis.hide_min_label);
        assert!(!vis.hide_max_label);
        assert!(!vis.merge_value_labels);
    }
}
