#![forbid(unsafe_code)]

//! Range slider engine.
//!
//! Two handles selecting an ordered interval `[from, to]`.
//!
//! # State Machine
//!
//! `Idle` ⇄ `Dragging(handle)`, represented as the presence of a drag
//! session tagged with the grabbed [`Handle`]:
//!
//! - `start` records which handle was grabbed, the pointer origin, and the
//!   handle's current percent.
//! - `drag_to` applies the mutual-clamp rule on *every* move: the `From`
//!   handle never passes the current `To` percent and vice versa, so
//!   `from <= to` holds at all times without post-hoc correction.
//! - `end` returns the committed pair exactly once per gesture.
//!
//! # Invariants
//!
//! 1. `min <= from <= to <= max` after every operation.
//! 2. Both stored values are step-snapped and clamped on every write.
//! 3. A malformed external update (`from > to`) is rejected outright, never
//!    swapped or clamped into shape.

use rangekit_core::geometry::TrackRect;
use rangekit_core::grid::{Tick, build_grid};
use rangekit_core::scale::Scale;

use crate::config::{Affixes, ConfigError, SliderConfig};
use crate::drag::{DragSession, Handle, track_percent};
use crate::labels::{LabelVisibility, RangeLabelBoxes, resolve_range};
use crate::snapshot::{BarGeometry, RangeRenderState};

/// The committed endpoints of a range gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeValues {
    pub from: f64,
    pub to: f64,
}

/// Initial endpoints when the host never supplies any, from the classic
/// widget. Snapping is monotone, so the ordering survives any domain.
const DEFAULT_FROM: f64 = 10.0;
const DEFAULT_TO: f64 = 90.0;

/// Interaction engine for a two-handle range slider.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    scale: Scale,
    affixes: Affixes,
    ticks: Vec<Tick>,
    from: f64,
    to: f64,
    drag: Option<DragSession<Handle>>,
    visibility: LabelVisibility,
}

impl RangeSlider {
    /// Create an engine from a validated config. The initial interval is
    /// the classic widget default (10 to 90), snapped and clamped into the
    /// domain; hosts set their own with [`RangeSlider::set_values`].
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        let scale = config.build_scale()?;
        let ticks = build_grid(config.number_of_sections, &scale, &config.separator);
        Ok(Self {
            scale,
            affixes: Affixes::from_config(config),
            ticks,
            from: scale.snap(DEFAULT_FROM),
            to: scale.snap(DEFAULT_TO),
            drag: None,
            visibility: LabelVisibility::default(),
        })
    }

    /// Current committed interval.
    #[inline]
    #[must_use]
    pub fn values(&self) -> RangeValues {
        RangeValues {
            from: self.from,
            to: self.to,
        }
    }

    /// Lower endpoint.
    #[inline]
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Upper endpoint.
    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Whether a gesture is active.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The tick grid. Fixed for the lifetime of the engine.
    #[inline]
    #[must_use]
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Adopt an externally supplied interval, snapped and clamped.
    ///
    /// Rejected without touching state when `from > to` (the malformed pair
    /// is ignored, not repaired), when either value is non-finite, or while
    /// a gesture is active. Returns whether the update was applied.
    pub fn set_values(&mut self, from: f64, to: f64) -> bool {
        if self.drag.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(from, to, "external values ignored during gesture");
            return false;
        }
        if !from.is_finite() || !to.is_finite() || !(from <= to) {
            #[cfg(feature = "tracing")]
            tracing::trace!(from, to, "malformed external values rejected");
            return false;
        }
        // Snapping is monotone, so the ordering survives it.
        self.from = self.scale.snap(from);
        self.to = self.scale.snap(to);
        true
    }

    /// Begin a gesture on `handle` at `pointer_x`. Restarting while already
    /// dragging replaces the session, re-targeting the gesture.
    ///
    /// The host should suppress its platform's default gesture (text
    /// selection, scrolling) when it forwards the pointer-down; the engine
    /// has no platform access of its own.
    pub fn start(&mut self, handle: Handle, pointer_x: f64) {
        let origin_percent = match handle {
            Handle::From => self.scale.to_percent(self.from),
            Handle::To => self.scale.to_percent(self.to),
        };
        self.drag = Some(DragSession {
            handle,
            origin_x: pointer_x,
            origin_percent,
        });
        #[cfg(feature = "tracing")]
        self.trace_gesture("start");
    }

    /// Move the grabbed handle to the pointer position, mutually clamped
    /// against the other handle. No-op while idle or when the track has no
    /// width.
    pub fn drag_to(&mut self, pointer_x: f64, track: TrackRect) {
        let Some(session) = self.drag else {
            return;
        };
        let Some(percent) = track_percent(pointer_x, track) else {
            return;
        };
        match session.handle {
            Handle::From => {
                let clamped = percent.min(self.scale.to_percent(self.to));
                self.from = self.scale.to_value(clamped);
            }
            Handle::To => {
                let clamped = percent.max(self.scale.to_percent(self.from));
                self.to = self.scale.to_value(clamped);
            }
        }
        #[cfg(feature = "tracing")]
        self.trace_gesture("move");
    }

    /// Finish the gesture, committing the current interval.
    ///
    /// Returns `Some` exactly once per gesture and `None` while idle, so a
    /// host may forward duplicate terminating events freely.
    pub fn end(&mut self) -> Option<RangeValues> {
        let committed = self.drag.take().map(|_| self.values());
        #[cfg(feature = "tracing")]
        if committed.is_some() {
            self.trace_gesture("end");
        }
        committed
    }

    /// Recompute label visibility from host-measured boxes.
    pub fn measure_labels(&mut self, boxes: &RangeLabelBoxes) -> LabelVisibility {
        self.visibility = resolve_range(boxes);
        self.visibility
    }

    /// Text of the merged label: the single value when the interval is
    /// collapsed, otherwise both values joined by the values separator.
    #[must_use]
    pub fn merged_label(&self) -> String {
        if self.from == self.to {
            self.affixes.label(self.to)
        } else {
            format!(
                "{} {} {}",
                self.affixes.label(self.from),
                self.affixes.values_separator,
                self.affixes.label(self.to)
            )
        }
    }

    /// Snapshot of everything the host needs to redraw.
    #[must_use]
    pub fn render_state(&self) -> RangeRenderState {
        let from_percent = self.scale.to_percent(self.from);
        let to_percent = self.scale.to_percent(self.to);
        RangeRenderState {
            from_percent,
            to_percent,
            bar: BarGeometry {
                left: from_percent,
                width: to_percent - from_percent,
            },
            from_label: self.affixes.label(self.from),
            to_label: self.affixes.label(self.to),
            merged_label: self.merged_label(),
            merged_percent: (from_percent + to_percent) / 2.0,
            min_label: self.affixes.label(self.scale.min()),
            max_label: self.affixes.label(self.scale.max()),
            visibility: self.visibility,
            drag_origin: self.drag.as_ref().map(DragSession::origin),
            form_value: format!("{},{}", self.from, self.to),
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_gesture(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "range_slider.gesture",
            operation,
            from = self.from,
            to = self.to,
            handle = ?self.drag.map(|d| d.handle),
            dragging = self.drag.is_some()
        )
        .entered();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangekit_core::geometry::LabelBox;

    fn slider() -> RangeSlider {
        let config = SliderConfig::new()
            .with_domain(0.0, 1000.0)
            .with_step(10.0);
        RangeSlider::new(&config).unwrap()
    }

    const TRACK: TrackRect = TrackRect::new(0.0, 1000.0);

    #[test]
    fn starts_at_the_classic_default_interval() {
        let s = slider();
        assert_eq!(s.from(), 10.0);
        assert_eq!(s.to(), 90.0);

        // Domains that exclude the defaults snap and clamp them, keeping
        // the ordering.
        let config = SliderConfig::new()
            .with_domain(500.0, 1000.0)
            .with_step(10.0);
        let s = RangeSlider::new(&config).unwrap();
        assert_eq!(s.from(), 500.0);
        assert_eq!(s.to(), 500.0);
        assert!(s.from() <= s.to());
    }

    #[test]
    fn dragging_from_past_to_pins_them_equal() {
        let mut s = slider();
        s.set_values(200.0, 600.0);
        s.start(Handle::From, 200.0);
        s.drag_to(900.0, TRACK); // well past `to` at 60%
        assert_eq!(s.from(), 600.0);
        assert_eq!(s.to(), 600.0);
        let commit = s.end().unwrap();
        assert_eq!(commit.from, commit.to);
    }

    #[test]
    fn dragging_to_past_from_pins_them_equal() {
        let mut s = slider();
        s.set_values(400.0, 800.0);
        s.start(Handle::To, 800.0);
        s.drag_to(0.0, TRACK);
        assert_eq!(s.from(), 400.0);
        assert_eq!(s.to(), 400.0);
    }

    #[test]
    fn ordinary_moves_keep_ordering() {
        let mut s = slider();
        s.set_values(100.0, 900.0);
        s.start(Handle::To, 900.0);
        s.drag_to(500.0, TRACK);
        assert_eq!(s.values(), RangeValues { from: 100.0, to: 500.0 });
        assert!(s.from() <= s.to());
    }

    #[test]
    fn malformed_external_update_is_rejected() {
        let mut s = slider();
        s.set_values(300.0, 700.0);
        assert!(!s.set_values(700.0, 300.0));
        assert_eq!(s.values(), RangeValues { from: 300.0, to: 700.0 });
        assert!(!s.set_values(f64::NAN, 500.0));
        assert_eq!(s.values(), RangeValues { from: 300.0, to: 700.0 });
    }

    #[test]
    fn non_finite_external_values_are_rejected() {
        let mut s = slider();
        s.set_values(300.0, 700.0);
        assert!(!s.set_values(500.0, f64::NAN));
        assert!(!s.set_values(f64::NEG_INFINITY, f64::INFINITY));
        assert_eq!(s.values(), RangeValues { from: 300.0, to: 700.0 });
    }

    #[test]
    fn equal_external_values_are_accepted() {
        let mut s = slider();
        assert!(s.set_values(500.0, 500.0));
        assert_eq!(s.values(), RangeValues { from: 500.0, to: 500.0 });
    }

    #[test]
    fn external_update_is_ignored_mid_gesture() {
        let mut s = slider();
        s.set_values(100.0, 900.0);
        s.start(Handle::From, 100.0);
        assert!(!s.set_values(200.0, 300.0));
        assert_eq!(s.values(), RangeValues { from: 100.0, to: 900.0 });
    }

    #[test]
    fn end_commits_current_values_not_a_snapshot_from_start() {
        let mut s = slider();
        s.set_values(100.0, 900.0);
        s.start(Handle::To, 900.0);
        s.drag_to(250.0, TRACK);
        s.drag_to(750.0, TRACK);
        assert_eq!(s.end(), Some(RangeValues { from: 100.0, to: 750.0 }));
        assert_eq!(s.end(), None);
    }

    #[test]
    fn merged_label_collapses_for_equal_values() {
        let mut s = slider();
        s.set_values(500.0, 500.0);
        assert_eq!(s.merged_label(), "500");
        s.set_values(300.0, 700.0);
        assert_eq!(s.merged_label(), "300 \u{2014} 700");
    }

    #[test]
    fn merged_label_carries_affixes() {
        let config = SliderConfig::new()
            .with_domain(0.0, 10_000.0)
            .with_step(100.0)
            .with_prefix("$")
            .with_values_separator("-");
        let mut s = RangeSlider::new(&config).unwrap();
        s.set_values(1_000.0, 2_500.0);
        assert_eq!(s.merged_label(), "$1 000 - $2 500");
    }

    #[test]
    fn snapshot_reports_bar_between_handles() {
        let mut s = slider();
        s.set_values(200.0, 700.0);
        let state = s.render_state();
        assert_eq!(state.from_percent, 20.0);
        assert_eq!(state.to_percent, 70.0);
        assert_eq!(state.bar.left, 20.0);
        assert_eq!(state.bar.width, 50.0);
        assert_eq!(state.merged_percent, 45.0);
        assert_eq!(state.form_value, "200,700");
        assert_eq!(state.min_label, "0");
        assert_eq!(state.max_label, "1 000");
    }

    #[test]
    fn measure_labels_updates_the_snapshot_flags() {
        let mut s = slider();
        s.set_values(480.0, 520.0);
        let vis = s.measure_labels(&RangeLabelBoxes {
            min: Some(LabelBox::new(0.0, 30.0)),
            max: Some(LabelBox::new(970.0, 1000.0)),
            from: Some(LabelBox::new(460.0, 500.0)),
            to: Some(LabelBox::new(500.0, 540.0)),
            merged: Some(LabelBox::new(455.0, 545.0)),
        });
        assert!(vis.merge_value_labels);
        assert!(!vis.hide_min_label);
        assert!(!vis.hide_max_label);
        assert_eq!(s.render_state().visibility, vis);
    }
}
