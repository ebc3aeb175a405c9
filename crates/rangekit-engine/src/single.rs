#![forbid(unsafe_code)]

//! Single-value slider engine.
//!
//! One handle, no ordering constraint. The host forwards pointer events and
//! re-renders from [`SingleSlider::render_state`] after each call.
//!
//! # State Machine
//!
//! `Idle` ⇄ `Dragging`, represented as the presence of a drag session:
//!
//! - `start` records the pointer origin and the handle's current percent.
//! - `drag_to` is a no-op while idle (stray platform moves are tolerated)
//!   and idempotent for an unchanged pointer position.
//! - `end` returns the committed value exactly once per gesture; while idle
//!   it returns `None` so duplicate end signals are harmless.

use rangekit_core::geometry::TrackRect;
use rangekit_core::grid::{Tick, build_grid};
use rangekit_core::scale::Scale;

use crate::config::{Affixes, ConfigError, SliderConfig};
use crate::drag::{DragSession, track_percent};
use crate::labels::{LabelVisibility, SingleLabelBoxes, resolve_single};
use crate::snapshot::{BarGeometry, SingleRenderState};

/// Initial value when the host never supplies one, from the classic widget.
const DEFAULT_VALUE: f64 = 10.0;

/// Interaction engine for a single-value slider.
#[derive(Debug, Clone)]
pub struct SingleSlider {
    scale: Scale,
    affixes: Affixes,
    ticks: Vec<Tick>,
    value: f64,
    drag: Option<DragSession<()>>,
    visibility: LabelVisibility,
}

impl SingleSlider {
    /// Create an engine from a validated config. The initial value is the
    /// classic widget default (10), snapped and clamped into the domain;
    /// hosts set their own starting value with [`SingleSlider::set_value`].
    pub fn new(config: &SliderConfig) -> Result<Self, ConfigError> {
        let scale = config.build_scale()?;
        let ticks = build_grid(config.number_of_sections, &scale, &config.separator);
        Ok(Self {
            scale,
            affixes: Affixes::from_config(config),
            ticks,
            value: scale.snap(DEFAULT_VALUE),
            drag: None,
            visibility: LabelVisibility::default(),
        })
    }

    /// Current committed value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
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

    /// Adopt an externally supplied value, snapped and clamped.
    ///
    /// Rejected when the value is non-finite (NaN would defeat the clamp
    /// and corrupt the stored value) and ignored while a gesture is active
    /// (the gesture stays authoritative). Returns whether the update was
    /// applied.
    pub fn set_value(&mut self, value: f64) -> bool {
        if self.drag.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!(value, "external value ignored during gesture");
            return false;
        }
        if !value.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::trace!(value, "non-finite external value rejected");
            return false;
        }
        self.value = self.scale.snap(value);
        true
    }

    /// Begin a gesture at `pointer_x`. Restarting while already dragging
    /// replaces the session, re-targeting the gesture.
    ///
    /// The host should suppress its platform's default gesture (text
    /// selection, scrolling) when it forwards the pointer-down; the engine
    /// has no platform access of its own.
    pub fn start(&mut self, pointer_x: f64) {
        self.drag = Some(DragSession {
            handle: (),
            origin_x: pointer_x,
            origin_percent: self.scale.to_percent(self.value),
        });
        #[cfg(feature = "tracing")]
        self.trace_gesture("start");
    }

    /// Move the handle to the pointer position. No-op while idle or when
    /// the track has no width.
    pub fn drag_to(&mut self, pointer_x: f64, track: TrackRect) {
        if self.drag.is_none() {
            return;
        }
        let Some(percent) = track_percent(pointer_x, track) else {
            return;
        };
        self.value = self.scale.to_value(percent);
        #[cfg(feature = "tracing")]
        self.trace_gesture("move");
    }

    /// Finish the gesture, committing the current value.
    ///
    /// Returns `Some(value)` exactly once per gesture and `None` while
    /// idle, so a host may forward duplicate terminating events freely.
    pub fn end(&mut self) -> Option<f64> {
        let committed = self.drag.take().map(|_| self.value);
        #[cfg(feature = "tracing")]
        if committed.is_some() {
            self.trace_gesture("end");
        }
        committed
    }

    /// Recompute label visibility from host-measured boxes.
    pub fn measure_labels(&mut self, boxes: &SingleLabelBoxes) -> LabelVisibility {
        self.visibility = resolve_single(boxes);
        self.visibility
    }

    /// Snapshot of everything the host needs to redraw.
    #[must_use]
    pub fn render_state(&self) -> SingleRenderState {
        let percent = self.scale.to_percent(self.value);
        SingleRenderState {
            percent,
            bar: BarGeometry {
                left: 0.0,
                width: percent,
            },
            value_label: self.affixes.label(self.value),
            min_label: self.affixes.label(self.scale.min()),
            max_label: self.affixes.label(self.scale.max()),
            visibility: self.visibility,
            drag_origin: self.drag.as_ref().map(DragSession::origin),
            form_value: self.value.to_string(),
        }
    }

    #[cfg(feature = "tracing")]
    fn trace_gesture(&self, operation: &'static str) {
        let _span = tracing::debug_span!(
            "single_slider.gesture",
            operation,
            value = self.value,
            dragging = self.drag.is_some()
        )
        .entered();
    }
}
