#![forbid(unsafe_code)]

//! Headless slider interaction engine.
//!
//! [`SingleSlider`] and [`RangeSlider`] own the current value(s) and the
//! pointer-drag state machine for one widget each. The host owns everything
//! platform-shaped: it renders, measures label boxes, and forwards pointer
//! events. Every engine operation runs synchronously to completion; the
//! host re-reads [`SingleSlider::render_state`] / [`RangeSlider::render_state`]
//! after each mutating call instead of receiving pushed updates.
//!
//! A gesture is `start` → zero or more `drag_to` → `end`. `end` returns the
//! committed value(s) exactly once per gesture; out-of-gesture `drag_to` and
//! `end` calls are tolerated as no-ops so stray platform events never panic
//! or corrupt state.
//!
//! ```
//! use rangekit_core::TrackRect;
//! use rangekit_engine::{Handle, RangeSlider, SliderConfig};
//!
//! let config = SliderConfig::new().with_domain(0.0, 10_000.0).with_step(10.0);
//! let mut slider = RangeSlider::new(&config).unwrap();
//! slider.set_values(1_000.0, 9_000.0);
//!
//! let track = TrackRect::new(0.0, 500.0);
//! slider.start(Handle::To, 400.0);
//! slider.drag_to(400.0, track); // 80% of the track
//! let commit = slider.end().unwrap();
//! assert_eq!(commit.to, 8_000.0);
//! ```

pub mod config;
pub mod drag;
pub mod labels;
pub mod range;
pub mod single;
pub mod snapshot;

pub use config::{ConfigError, MAX_SECTIONS, SliderConfig};
pub use drag::{DragOrigin, Handle};
pub use labels::{LabelVisibility, RangeLabelBoxes, SingleLabelBoxes};
pub use range::{RangeSlider, RangeValues};
pub use single::SingleSlider;
pub use snapshot::{BarGeometry, RangeRenderState, SingleRenderState};
