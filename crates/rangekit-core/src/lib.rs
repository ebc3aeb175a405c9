#![forbid(unsafe_code)]

//! Pure math and geometry for the rangekit slider engine.
//!
//! This crate holds everything that is stateless: the value/percent
//! coordinate system ([`scale`]), digit grouping for labels ([`format`]),
//! horizontal label-box geometry ([`geometry`]), and tick-grid generation
//! ([`grid`]). The stateful drag machinery lives in `rangekit-engine`,
//! which consumes these primitives for both slider variants so the two
//! never drift apart.

pub mod format;
pub mod geometry;
pub mod grid;
pub mod scale;

pub use format::group_digits;
pub use geometry::{LabelBox, TrackRect, boxes_overlap};
pub use grid::{Tick, TickKind, build_grid};
pub use scale::{Scale, ScaleError};
