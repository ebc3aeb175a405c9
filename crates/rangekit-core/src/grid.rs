#![forbid(unsafe_code)]

//! Tick-grid generation.
//!
//! The grid divides the track into `sections` equal intervals. Major ticks
//! sit on the interval boundaries; minor ticks subdivide each interval.
//! Every *even-indexed* major tick carries a grouped value label, so label
//! density is half the major-tick density.
//!
//! # Invariants
//!
//! 1. Output holds `sections + 1` major ticks, ordered by ascending percent,
//!    with minors interleaved inside their interval.
//! 2. Minor-tick count per interval follows a fixed policy table keyed on
//!    the section count (denser sections get fewer minors).
//! 3. No minor tick lands at or beyond 100% (floating-point rounding in the
//!    last interval is dropped, not clamped).

use crate::format::group_digits;
use crate::scale::Scale;

/// Major ticks mark section boundaries; minor ticks subdivide them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickKind {
    Major,
    Minor,
}

/// One position on the track grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// Position along the track, `0.0..=100.0`.
    pub percent: f64,
    /// Grouped value text; present only on even-indexed major ticks.
    pub label: Option<String>,
    pub kind: TickKind,
}

/// Minor ticks per major interval for a given section count.
///
/// A discrete policy table, not a continuous formula: crowded grids drop
/// minors entirely, sparse grids get up to four.
const fn minor_ticks_per_interval(sections: u32) -> u32 {
    match sections {
        s if s > 28 => 0,
        s if s > 14 => 1,
        s if s > 7 => 2,
        s if s > 4 => 3,
        _ => 4,
    }
}

/// Build the tick grid for `sections` track sections.
///
/// `sections` must be at least 1; the engine validates this at
/// construction. Labels go through [`Scale::to_value`] so they always show
/// step-aligned in-domain values, grouped with `separator`.
#[must_use]
pub fn build_grid(sections: u32, scale: &Scale, separator: &str) -> Vec<Tick> {
    debug_assert!(sections >= 1, "grid requires at least one section");

    let section_percent = 100.0 / sections as f64;
    let minors = minor_ticks_per_interval(sections);
    // Widened before the arithmetic: `sections + 1` overflows u32 at the
    // extreme end of the input range.
    let capacity = (u64::from(sections) + 1 + u64::from(sections) * u64::from(minors)) as usize;
    let mut ticks = Vec::with_capacity(capacity);

    for i in 0..=sections {
        let major_percent = i as f64 * section_percent;
        let label = (i % 2 == 0)
            .then(|| group_digits(Some(scale.to_value(major_percent)), separator));
        ticks.push(Tick {
            percent: major_percent,
            label,
            kind: TickKind::Major,
        });

        if i < sections && minors > 0 {
            let minor_step = section_percent / (minors + 1) as f64;
            for j in 1..=minors {
                let minor_percent = major_percent + j as f64 * minor_step;
                if minor_percent >= 100.0 {
                    break;
                }
                ticks.push(Tick {
                    percent: minor_percent,
                    label: None,
                    kind: TickKind::Minor,
                });
            }
        }
    }

    ticks
}
