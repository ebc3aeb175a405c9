#![forbid(unsafe_code)]

//! Value ↔ percent mapping over a stepped numeric domain.
//!
//! [`Scale`] is the single authoritative implementation of the slider's
//! coordinate math. Both slider variants (single and range) convert through
//! the same instance, so their arithmetic cannot drift apart.
//!
//! # Invariants
//!
//! 1. [`Scale::to_value`] always returns a value inside `[min, max]`.
//! 2. The returned value is step-aligned relative to `min`: rounding to the
//!    nearest step multiple happens *before* clamping. Rounding can push a
//!    near-boundary percent outside the domain; the clamp is the final
//!    guarantee.
//! 3. Percent positions are derived on demand, never stored, so a value and
//!    its percent cannot disagree.

use std::fmt;

/// A stepped numeric domain `[min, max]` with conversions to and from
/// percent positions along a track.
///
/// Immutable once constructed. Construction validates the domain; an
/// invalid configuration is a hard error, never a silently broken scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    min: f64,
    max: f64,
    step: f64,
}

impl Scale {
    /// Create a scale over `[min, max]` with the given step granularity.
    ///
    /// Requires finite bounds, `min < max`, and `0 < step <= max - min`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ScaleError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(ScaleError::NonFinite { min, max, step });
        }
        if step <= 0.0 {
            return Err(ScaleError::NonPositiveStep { step });
        }
        if min >= max {
            return Err(ScaleError::EmptyDomain { min, max });
        }
        if step > max - min {
            return Err(ScaleError::StepExceedsSpan {
                step,
                span: max - min,
            });
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound of the domain.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Step granularity.
    #[inline]
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Map a value to its percent position along the track.
    ///
    /// Purely linear and defined for out-of-range inputs too (the result
    /// may fall outside `0..=100`); grid generation relies on the exact
    /// `0` and `100` endpoints, drag handling clamps separately.
    #[inline]
    #[must_use]
    pub fn to_percent(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * 100.0
    }

    /// Map a percent position to the nearest step-aligned value in range.
    ///
    /// Linear inverse of [`Scale::to_percent`], then [`Scale::snap`].
    #[must_use]
    pub fn to_value(&self, percent: f64) -> f64 {
        self.snap(self.min + (self.max - self.min) * percent / 100.0)
    }

    /// Round a raw value to the nearest step multiple (anchored at `min`,
    /// half away from zero), then clamp into `[min, max]`.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let stepped = self.min + ((value - self.min) / self.step).round() * self.step;
        stepped.clamp(self.min, self.max)
    }
}

/// Errors while constructing a [`Scale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleError {
    NonFinite { min: f64, max: f64, step: f64 },
    EmptyDomain { min: f64, max: f64 },
    NonPositiveStep { step: f64 },
    StepExceedsSpan { step: f64, span: f64 },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { min, max, step } => {
                write!(f, "non-finite domain parameter (min {min}, max {max}, step {step})")
            }
            Self::EmptyDomain { min, max } => {
                write!(f, "empty domain: min {min} is not below max {max}")
            }
            Self::NonPositiveStep { step } => write!(f, "step {step} must be positive"),
            Self::StepExceedsSpan { step, span } => {
                write!(f, "step {step} exceeds domain span {span}")
            }
        }
    }
}

impl std::error::Error for ScaleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_domain() {
        assert!(Scale::new(0.0, 100.0, 10.0).is_ok());
        assert_eq!(
            Scale::new(100.0, 100.0, 10.0),
            Err(ScaleError::EmptyDomain {
                min: 100.0,
                max: 100.0
            })
        );
        assert_eq!(
            Scale::new(100.0, 0.0, 10.0),
            Err(ScaleError::EmptyDomain {
                min: 100.0,
                max: 0.0
            })
        );
        assert_eq!(
            Scale::new(0.0, 100.0, 0.0),
            Err(ScaleError::NonPositiveStep { step: 0.0 })
        );
        assert_eq!(
            Scale::new(0.0, 100.0, -5.0),
            Err(ScaleError::NonPositiveStep { step: -5.0 })
        );
        assert_eq!(
            Scale::new(0.0, 10.0, 20.0),
            Err(ScaleError::StepExceedsSpan {
                step: 20.0,
                span: 10.0
            })
        );
        assert!(matches!(
            Scale::new(f64::NAN, 100.0, 10.0),
            Err(ScaleError::NonFinite { .. })
        ));
        assert!(matches!(
            Scale::new(0.0, f64::INFINITY, 10.0),
            Err(ScaleError::NonFinite { .. })
        ));
    }

    #[test]
    fn to_percent_is_linear() {
        let scale = Scale::new(0.0, 200.0, 10.0).unwrap();
        assert_eq!(scale.to_percent(0.0), 0.0);
        assert_eq!(scale.to_percent(100.0), 50.0);
        assert_eq!(scale.to_percent(200.0), 100.0);
        // Defined outside the domain
        assert_eq!(scale.to_percent(-20.0), -10.0);
        assert_eq!(scale.to_percent(220.0), 110.0);
    }

    #[test]
    fn to_value_rounds_then_clamps() {
        let scale = Scale::new(0.0, 100.0, 10.0).unwrap();
        assert_eq!(scale.to_value(0.0), 0.0);
        assert_eq!(scale.to_value(100.0), 100.0);
        assert_eq!(scale.to_value(14.0), 10.0);
        // Half rounds away from zero
        assert_eq!(scale.to_value(15.0), 20.0);
        // Out-of-range percents clamp after rounding
        assert_eq!(scale.to_value(-30.0), 0.0);
        assert_eq!(scale.to_value(130.0), 100.0);
    }

    #[test]
    fn snap_anchors_at_min() {
        let scale = Scale::new(3.0, 100.0, 10.0).unwrap();
        assert_eq!(scale.snap(3.0), 3.0);
        assert_eq!(scale.snap(12.0), 13.0);
        // Rounding lands on 103, past the boundary; the clamp catches it
        assert_eq!(scale.snap(99.0), 100.0);
        assert_eq!(scale.snap(-50.0), 3.0);
    }

    #[test]
    fn round_trip_is_stable_for_aligned_values() {
        let scale = Scale::new(0.0, 10_000.0, 10.0).unwrap();
        for v in [0.0, 10.0, 4990.0, 8000.0, 10_000.0] {
            assert_eq!(scale.to_value(scale.to_percent(v)), v);
        }
    }
}
