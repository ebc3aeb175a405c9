#![forbid(unsafe_code)]

//! Slider configuration and construction-time validation.

use std::fmt;

use rangekit_core::format::group_digits;
use rangekit_core::scale::{Scale, ScaleError};

/// Upper bound on the grid section count. More sections than this renders
/// as an unreadable smear on any real track, and unbounded counts turn grid
/// generation into an allocation hazard.
pub const MAX_SECTIONS: u32 = 1000;

/// Configuration shared by both slider variants.
///
/// Validated when an engine is constructed: a bad domain or a zero section
/// count fails construction instead of producing a silently broken widget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderConfig {
    /// Lower domain bound.
    pub min: f64,
    /// Upper domain bound.
    pub max: f64,
    /// Step granularity; every stored value is a step multiple from `min`.
    pub step: f64,
    /// Number of grid sections (major intervals).
    pub number_of_sections: u32,
    /// Digit-group separator for label text.
    pub separator: String,
    /// Separator between the two values of a merged range label.
    pub values_separator: String,
    /// Text prepended to every value label.
    pub prefix: String,
    /// Text appended to every value label.
    pub postfix: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 10.0,
            number_of_sections: 10,
            separator: " ".to_owned(),
            values_separator: "\u{2014}".to_owned(),
            prefix: String::new(),
            postfix: String::new(),
        }
    }
}

impl SliderConfig {
    /// Create a config with the default domain `0..=100`, step 10, and
    /// ten grid sections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    /// Set the domain bounds (builder).
    #[must_use]
    pub fn with_domain(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the step granularity (builder).
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the grid section count (builder).
    #[must_use]
    pub fn with_sections(mut self, number_of_sections: u32) -> Self {
        self.number_of_sections = number_of_sections;
        self
    }

    /// Set the digit-group separator (builder).
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the merged-label values separator (builder).
    #[must_use]
    pub fn with_values_separator(mut self, values_separator: impl Into<String>) -> Self {
        self.values_separator = values_separator.into();
        self
    }

    /// Set the label prefix (builder).
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the label postfix (builder).
    #[must_use]
    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    /// Validate the config, producing the scale used by the engine.
    pub(crate) fn build_scale(&self) -> Result<Scale, ConfigError> {
        if self.number_of_sections == 0 {
            return Err(ConfigError::ZeroSections);
        }
        if self.number_of_sections > MAX_SECTIONS {
            return Err(ConfigError::TooManySections {
                sections: self.number_of_sections,
            });
        }
        Ok(Scale::new(self.min, self.max, self.step)?)
    }
}

/// Label affixes, resolved once at engine construction.
#[derive(Debug, Clone)]
pub(crate) struct Affixes {
    pub separator: String,
    pub values_separator: String,
    pub prefix: String,
    pub postfix: String,
}

impl Affixes {
    pub(crate) fn from_config(config: &SliderConfig) -> Self {
        Self {
            separator: config.separator.clone(),
            values_separator: config.values_separator.clone(),
            prefix: config.prefix.clone(),
            postfix: config.postfix.clone(),
        }
    }

    /// Affixed, digit-grouped label text for one value.
    pub(crate) fn label(&self, value: f64) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            group_digits(Some(value), &self.separator),
            self.postfix
        )
    }
}

/// Errors while constructing a slider engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The numeric domain is invalid.
    Scale(ScaleError),
    /// The grid needs at least one section.
    ZeroSections,
    /// The grid section count exceeds [`MAX_SECTIONS`].
    TooManySections { sections: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(err) => write!(f, "invalid domain: {err}"),
            Self::ZeroSections => write!(f, "number_of_sections must be at least 1"),
            Self::TooManySections { sections } => {
                write!(f, "number_of_sections {sections} exceeds the maximum of {MAX_SECTIONS}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scale(err) => Some(err),
            Self::ZeroSections | Self::TooManySections { .. } => None,
        }
    }
}

impl From<ScaleError> for ConfigError {
    fn from(err: ScaleError) -> Self {
        Self::Scale(err)
    }
}
