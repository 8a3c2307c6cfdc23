//! Declared pane size values.
//!
//! Hosts declare pane sizing as attribute strings (`"45%"`, `"200px"`,
//! `"300"`) or plain numbers. [`SizeValue`] captures the result of parsing
//! that input exactly once; the rest of the engine only ever sees the
//! typed union.
//!
//! Bare numbers and numeric strings without a unit are pixels, matching
//! the numeric-attribute convention of DOM hosts. Anything unparseable is
//! [`SizeValue::Unset`] and falls through to the resolver's default-share
//! logic; malformed input is never an error.

use serde::{Deserialize, Serialize};

use crate::units::to_percent;

/// A declared pane size, resolved once at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeValue {
    /// Percentage of the container extent (`"45%"`).
    Percent(f64),
    /// Absolute pixels (`"200px"`, `"300"`, or a bare number).
    Pixels(f64),
    /// Nothing declared, or the declaration did not parse.
    #[default]
    Unset,
}

impl SizeValue {
    /// Parse a declared attribute string.
    ///
    /// Negative and non-finite magnitudes are treated as malformed and
    /// parse to [`SizeValue::Unset`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        if let Some(number) = trimmed.strip_suffix('%') {
            return match parse_magnitude(number) {
                Some(pct) => Self::Percent(pct),
                None => Self::Unset,
            };
        }
        let lowered = trimmed.to_ascii_lowercase();
        if let Some(number) = lowered.strip_suffix("px") {
            return match parse_magnitude(number) {
                Some(px) => Self::Pixels(px),
                None => Self::Unset,
            };
        }
        match parse_magnitude(trimmed) {
            Some(px) => Self::Pixels(px),
            None => Self::Unset,
        }
    }

    /// Whether a usable value was declared.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Resolve to a percentage of `extent`, or `None` when unset.
    #[must_use]
    pub fn resolve(self, extent: f64) -> Option<f64> {
        match self {
            Self::Percent(pct) => Some(pct),
            Self::Pixels(px) => Some(to_percent(px, extent)),
            Self::Unset => None,
        }
    }
}

impl From<f64> for SizeValue {
    /// Native numbers are pixels; negative or non-finite values are unset.
    fn from(px: f64) -> Self {
        if px.is_finite() && px >= 0.0 {
            Self::Pixels(px)
        } else {
            Self::Unset
        }
    }
}

impl From<&str> for SizeValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

fn parse_magnitude(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
