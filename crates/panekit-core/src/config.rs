//! Host-level splitter configuration.
//!
//! Options are validated once at construction time; past that point the
//! engine treats them as trusted. Validation errors are the only errors
//! this crate ever constructs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout axis of the split container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Panes side by side, dividers travel horizontally.
    #[default]
    X,
    /// Panes stacked, dividers travel vertically.
    Y,
}

/// Edge the pane stack is anchored to.
///
/// Alignment decides which extreme boundary reserves divider thickness:
/// the anchored edge keeps a divider flush against it, the free edge
/// grants the full travel range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    End,
}

/// Default divider thickness in pixels.
pub const DEFAULT_DIVIDER_SIZE: f64 = 4.0;

/// Default keyboard resize step in pixels.
pub const DEFAULT_RESIZE_STEP: f64 = 10.0;

/// Host-level splitter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterOptions {
    pub axis: Axis,
    pub align: Align,
    /// Mirror divider travel for right-to-left hosts. Internal percentage
    /// bookkeeping is unaffected; only pixel placements mirror.
    pub rtl: bool,
    /// Disables user-initiated resize, collapse, and expand.
    pub disabled: bool,
    /// Divider thickness in pixels, reserved at interior boundaries.
    pub divider_size: f64,
    /// Pixel distance of one keyboard resize step.
    pub resize_step: f64,
    /// Apply sizes on every drag move (`true`) or only at drag end.
    pub live_resize: bool,
    /// Persist the layout snapshot after each committed size change.
    pub save_position: bool,
    /// Identifier the persistence key is derived from. Persistence is
    /// inert without one.
    pub unique_id: Option<String>,
    /// Accessible label hosts attach to divider elements. Carried as
    /// plain data; the engine never interprets it.
    pub divider_label: Option<String>,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            align: Align::default(),
            rtl: false,
            disabled: false,
            divider_size: DEFAULT_DIVIDER_SIZE,
            resize_step: DEFAULT_RESIZE_STEP,
            live_resize: true,
            save_position: false,
            unique_id: None,
            divider_label: None,
        }
    }
}

impl SplitterOptions {
    /// Validate numeric fields.
    ///
    /// `divider_size` must be finite and non-negative; `resize_step` must
    /// be finite and strictly positive (a zero step would turn keyboard
    /// resize into a no-op that still emits events).
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.divider_size.is_finite() || self.divider_size < 0.0 {
            return Err(OptionsError::InvalidDividerSize {
                value: self.divider_size,
            });
        }
        if !self.resize_step.is_finite() || self.resize_step <= 0.0 {
            return Err(OptionsError::InvalidResizeStep {
                value: self.resize_step,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionsError {
    InvalidDividerSize { value: f64 },
    InvalidResizeStep { value: f64 },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDividerSize { value } => {
                write!(f, "divider size {value} must be finite and >= 0")
            }
            Self::InvalidResizeStep { value } => {
                write!(f, "resize step {value} must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for OptionsError {}
