//! Drag and keyboard move policy.
//!
//! One interaction at a time: the engine owns an `Option<ActiveDrag>`
//! and a second drag-start while one is in flight is rejected with
//! [`DragStartOutcome::Busy`] instead of silently interleaving two pairs.
//!
//! Each incremental pixel delta converts to percent, accumulates into the
//! interaction's diff, and is clamped so neither pane of the pair crosses
//! its bounds; a delta that would cross snaps exactly onto the boundary.
//! RTL negates the sign before clamping, so the clamp itself is
//! direction-agnostic.
//!
//! Keyboard resize is one full start/move/end cycle per step. Hosts map
//! arrow keys to [`StepDirection`] (mirrored under RTL) and swallow
//! non-directional keys themselves; the engine only ever sees steps.

use serde::{Deserialize, Serialize};

/// Direction of one keyboard resize step along the container axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// Toward the container start (left/up).
    Back,
    /// Toward the container end (right/down).
    Forward,
}

impl StepDirection {
    /// Sign applied to the configured step distance.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Back => -1.0,
            Self::Forward => 1.0,
        }
    }
}

/// Exclusive record of the one in-flight divider interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveDrag {
    /// Index of the pair being resized.
    pub pair: usize,
    /// Sizes of the pair's panes when the interaction started.
    pub baseline: (f64, f64),
    /// Divider translate when the interaction started.
    pub base_translate: f64,
    /// Accumulated clamped percent diff, applied start pane += / end
    /// pane -= at commit.
    pub diff: f64,
}

/// Outcome of a drag-start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStartOutcome {
    Started,
    /// A `before_size_changed` observer returned false.
    Vetoed,
    /// Another interaction is already in flight.
    Busy,
    /// The splitter is disabled.
    Disabled,
    NoSuchPair,
}

/// Outcome of a drag-end request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEndOutcome {
    /// Sizes were committed; `diff` is the percent moved from the end
    /// pane to the start pane (negative for the other direction).
    Committed { pair: usize, diff: f64 },
    NoActiveDrag,
}

/// Clamp an accumulated percent diff for one pair.
///
/// Positive diff moves size from the end pane to the start pane. The
/// result is snapped exactly onto whichever boundary the raw diff would
/// cross: the start pane's minimum, the end pane's minimum, or — when a
/// single-pair maximum is active — the start pane's maximum. A
/// non-finite diff (moving-state baseline never established) coerces to
/// zero.
#[must_use]
pub fn clamp_diff(
    diff: f64,
    baseline: (f64, f64),
    min_start: f64,
    min_end: f64,
    max_start: Option<f64>,
) -> f64 {
    if !diff.is_finite() {
        tracing::debug!(diff, "non-finite drag diff coerced to zero");
        return 0.0;
    }
    let floor = min_start - baseline.0;
    let ceil = baseline.1 - min_end;
    let mut clamped = diff;
    if clamped < floor {
        clamped = floor;
    }
    if clamped > ceil {
        clamped = ceil;
    }
    if let Some(max) = max_start {
        let cap = max - baseline.0;
        if clamped > cap {
            clamped = cap;
        }
    }
    clamped
}
