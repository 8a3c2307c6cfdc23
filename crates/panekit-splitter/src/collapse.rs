//! Collapse/expand vocabulary.
//!
//! A pane toggles between Expanded and Collapsed by traveling to and
//! from its minimum size through the same clamped-move primitive drags
//! use. The pre-collapse size is remembered as the restore target; a
//! pane that was already at its minimum restores to the resolver's
//! default share instead.
//!
//! Collapsed is not only an explicit state: after every drag commit the
//! start pane is re-classified from its resulting size, so a manual drag
//! down to the minimum reads as a collapse and a drag away from it as an
//! expand.

use panekit_core::to_percent;

use crate::resolver::EPSILON;

/// Result of a collapse or expand request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The pane reached its minimum and is now marked collapsed.
    Collapsed,
    /// The pane left its minimum and is now marked expanded.
    Expanded,
    /// The operation ran but the size did not strictly change.
    Unchanged,
    /// A `before_*` observer returned false.
    Vetoed,
    /// The splitter is disabled (collapse allows an explicit initial
    /// override; expand never does).
    Ignored,
    NoSuchPair,
}

/// Classify a committed size against the collapse vocabulary: a pane
/// within one divider thickness of its minimum counts as collapsed.
#[must_use]
pub fn is_collapsed_size(size: f64, min_size: f64, divider_size: f64, extent: f64) -> bool {
    let threshold = to_percent(divider_size, extent);
    size - min_size <= threshold + EPSILON
}

/// Restore target for an expanding pane.
///
/// The remembered pre-collapse size when it was meaningfully above the
/// minimum, otherwise the resolver's default share.
#[must_use]
pub fn restore_size(current: f64, min_size: f64, default_share: f64) -> f64 {
    if current > min_size + EPSILON {
        current
    } else {
        default_share
    }
}
