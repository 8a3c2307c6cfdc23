//! Pair registry: one (start, end) index pair per divider.
//!
//! Pairs hold integer indices into the flat pane array rather than live
//! references, so ownership stays with the engine and rebuilding on any
//! structural change is a plain reallocation.

use serde::{Deserialize, Serialize};

/// Index pair linking two adjacent panes around one divider.
///
/// `end` is always `start + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanePair {
    pub start: usize,
    pub end: usize,
}

impl PanePair {
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self {
            start,
            end: start + 1,
        }
    }
}

/// Build the registry for `pane_count` panes: one pair per interior
/// boundary, `pane_count - 1` in total.
#[must_use]
pub fn build_pairs(pane_count: usize) -> Vec<PanePair> {
    (0..pane_count.saturating_sub(1))
        .map(PanePair::new)
        .collect()
}

/// Find the pair whose start or end pane is `pane`.
///
/// A pane in the middle of the stack belongs to two pairs; the pair where
/// it is the start pane wins, matching divider-centric addressing.
#[must_use]
pub fn pair_for_pane(pairs: &[PanePair], pane: usize) -> Option<usize> {
    pairs
        .iter()
        .position(|pair| pair.start == pane)
        .or_else(|| pairs.iter().position(|pair| pair.end == pane))
}
