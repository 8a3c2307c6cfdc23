//! Vetoable notifications around pair mutations.
//!
//! Observers see every mutation twice: a `before_*` hook that may veto
//! it by returning `false`, and an after notification once it committed.
//! A veto is ordinary control flow — the operation simply does not run
//! and no state is mutated.

use crate::bounds::DividerPlacement;

/// State surrounding one pair mutation, delivered with every
/// notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterEvent {
    /// All pane sizes in percent.
    pub sizes: Vec<f64>,
    /// All pane minimums in percent.
    pub min_sizes: Vec<f64>,
    /// Effective maximums (single-pair layouts only; empty otherwise).
    pub max_sizes: Vec<f64>,
    /// Index of the affected pair.
    pub pair: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub start_size: f64,
    pub end_size: f64,
    /// Placement of the affected pair's divider.
    pub divider: DividerPlacement,
}

/// Observer hooks for splitter mutations.
///
/// `before_*` hooks run with the pre-mutation state and may veto;
/// defaults allow everything and observe nothing, so implementors only
/// override what they care about.
pub trait SplitterObserver {
    fn before_size_changed(&mut self, _event: &SplitterEvent) -> bool {
        true
    }
    fn size_changed(&mut self, _event: &SplitterEvent) {}

    fn before_collapsed(&mut self, _event: &SplitterEvent) -> bool {
        true
    }
    fn collapsed(&mut self, _event: &SplitterEvent) {}

    fn before_expanded(&mut self, _event: &SplitterEvent) -> bool {
        true
    }
    fn expanded(&mut self, _event: &SplitterEvent) {}
}
