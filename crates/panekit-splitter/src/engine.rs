//! The [`Splitter`] engine: owner of all pane, pair, and divider state.
//!
//! Single-threaded and synchronous; every mutation happens inside the
//! method that triggered it and returns a typed outcome. Hosts are
//! expected to initialize once the container has real measured geometry
//! (the one-frame deferral of DOM hosts is host glue, not engine state)
//! and to re-run [`Splitter::initialize`] whenever the pane list changes.

use std::fmt;

use panekit_core::{OptionsError, SplitterOptions, sanitize, to_percent, to_pixels};

use crate::bounds::{BoundsContext, DividerPlacement, compute_placements, shift_neighbors};
use crate::collapse::{ToggleOutcome, is_collapsed_size, restore_size};
use crate::drag::{ActiveDrag, DragEndOutcome, DragStartOutcome, StepDirection, clamp_diff};
use crate::events::{SplitterEvent, SplitterObserver};
use crate::pair::{PanePair, build_pairs, pair_for_pane};
use crate::persist::{LayoutSnapshot, SnapshotStore, snapshot_key};
use crate::resolver::{EPSILON, PaneDecl, resolve};

/// Runtime state of one pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneState {
    /// Current size in percent, 0–100.
    pub current_size: f64,
    /// Minimum size in percent.
    pub min_size: f64,
    /// Size restored on expand.
    pub expand_size: f64,
    pub collapsed: bool,
}

/// Split-view layout engine.
pub struct Splitter {
    options: SplitterOptions,
    panes: Vec<PaneState>,
    pairs: Vec<PanePair>,
    placements: Vec<DividerPlacement>,
    /// Single-pair layouts only: effective first-pane maximum.
    max_size: Option<f64>,
    /// Equal share handed to undeclared panes at resolution; collapse
    /// restore fallback.
    default_share: f64,
    /// Container extent in pixels along the split axis.
    extent: f64,
    /// Exclusive interaction lock; at most one drag at a time.
    active: Option<ActiveDrag>,
    observers: Vec<Box<dyn SplitterObserver>>,
    store: Option<Box<dyn SnapshotStore>>,
}

impl Splitter {
    /// Create an empty engine with validated options.
    pub fn new(options: SplitterOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            panes: Vec::new(),
            pairs: Vec::new(),
            placements: Vec::new(),
            max_size: None,
            default_share: 0.0,
            extent: 0.0,
            active: None,
            observers: Vec::new(),
            store: None,
        })
    }

    /// Attach the persistence store.
    #[must_use]
    pub fn with_store(mut self, store: impl SnapshotStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn SplitterObserver>) {
        self.observers.push(observer);
    }

    /// (Re)initialize from declared pane attributes and the measured
    /// container extent. Tears down and rebuilds all derived state; any
    /// in-flight drag is dropped.
    pub fn initialize(&mut self, decls: &[PaneDecl], extent: f64) {
        self.set_extent_value(extent);
        self.active = None;

        let snapshot = self.load_snapshot();
        let resolved = resolve(decls, self.extent, snapshot.as_ref(), &self.options);

        self.panes = resolved
            .sizes
            .iter()
            .zip(&resolved.min_sizes)
            .map(|(&size, &min)| PaneState {
                current_size: size,
                min_size: min,
                expand_size: size,
                collapsed: false,
            })
            .collect();
        self.max_size = resolved.max_size;
        self.default_share = resolved.default_share;
        self.pairs = build_pairs(self.panes.len());
        self.recompute_placements();

        // Declared collapses run through the normal machine, flagged as
        // initial so a disabled splitter still honors them.
        for (pane, decl) in decls.iter().enumerate() {
            if decl.collapsed
                && let Some(pair) = self.pairs.iter().position(|p| p.start == pane)
            {
                self.collapse_impl(pair, true);
            }
        }
    }

    /// Update the measured container extent, keeping percentage sizes and
    /// recomputing pixel geometry.
    pub fn set_extent(&mut self, extent: f64) {
        self.set_extent_value(extent);
        self.recompute_placements();
    }

    fn set_extent_value(&mut self, extent: f64) {
        let clean = sanitize(extent).max(0.0);
        if clean != extent {
            tracing::debug!(extent, "degenerate container extent coerced to zero");
        }
        self.extent = clean;
    }

    // ---- accessors -----------------------------------------------------

    #[must_use]
    pub fn sizes(&self) -> Vec<f64> {
        self.panes.iter().map(|pane| pane.current_size).collect()
    }

    #[must_use]
    pub fn min_sizes(&self) -> Vec<f64> {
        self.panes.iter().map(|pane| pane.min_size).collect()
    }

    /// Effective maximums; one entry for two-pane layouts that declared a
    /// first-pane max, empty otherwise.
    #[must_use]
    pub fn max_sizes(&self) -> Vec<f64> {
        self.max_size.into_iter().collect()
    }

    #[must_use]
    pub fn panes(&self) -> &[PaneState] {
        &self.panes
    }

    #[must_use]
    pub fn pairs(&self) -> &[PanePair] {
        &self.pairs
    }

    /// Divider placements in presentation space (mirrored when RTL).
    #[must_use]
    pub fn dividers(&self) -> &[DividerPlacement] {
        &self.placements
    }

    /// The pair a pane belongs to, preferring the one it starts.
    #[must_use]
    pub fn pair_for_pane(&self, pane: usize) -> Option<usize> {
        pair_for_pane(&self.pairs, pane)
    }

    #[must_use]
    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    // ---- drag / keyboard ----------------------------------------------

    /// Begin a drag on `pair`. Emits the vetoable before-size-change
    /// notification; a veto aborts without touching any state.
    pub fn drag_start(&mut self, pair: usize) -> DragStartOutcome {
        if self.options.disabled {
            return DragStartOutcome::Disabled;
        }
        let Some(&PanePair { start, end }) = self.pairs.get(pair) else {
            return DragStartOutcome::NoSuchPair;
        };
        if self.active.is_some() {
            return DragStartOutcome::Busy;
        }
        let event = self.make_event(pair);
        if !self.notify_before_size_changed(&event) {
            return DragStartOutcome::Vetoed;
        }
        self.active = Some(ActiveDrag {
            pair,
            baseline: (
                self.panes[start].current_size,
                self.panes[end].current_size,
            ),
            base_translate: self.logical_translate(pair),
            diff: 0.0,
        });
        DragStartOutcome::Started
    }

    /// Apply an incremental pixel delta from the pointer (or one keyboard
    /// step). Returns the accumulated clamped percent diff, or `None`
    /// when no drag is in flight.
    pub fn drag_move(&mut self, delta_px: f64) -> Option<f64> {
        let Some(mut drag) = self.active else {
            return None;
        };
        let mut delta_pct = to_percent(delta_px, self.extent);
        if self.options.rtl {
            delta_pct = -delta_pct;
        }
        let PanePair { start, end } = self.pairs[drag.pair];
        drag.diff = clamp_diff(
            drag.diff + delta_pct,
            drag.baseline,
            self.panes[start].min_size,
            self.panes[end].min_size,
            self.single_pair_max(),
        );
        self.active = Some(drag);

        self.set_divider_translate(drag.pair, drag.base_translate + to_pixels(drag.diff, self.extent));
        if self.options.live_resize {
            self.panes[start].current_size = drag.baseline.0 + drag.diff;
            self.panes[end].current_size = drag.baseline.1 - drag.diff;
        }
        Some(drag.diff)
    }

    /// Commit the in-flight drag: final sizes land on both panes, the
    /// neighbor dividers shift by the committed pixel delta, the start
    /// pane's collapsed state is re-classified, observers hear
    /// size-changed, and the snapshot persists when enabled.
    pub fn drag_end(&mut self) -> DragEndOutcome {
        let Some(drag) = self.active.take() else {
            return DragEndOutcome::NoActiveDrag;
        };
        let PanePair { start, end } = self.pairs[drag.pair];
        self.panes[start].current_size = drag.baseline.0 + drag.diff;
        self.panes[end].current_size = drag.baseline.1 - drag.diff;

        let delta_px = to_pixels(drag.diff, self.extent);
        self.set_divider_translate(drag.pair, drag.base_translate + delta_px);
        shift_neighbors(&mut self.placements, drag.pair, delta_px, self.options.rtl);

        self.reclassify_collapse(start, drag.baseline.0);

        let event = self.make_event(drag.pair);
        self.notify_size_changed(&event);
        self.persist_snapshot();

        DragEndOutcome::Committed {
            pair: drag.pair,
            diff: drag.diff,
        }
    }

    /// One keyboard resize step: a full start/move/end cycle with the
    /// configured step distance. The step is a physical direction, so RTL
    /// mirroring falls out of the same path pointer deltas take.
    /// A vetoed, disabled, or busy start reports as `NoActiveDrag`.
    pub fn keyboard_resize(&mut self, pair: usize, direction: StepDirection) -> DragEndOutcome {
        match self.drag_start(pair) {
            DragStartOutcome::Started => {}
            _ => return DragEndOutcome::NoActiveDrag,
        }
        self.drag_move(self.options.resize_step * direction.sign());
        self.drag_end()
    }

    // ---- collapse / expand --------------------------------------------

    /// Collapse the pair's start pane to its minimum size.
    pub fn collapse(&mut self, pair: usize) -> ToggleOutcome {
        self.collapse_impl(pair, false)
    }

    fn collapse_impl(&mut self, pair_idx: usize, initial: bool) -> ToggleOutcome {
        if self.options.disabled && !initial {
            return ToggleOutcome::Ignored;
        }
        let Some(&PanePair { start, end }) = self.pairs.get(pair_idx) else {
            return ToggleOutcome::NoSuchPair;
        };
        if self.active.is_some() {
            return ToggleOutcome::Ignored;
        }
        let event = self.make_event(pair_idx);
        if !self.notify_before_collapsed(&event) {
            return ToggleOutcome::Vetoed;
        }

        let current = self.panes[start].current_size;
        let min = self.panes[start].min_size;
        let expand = restore_size(current, min, self.default_share);
        let diff = clamp_diff(
            min - current,
            (current, self.panes[end].current_size),
            min,
            self.panes[end].min_size,
            None,
        );
        if diff.abs() <= EPSILON {
            if initial {
                // Declared collapsed and already at the minimum.
                self.panes[start].collapsed = true;
                self.panes[start].expand_size = expand;
            }
            return ToggleOutcome::Unchanged;
        }

        self.panes[start].current_size = current + diff;
        self.panes[end].current_size -= diff;
        self.panes[start].collapsed = true;
        self.panes[start].expand_size = expand;
        self.recompute_placements();

        let event = self.make_event(pair_idx);
        self.notify_collapsed(&event);
        self.persist_snapshot();
        ToggleOutcome::Collapsed
    }

    /// Expand the pair's start pane back to its remembered size.
    pub fn expand(&mut self, pair_idx: usize) -> ToggleOutcome {
        if self.options.disabled {
            return ToggleOutcome::Ignored;
        }
        let Some(&PanePair { start, end }) = self.pairs.get(pair_idx) else {
            return ToggleOutcome::NoSuchPair;
        };
        if self.active.is_some() {
            return ToggleOutcome::Ignored;
        }
        let event = self.make_event(pair_idx);
        if !self.notify_before_expanded(&event) {
            return ToggleOutcome::Vetoed;
        }
        if !self.panes[start].collapsed {
            return ToggleOutcome::Unchanged;
        }

        let min = self.panes[start].min_size;
        let current = self.panes[start].current_size;
        let travel_px =
            (to_pixels(self.panes[start].expand_size, self.extent) - to_pixels(min, self.extent))
                .max(0.0);
        let target = to_percent(travel_px, self.extent) - (current - min);
        let diff = clamp_diff(
            target,
            (current, self.panes[end].current_size),
            min,
            self.panes[end].min_size,
            self.single_pair_max(),
        );
        if diff.abs() <= EPSILON {
            return ToggleOutcome::Unchanged;
        }

        self.panes[start].current_size = current + diff;
        self.panes[end].current_size -= diff;
        self.panes[start].collapsed = false;
        self.recompute_placements();

        let event = self.make_event(pair_idx);
        self.notify_expanded(&event);
        self.persist_snapshot();
        ToggleOutcome::Expanded
    }

    // ---- internals -----------------------------------------------------

    fn single_pair_max(&self) -> Option<f64> {
        if self.pairs.len() == 1 { self.max_size } else { None }
    }

    /// Divider translate in logical (unmirrored) space.
    fn logical_translate(&self, pair: usize) -> f64 {
        let translate = self.placements.get(pair).map_or(0.0, |p| p.translate);
        if self.options.rtl { -translate } else { translate }
    }

    fn set_divider_translate(&mut self, pair: usize, logical: f64) {
        let rtl = self.options.rtl;
        if let Some(placement) = self.placements.get_mut(pair) {
            placement.translate = if rtl { -logical } else { logical };
        }
    }

    fn recompute_placements(&mut self) {
        let sizes = self.sizes();
        let mins = self.min_sizes();
        let ctx = BoundsContext {
            sizes: &sizes,
            min_sizes: &mins,
            max_size: self.single_pair_max(),
            extent: self.extent,
            divider_size: self.options.divider_size,
            align: self.options.align,
            rtl: self.options.rtl,
        };
        self.placements = compute_placements(&ctx);
    }

    /// Reconcile manual drags with the collapse vocabulary: a start pane
    /// landing within one divider thickness of its minimum is collapsed,
    /// anything else is expanded.
    fn reclassify_collapse(&mut self, pane: usize, previous_size: f64) {
        let state = self.panes[pane];
        let now_collapsed = is_collapsed_size(
            state.current_size,
            state.min_size,
            self.options.divider_size,
            self.extent,
        );
        if now_collapsed && !state.collapsed {
            self.panes[pane].collapsed = true;
            self.panes[pane].expand_size =
                restore_size(previous_size, state.min_size, self.default_share);
        } else if !now_collapsed && state.collapsed {
            self.panes[pane].collapsed = false;
        }
    }

    fn make_event(&self, pair_idx: usize) -> SplitterEvent {
        let PanePair { start, end } = self.pairs[pair_idx];
        SplitterEvent {
            sizes: self.sizes(),
            min_sizes: self.min_sizes(),
            max_sizes: self.max_sizes(),
            pair: pair_idx,
            start_index: start,
            end_index: end,
            start_size: self.panes[start].current_size,
            end_size: self.panes[end].current_size,
            divider: self.placements[pair_idx],
        }
    }

    // Vetoes do not short-circuit: every observer hears the before-*
    // notification even when an earlier one already vetoed.
    fn notify_before_size_changed(&mut self, event: &SplitterEvent) -> bool {
        let mut allowed = true;
        for observer in &mut self.observers {
            allowed &= observer.before_size_changed(event);
        }
        allowed
    }

    fn notify_size_changed(&mut self, event: &SplitterEvent) {
        for observer in &mut self.observers {
            observer.size_changed(event);
        }
    }

    fn notify_before_collapsed(&mut self, event: &SplitterEvent) -> bool {
        let mut allowed = true;
        for observer in &mut self.observers {
            allowed &= observer.before_collapsed(event);
        }
        allowed
    }

    fn notify_collapsed(&mut self, event: &SplitterEvent) {
        for observer in &mut self.observers {
            observer.collapsed(event);
        }
    }

    fn notify_before_expanded(&mut self, event: &SplitterEvent) -> bool {
        let mut allowed = true;
        for observer in &mut self.observers {
            allowed &= observer.before_expanded(event);
        }
        allowed
    }

    fn notify_expanded(&mut self, event: &SplitterEvent) {
        for observer in &mut self.observers {
            observer.expanded(event);
        }
    }

    fn load_snapshot(&self) -> Option<LayoutSnapshot> {
        if !self.options.save_position {
            return None;
        }
        let id = self.options.unique_id.as_deref()?;
        self.store.as_ref()?.load(&snapshot_key(id))
    }

    fn persist_snapshot(&mut self) {
        if !self.options.save_position {
            return;
        }
        let Some(id) = self.options.unique_id.clone() else {
            return;
        };
        let snapshot = LayoutSnapshot {
            sizes: self.sizes(),
            align: self.options.align,
            axis: self.options.axis,
            disabled: self.options.disabled,
        };
        if let Some(store) = self.store.as_mut() {
            store.save(&snapshot_key(&id), &snapshot);
        }
    }
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("options", &self.options)
            .field("panes", &self.panes)
            .field("pairs", &self.pairs)
            .field("placements", &self.placements)
            .field("max_size", &self.max_size)
            .field("extent", &self.extent)
            .field("active", &self.active)
            .field("observers", &self.observers.len())
            .field("has_store", &self.store.is_some())
            .finish()
    }
}
