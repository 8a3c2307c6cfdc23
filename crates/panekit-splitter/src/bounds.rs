//! Divider placement and travel bounds.
//!
//! Each divider sits at the cumulative-size boundary between its pair's
//! panes and may travel between two pixel bounds derived from: the
//! neighboring dividers (each interior boundary reserves one divider
//! thickness), both panes' minimum sizes, the alignment-dependent edge
//! exception, and, in single-pair layouts, the first pane's maximum.
//!
//! Placements are plain data a host applies to presentation. RTL hosts
//! receive mirrored placements (translate negated, bounds swapped and
//! negated); the engine's percentage bookkeeping never mirrors.

use panekit_core::{Align, to_pixels};
use serde::{Deserialize, Serialize};

/// Pixel placement of one divider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerPlacement {
    /// Offset of the boundary this divider represents.
    pub translate: f64,
    /// Lowest offset the divider may be dragged to.
    pub min_transform: f64,
    /// Highest offset the divider may be dragged to.
    pub max_transform: f64,
}

impl DividerPlacement {
    /// Mirror for right-to-left hosts.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            translate: -self.translate,
            min_transform: -self.max_transform,
            max_transform: -self.min_transform,
        }
    }
}

/// Everything the calculator reads per recompute.
#[derive(Debug, Clone, Copy)]
pub struct BoundsContext<'a> {
    pub sizes: &'a [f64],
    pub min_sizes: &'a [f64],
    /// Single-pair layouts only: first pane's effective maximum.
    pub max_size: Option<f64>,
    pub extent: f64,
    pub divider_size: f64,
    pub align: Align,
    pub rtl: bool,
}

/// Compute placements for every divider from scratch.
///
/// Needed after container resize and collapse/expand; a committed drag
/// only shifts the neighbors via [`shift_neighbors`].
#[must_use]
pub fn compute_placements(ctx: &BoundsContext<'_>) -> Vec<DividerPlacement> {
    let n = ctx.sizes.len();
    if n < 2 {
        return Vec::new();
    }
    let mut placements = Vec::with_capacity(n - 1);
    let mut before = 0.0;
    for i in 0..n - 1 {
        let boundary = before + ctx.sizes[i];
        let after_end = boundary + ctx.sizes[i + 1];

        let leading_reserve = if i == 0 {
            edge_reservation(ctx.align, true, ctx.divider_size)
        } else {
            ctx.divider_size
        };
        let trailing_reserve = if i == n - 2 {
            edge_reservation(ctx.align, false, ctx.divider_size)
        } else {
            ctx.divider_size
        };

        let min_transform =
            to_pixels(before + ctx.min_sizes[i], ctx.extent) + leading_reserve;
        let mut max_transform =
            to_pixels(after_end - ctx.min_sizes[i + 1], ctx.extent) - trailing_reserve;

        // With exactly one pair the first pane's maximum bounds the
        // divider instead of the full remaining extent.
        if n == 2
            && let Some(max) = ctx.max_size
        {
            max_transform = max_transform.min(to_pixels(max, ctx.extent));
        }

        let placement = DividerPlacement {
            translate: to_pixels(boundary, ctx.extent),
            min_transform,
            max_transform,
        };
        placements.push(if ctx.rtl { placement.mirrored() } else { placement });
        before = boundary;
    }
    placements
}

/// Thickness reserved at an extreme boundary.
///
/// The anchored edge keeps a divider flush against it and reserves its
/// thickness; the free edge grants the full travel range.
fn edge_reservation(align: Align, leading: bool, thickness: f64) -> f64 {
    match (align, leading) {
        (Align::Start, true) | (Align::End, false) => 0.0,
        (Align::Start, false) | (Align::End, true) => thickness,
    }
}

/// Shift the dividers adjacent to a committed pair by the committed pixel
/// delta.
///
/// Only the immediate neighbors depend on the moved boundary: the left
/// neighbor's upper bound and the right neighbor's lower bound follow it.
/// The committed divider's own bounds are unchanged (its outer boundaries
/// did not move); the engine sets its translate from the final sizes.
pub fn shift_neighbors(placements: &mut [DividerPlacement], pair: usize, delta_px: f64, rtl: bool) {
    let delta = if rtl { -delta_px } else { delta_px };
    if pair > 0
        && let Some(left) = placements.get_mut(pair - 1)
    {
        if rtl {
            left.min_transform += delta;
        } else {
            left.max_transform += delta;
        }
    }
    if let Some(right) = placements.get_mut(pair + 1) {
        if rtl {
            right.max_transform += delta;
        } else {
            right.min_transform += delta;
        }
    }
}
