//! Initial layout resolution.
//!
//! Turns each pane's declared `size`/`min-size`/`max-size` into a
//! normalized percentage layout: sizes sum to 100 and every pane sits at
//! or above its minimum. Over-subscribed declarations are reduced
//! largest-first; panes declaring nothing share whatever remains.
//!
//! Resolution is a pure function of the declarations, the measured
//! container extent, and an optional persisted snapshot, so re-running it
//! with identical inputs yields identical output.

use panekit_core::SplitterOptions;

use crate::persist::LayoutSnapshot;
use panekit_core::SizeValue;

/// Comparison tolerance for percentage arithmetic.
pub const EPSILON: f64 = 1e-6;

/// Declared attributes for one pane, read once at (re)initialization.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneDecl {
    pub size: SizeValue,
    pub min_size: SizeValue,
    /// Honored only on the first pane of a two-pane layout.
    pub max_size: SizeValue,
    /// Start collapsed. Applied by the engine after resolution.
    pub collapsed: bool,
}

/// Output of initial layout resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayout {
    /// Pane sizes in percent, summing to 100.
    pub sizes: Vec<f64>,
    /// Pane minimums in percent, reduced so their sum is at most 100.
    pub min_sizes: Vec<f64>,
    /// Effective first-pane maximum; `Some` only for two-pane layouts
    /// that declared one.
    pub max_size: Option<f64>,
    /// Equal share handed to panes with no declared size. Remembered as
    /// the collapse-restore fallback.
    pub default_share: f64,
}

impl ResolvedLayout {
    fn empty() -> Self {
        Self {
            sizes: Vec::new(),
            min_sizes: Vec::new(),
            max_size: None,
            default_share: 0.0,
        }
    }
}

/// Resolve the initial layout.
///
/// `snapshot` overrides the computed sizes only when it matches the live
/// pane count and configuration; mismatches are discarded with a debug
/// record. Malformed declarations have already degraded to
/// [`SizeValue::Unset`] at parse time.
#[must_use]
pub fn resolve(
    decls: &[PaneDecl],
    extent: f64,
    snapshot: Option<&LayoutSnapshot>,
    options: &SplitterOptions,
) -> ResolvedLayout {
    let n = decls.len();
    if n == 0 {
        return ResolvedLayout::empty();
    }

    // Classification: resolve declared values to percent. A pane declaring
    // both size and min takes max(size, min) as its size.
    let mut mins: Vec<f64> = decls
        .iter()
        .map(|decl| {
            decl.min_size
                .resolve(extent)
                .map_or(0.0, |min| min.clamp(0.0, 100.0))
        })
        .collect();
    let mut declared: Vec<Option<f64>> = decls
        .iter()
        .enumerate()
        .map(|(i, decl)| {
            decl.size.resolve(extent).map(|size| {
                let size = size.max(0.0);
                if decl.min_size.is_set() {
                    size.max(mins[i])
                } else {
                    size
                }
            })
        })
        .collect();

    // Two-pane layouts may bound the first pane from above.
    let max_size = if n == 2 && decls[0].max_size.is_set() {
        decls[0].max_size.resolve(extent).map(|max| {
            reconcile_first_pane_max(
                &mut declared[0],
                mins[0],
                decls[0].min_size.is_set(),
                max.clamp(0.0, 100.0),
            )
        })
    } else {
        None
    };

    // Over-subscribed minimums lose from the top down.
    cap_largest_first(&mut mins, 100.0);

    // Declared sizes get the same treatment, then undeclared panes split
    // the remainder equally. Any pane left below its minimum is promoted
    // to it and counted as declared from then on; each promotion removes
    // one pane from the undeclared pool, so the loop is bounded.
    let mut sizes = vec![0.0; n];
    let mut default_share = 0.0;
    for _ in 0..=n {
        cap_declared(&mut declared, &mins, 100.0);
        let declared_sum: f64 = declared.iter().flatten().sum();
        let undeclared = declared.iter().filter(|slot| slot.is_none()).count();
        default_share = if undeclared > 0 {
            ((100.0 - declared_sum) / undeclared as f64).max(0.0)
        } else {
            0.0
        };
        for (slot, size) in declared.iter().zip(sizes.iter_mut()) {
            *size = slot.unwrap_or(default_share);
        }

        let violation = (0..n)
            .filter(|&i| sizes[i] + EPSILON < mins[i])
            .max_by(|&a, &b| {
                let gap_a = mins[a] - sizes[a];
                let gap_b = mins[b] - sizes[b];
                gap_a.partial_cmp(&gap_b).unwrap_or(std::cmp::Ordering::Equal)
            });
        match violation {
            Some(i) => declared[i] = Some(mins[i]),
            None => break,
        }
    }

    // Fully-declared layouts that under-subscribe the container are scaled
    // up to fill it; growth cannot cross a minimum.
    let sum: f64 = sizes.iter().sum();
    if sum <= EPSILON {
        // Degenerate declarations (all zero) fall back to equal shares.
        let share = 100.0 / n as f64;
        sizes.fill(share);
        default_share = share;
    } else if sum < 100.0 - EPSILON {
        let scale = 100.0 / sum;
        for size in &mut sizes {
            *size *= scale;
        }
    }

    // Scaling or default shares may have pushed the first pane past its
    // two-pane maximum; the excess belongs to its neighbor.
    if let Some(max) = max_size
        && sizes[0] > max + EPSILON
    {
        sizes[1] += sizes[0] - max;
        sizes[0] = max;
    }

    if let Some(snap) = snapshot {
        if snap.matches(n, options) {
            sizes.clone_from(&snap.sizes);
        } else {
            tracing::debug!(
                snapshot_panes = snap.sizes.len(),
                live_panes = n,
                "persisted layout snapshot discarded: pane count or configuration mismatch"
            );
        }
    }

    ResolvedLayout {
        sizes,
        min_sizes: mins,
        max_size,
        default_share,
    }
}

/// Reconcile the first pane's declared maximum against its declared
/// size/minimum. Returns the effective maximum and rewrites the declared
/// size where the rules demand it:
///
/// - size alone above max: size clamps to max
/// - min alone above max: max rises to the min
/// - both declared and min above max: size clamps to the min
/// - neither declared: max itself becomes the declared size
/// - both declared, min within max, size above max: size clamps to max
fn reconcile_first_pane_max(
    declared: &mut Option<f64>,
    min: f64,
    min_declared: bool,
    max: f64,
) -> f64 {
    match (*declared, min_declared) {
        (Some(size), false) if size > max => {
            *declared = Some(max);
            max
        }
        (None, true) if min > max => min,
        (Some(_), true) if min > max => {
            *declared = Some(min);
            min
        }
        (None, false) => {
            *declared = Some(max);
            max
        }
        (Some(size), true) if size > max => {
            *declared = Some(max);
            max
        }
        _ => max,
    }
}

/// Lower the largest entries first until the slice sums to `target`.
///
/// Water-level reduction: entries above the final level are cut to it,
/// ties share the cut equally, and smaller entries are untouched.
fn cap_largest_first(values: &mut [f64], target: f64) {
    let floors = vec![0.0; values.len()];
    cap_largest_first_with_floors(values, &floors, target);
}

/// Water-level reduction that never cuts an entry below its floor.
///
/// The level is found by bisection: the capped sum is monotone in the
/// level, so 64 halvings pin it far below the engine's epsilon. Floors
/// only hold entries up, they never raise one that started below.
fn cap_largest_first_with_floors(values: &mut [f64], floors: &[f64], target: f64) {
    let total: f64 = values.iter().sum();
    if total <= target || values.is_empty() {
        return;
    }
    let capped_at = |value: f64, floor: f64, level: f64| value.min(level).max(floor.min(value));

    let mut lo = 0.0;
    let mut hi = values.iter().copied().fold(0.0, f64::max);
    for _ in 0..64 {
        let mid = 0.5 * (lo + hi);
        let sum: f64 = values
            .iter()
            .zip(floors)
            .map(|(&value, &floor)| capped_at(value, floor, mid))
            .sum();
        if sum > target {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    let level = 0.5 * (lo + hi);
    for (value, &floor) in values.iter_mut().zip(floors) {
        *value = capped_at(*value, floor, level);
    }
}

fn cap_declared(declared: &mut [Option<f64>], mins: &[f64], target: f64) {
    let mut values = Vec::with_capacity(declared.len());
    let mut floors = Vec::with_capacity(declared.len());
    for (slot, &min) in declared.iter().zip(mins) {
        if let Some(value) = slot {
            values.push(*value);
            floors.push(min);
        }
    }
    cap_largest_first_with_floors(&mut values, &floors, target);
    let mut next = values.into_iter();
    for slot in declared.iter_mut() {
        if let Some(value) = slot.as_mut()
            && let Some(capped) = next.next()
        {
            *value = capped;
        }
    }
}
