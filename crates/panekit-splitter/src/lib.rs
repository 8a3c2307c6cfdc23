#![forbid(unsafe_code)]

//! Resizable multi-pane layout and constraint-resolution engine.
//!
//! A [`Splitter`] models N adjustable panes along one axis separated by
//! draggable dividers. It owns the whole sizing state:
//!
//! - [`resolver`]: normalizes heterogeneous declared sizing (fixed,
//!   minimum, maximum, percentage, pixels) into a 0–100% layout and
//!   resolves over-subscription.
//! - [`pair`]: one (start, end) index pair per divider over a flat pane
//!   arena.
//! - [`bounds`]: per-divider pixel travel bounds with RTL mirroring.
//! - [`drag`]: clamped pixel-to-percent drag and keyboard mutation.
//! - [`collapse`]: collapse/expand vocabulary with restore memory.
//! - [`persist`]: snapshot shape, key scheme, and store adapter.
//! - [`events`]: vetoable before/after notifications.
//!
//! The engine is a pure model: every mutation updates plain data
//! (`sizes()`, [`DividerPlacement`]s) that a host applies to presentation
//! in a separate step, so the constraint math is testable without any UI.
//!
//! # Invariants
//!
//! 1. Pane sizes always sum to 100% (floating-point tolerance) after
//!    every committed mutation.
//! 2. No pane sits below its minimum size; a collapsed pane sits exactly
//!    at it.
//! 3. Exactly `pane_count - 1` pairs exist; pair `i` links panes `i` and
//!    `i + 1`.
//! 4. At most one drag interaction is in flight at a time.

pub mod bounds;
pub mod collapse;
pub mod drag;
pub mod engine;
pub mod events;
pub mod pair;
pub mod persist;
pub mod resolver;

pub use bounds::DividerPlacement;
pub use collapse::ToggleOutcome;
pub use drag::{ActiveDrag, DragEndOutcome, DragStartOutcome, StepDirection};
pub use engine::Splitter;
pub use events::{SplitterEvent, SplitterObserver};
pub use pair::PanePair;
pub use persist::{LayoutSnapshot, MemorySnapshotStore, SnapshotStore, snapshot_key};
pub use resolver::{PaneDecl, ResolvedLayout};

// Re-export the core surface hosts need to declare panes and options.
pub use panekit_core::{Align, Axis, OptionsError, SizeValue, SplitterOptions};
