//! Layout snapshot persistence.
//!
//! The engine reads one snapshot at initialization and writes one after
//! each committed size change when persistence is enabled. The concrete
//! storage (browser local storage, a config file, a test map) lives
//! behind [`SnapshotStore`]; the engine only defines the snapshot shape,
//! the acceptance rule, and the key scheme.
//!
//! Concurrent writers to the same key are not synchronized; the last
//! write wins.

use panekit_core::{Align, Axis, SplitterOptions};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key scheme prefix: keys are `panekit-{unique_id}-layout`.
pub const SNAPSHOT_KEY_PREFIX: &str = "panekit";

/// Key scheme suffix.
pub const SNAPSHOT_KEY_SUFFIX: &str = "layout";

/// Build the storage key for a splitter instance.
#[must_use]
pub fn snapshot_key(unique_id: &str) -> String {
    format!("{SNAPSHOT_KEY_PREFIX}-{unique_id}-{SNAPSHOT_KEY_SUFFIX}")
}

/// Persisted layout snapshot.
///
/// A snapshot is honored only when the pane count and the host
/// configuration it was taken under match the live instance exactly;
/// otherwise it is discarded and sizes are computed fresh. A stale
/// snapshot is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub sizes: Vec<f64>,
    pub align: Align,
    pub axis: Axis,
    pub disabled: bool,
}

impl LayoutSnapshot {
    /// Acceptance rule: pane count and align/axis/disabled all match.
    #[must_use]
    pub fn matches(&self, pane_count: usize, options: &SplitterOptions) -> bool {
        self.sizes.len() == pane_count
            && self.align == options.align
            && self.axis == options.axis
            && self.disabled == options.disabled
    }

    /// Serialize to JSON for string-keyed stores.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from JSON; malformed input yields `None`, never an
    /// error.
    #[must_use]
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Storage adapter the engine persists through.
pub trait SnapshotStore {
    fn load(&self, key: &str) -> Option<LayoutSnapshot>;
    fn save(&mut self, key: &str, snapshot: &LayoutSnapshot);
}

/// Shared handle so a host can keep inspecting a store it handed to one
/// or more splitters.
impl<S: SnapshotStore> SnapshotStore for std::rc::Rc<std::cell::RefCell<S>> {
    fn load(&self, key: &str) -> Option<LayoutSnapshot> {
        self.borrow().load(key)
    }

    fn save(&mut self, key: &str, snapshot: &LayoutSnapshot) {
        self.borrow_mut().save(key, snapshot);
    }
}

/// In-memory store for tests and single-process hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    entries: FxHashMap<String, LayoutSnapshot>,
}

impl MemorySnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seed an entry, e.g. to simulate a previous session in tests.
    pub fn insert(&mut self, key: impl Into<String>, snapshot: LayoutSnapshot) {
        self.entries.insert(key.into(), snapshot);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&LayoutSnapshot> {
        self.entries.get(key)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, key: &str) -> Option<LayoutSnapshot> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, snapshot: &LayoutSnapshot) {
        self.entries.insert(key.to_owned(), snapshot.clone());
    }
}
