//! End-to-end engine scenarios: veto flow, collapse/expand round trips,
//! and snapshot persistence across instances.

use std::cell::RefCell;
use std::rc::Rc;

use panekit_splitter::resolver::PaneDecl;
use panekit_splitter::{
    Align, Axis, DragStartOutcome, LayoutSnapshot, MemorySnapshotStore, SizeValue, Splitter,
    SplitterEvent, SplitterObserver, SplitterOptions, ToggleOutcome, snapshot_key,
};

fn assert_sum_100(engine: &Splitter) {
    let sum: f64 = engine.sizes().iter().sum();
    assert!((sum - 100.0).abs() < 1e-6, "sizes sum to {sum}");
}

struct VetoAll;

impl SplitterObserver for VetoAll {
    fn before_size_changed(&mut self, _event: &SplitterEvent) -> bool {
        false
    }
    fn before_collapsed(&mut self, _event: &SplitterEvent) -> bool {
        false
    }
    fn before_expanded(&mut self, _event: &SplitterEvent) -> bool {
        false
    }
}

#[derive(Default)]
struct Recorder {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl SplitterObserver for Recorder {
    fn size_changed(&mut self, _event: &SplitterEvent) {
        self.log.borrow_mut().push("size_changed");
    }
    fn collapsed(&mut self, _event: &SplitterEvent) {
        self.log.borrow_mut().push("collapsed");
    }
    fn expanded(&mut self, _event: &SplitterEvent) {
        self.log.borrow_mut().push("expanded");
    }
}

#[test]
fn vetoed_size_change_leaves_sizes_untouched() {
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    engine.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);
    engine.add_observer(Box::new(VetoAll));

    let before = engine.sizes();
    assert_eq!(engine.drag_start(0), DragStartOutcome::Vetoed);
    assert_eq!(engine.drag_move(100.0), None);
    engine.drag_end();
    assert_eq!(engine.sizes(), before);
    assert!(!engine.is_dragging());
}

#[test]
fn vetoed_collapse_and_expand_mutate_nothing() {
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    engine.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);
    engine.add_observer(Box::new(VetoAll));

    let before = engine.sizes();
    assert_eq!(engine.collapse(0), ToggleOutcome::Vetoed);
    assert_eq!(engine.expand(0), ToggleOutcome::Vetoed);
    assert_eq!(engine.sizes(), before);
    assert!(!engine.panes()[0].collapsed);
}

#[test]
fn collapse_expand_round_trip_restores_size() {
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    let decls = [
        PaneDecl {
            size: SizeValue::Percent(40.0),
            min_size: SizeValue::Percent(10.0),
            ..PaneDecl::default()
        },
        PaneDecl::default(),
    ];
    engine.initialize(&decls, 1000.0);

    let log = Rc::new(RefCell::new(Vec::new()));
    engine.add_observer(Box::new(Recorder { log: Rc::clone(&log) }));

    assert_eq!(engine.collapse(0), ToggleOutcome::Collapsed);
    assert!((engine.sizes()[0] - 10.0).abs() < 1e-6);
    assert!(engine.panes()[0].collapsed);
    assert_sum_100(&engine);

    assert_eq!(engine.expand(0), ToggleOutcome::Expanded);
    assert!((engine.sizes()[0] - 40.0).abs() < 1e-6);
    assert!(!engine.panes()[0].collapsed);
    assert_sum_100(&engine);

    assert_eq!(log.borrow().as_slice(), ["collapsed", "expanded"]);
}

#[test]
fn collapse_of_pane_at_minimum_reports_unchanged() {
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    let decls = [
        PaneDecl {
            size: SizeValue::Percent(10.0),
            min_size: SizeValue::Percent(10.0),
            ..PaneDecl::default()
        },
        PaneDecl::default(),
    ];
    engine.initialize(&decls, 1000.0);
    assert_eq!(engine.collapse(0), ToggleOutcome::Unchanged);
    assert!(!engine.panes()[0].collapsed);
}

#[test]
fn expand_after_initial_collapse_restores_the_equal_share() {
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    let decls = [
        PaneDecl {
            min_size: SizeValue::Percent(5.0),
            collapsed: true,
            ..PaneDecl::default()
        },
        PaneDecl::default(),
        PaneDecl::default(),
    ];
    engine.initialize(&decls, 900.0);
    assert!(engine.panes()[0].collapsed);
    assert!((engine.sizes()[0] - 5.0).abs() < 1e-6);

    assert_eq!(engine.expand(0), ToggleOutcome::Expanded);
    // Pre-collapse size and the resolver's equal share coincide here;
    // either way the pane returns to a third of the container.
    assert!((engine.sizes()[0] - 100.0 / 3.0).abs() < 1e-6);
    assert_sum_100(&engine);
}

#[test]
fn committed_drag_persists_a_snapshot() {
    let store = Rc::new(RefCell::new(MemorySnapshotStore::new()));
    let mut options = SplitterOptions::default();
    options.save_position = true;
    options.unique_id = Some("main".into());

    let mut engine = Splitter::new(options)
        .expect("valid options")
        .with_store(Rc::clone(&store));
    engine.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);

    engine.drag_start(0);
    engine.drag_move(100.0);
    engine.drag_end();

    let saved = store
        .borrow()
        .get(&snapshot_key("main"))
        .cloned()
        .expect("snapshot saved");
    assert_eq!(saved.sizes.len(), 2);
    assert!((saved.sizes[0] - 60.0).abs() < 1e-6);
    assert_eq!(saved.axis, Axis::X);
    assert_eq!(saved.align, Align::Start);
    assert!(!saved.disabled);
}

#[test]
fn matching_snapshot_restores_across_instances() {
    let store = Rc::new(RefCell::new(MemorySnapshotStore::new()));
    let mut options = SplitterOptions::default();
    options.save_position = true;
    options.unique_id = Some("sidebar".into());

    let mut first = Splitter::new(options.clone())
        .expect("valid options")
        .with_store(Rc::clone(&store));
    first.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);
    first.drag_start(0);
    first.drag_move(250.0);
    first.drag_end();

    let mut second = Splitter::new(options)
        .expect("valid options")
        .with_store(Rc::clone(&store));
    second.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);
    assert!((second.sizes()[0] - 75.0).abs() < 1e-6);
}

#[test]
fn config_mismatch_discards_the_snapshot() {
    let store = Rc::new(RefCell::new(MemorySnapshotStore::new()));
    store.borrow_mut().insert(
        snapshot_key("sidebar"),
        LayoutSnapshot {
            sizes: vec![75.0, 25.0],
            align: Align::Start,
            axis: Axis::Y,
            disabled: false,
        },
    );

    // Same pane count, different axis: computed defaults win.
    let mut options = SplitterOptions::default();
    options.save_position = true;
    options.unique_id = Some("sidebar".into());
    options.axis = Axis::X;

    let mut engine = Splitter::new(options)
        .expect("valid options")
        .with_store(Rc::clone(&store));
    engine.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);
    assert!((engine.sizes()[0] - 50.0).abs() < 1e-6);
}

#[test]
fn pane_count_mismatch_discards_the_snapshot() {
    let store = Rc::new(RefCell::new(MemorySnapshotStore::new()));
    store.borrow_mut().insert(
        snapshot_key("grid"),
        LayoutSnapshot {
            sizes: vec![20.0, 30.0, 50.0],
            align: Align::Start,
            axis: Axis::X,
            disabled: false,
        },
    );

    let mut options = SplitterOptions::default();
    options.save_position = true;
    options.unique_id = Some("grid".into());

    let mut engine = Splitter::new(options)
        .expect("valid options")
        .with_store(Rc::clone(&store));
    engine.initialize(&[PaneDecl::default(), PaneDecl::default()], 1000.0);
    assert!((engine.sizes()[0] - 50.0).abs() < 1e-6);
}

#[test]
fn reinitialization_without_snapshot_is_idempotent() {
    let decls = [
        PaneDecl {
            size: SizeValue::Percent(20.0),
            min_size: SizeValue::Percent(10.0),
            ..PaneDecl::default()
        },
        PaneDecl {
            size: SizeValue::Pixels(90.0),
            ..PaneDecl::default()
        },
        PaneDecl::default(),
    ];
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    engine.initialize(&decls, 900.0);
    let first = engine.sizes();
    engine.initialize(&decls, 900.0);
    assert_eq!(engine.sizes(), first);
}

#[test]
fn divider_clamp_lands_exactly_on_the_minimum() {
    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    let decls = [
        PaneDecl {
            min_size: SizeValue::Percent(25.0),
            ..PaneDecl::default()
        },
        PaneDecl::default(),
    ];
    engine.initialize(&decls, 1000.0);
    engine.drag_start(0);
    // Far past the limit: the start pane must land exactly at its min.
    engine.drag_move(-900.0);
    engine.drag_end();
    assert_eq!(engine.sizes()[0], 25.0);
    assert_sum_100(&engine);
}
