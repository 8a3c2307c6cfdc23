//! Fuzz-style invariants for the splitter engine.
//!
//! Random operation streams (drag cycles, keyboard steps, collapse,
//! expand, extent changes) run against the public API; after every
//! committed mutation the two global invariants must hold: sizes sum to
//! 100, and no pane sits below its minimum.

use panekit_splitter::resolver::PaneDecl;
use panekit_splitter::{SizeValue, Splitter, SplitterOptions, StepDirection};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_f64_range(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        min + unit * (max - min)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u64() % len as u64) as usize
    }
}

fn random_decls(rng: &mut Lcg, pane_count: usize) -> Vec<PaneDecl> {
    (0..pane_count)
        .map(|_| {
            let size = match rng.next_u64() % 3 {
                0 => SizeValue::Unset,
                1 => SizeValue::Percent(rng.next_f64_range(0.0, 80.0)),
                _ => SizeValue::Pixels(rng.next_f64_range(0.0, 800.0)),
            };
            let min_size = match rng.next_u64() % 3 {
                0 => SizeValue::Unset,
                _ => SizeValue::Percent(rng.next_f64_range(0.0, 30.0)),
            };
            PaneDecl {
                size,
                min_size,
                ..PaneDecl::default()
            }
        })
        .collect()
}

fn assert_invariants(engine: &Splitter, step: usize) {
    let sizes = engine.sizes();
    let sum: f64 = sizes.iter().sum();
    assert!(
        (sum - 100.0).abs() < 1e-6,
        "step {step}: sizes sum to {sum}: {sizes:?}"
    );
    for (i, (size, min)) in sizes.iter().zip(engine.min_sizes()).enumerate() {
        assert!(
            size + 1e-6 >= min,
            "step {step}: pane {i} size {size} below min {min}"
        );
    }
    assert_eq!(engine.dividers().len(), engine.pairs().len());
}

fn run_stream(seed: u64, pane_count: usize, steps: usize) {
    let mut rng = Lcg::new(seed);
    let decls = random_decls(&mut rng, pane_count);
    let extent = rng.next_f64_range(200.0, 2000.0);

    let mut engine = Splitter::new(SplitterOptions::default()).expect("valid options");
    engine.initialize(&decls, extent);
    assert_invariants(&engine, 0);

    if engine.pairs().is_empty() {
        return;
    }

    for step in 1..=steps {
        let pair = rng.choose_index(engine.pairs().len());
        match rng.next_u64() % 5 {
            0 => {
                engine.drag_start(pair);
                let moves = 1 + rng.choose_index(4);
                for _ in 0..moves {
                    engine.drag_move(rng.next_f64_range(-500.0, 500.0));
                }
                engine.drag_end();
            }
            1 => {
                let direction = if rng.next_u64() % 2 == 0 {
                    StepDirection::Back
                } else {
                    StepDirection::Forward
                };
                engine.keyboard_resize(pair, direction);
            }
            2 => {
                engine.collapse(pair);
            }
            3 => {
                engine.expand(pair);
            }
            _ => {
                engine.set_extent(rng.next_f64_range(100.0, 3000.0));
            }
        }
        assert_invariants(&engine, step);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_operation_streams_hold_invariants(
        seed in any::<u64>(),
        pane_count in 2usize..7,
        steps in 10usize..60,
    ) {
        run_stream(seed, pane_count, steps);
    }
}

#[test]
fn known_seeds_replay_clean() {
    // Deterministic spot checks so a plain `cargo test` exercises the
    // stream even when proptest shrinks elsewhere.
    for seed in [0, 1, 42, 0xDEAD_BEEF, u64::MAX] {
        run_stream(seed, 4, 40);
        run_stream(seed, 2, 40);
    }
}
