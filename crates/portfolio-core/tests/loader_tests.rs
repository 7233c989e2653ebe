// Host-side tests for the splash loader progress model.

use portfolio_core::constants::{LOADER_STEP_MAX, LOADER_STEP_MIN};
use portfolio_core::loader::LoaderProgress;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn progress_climbs_by_bounded_steps_until_complete() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut loader = LoaderProgress::new();
    let mut prev = loader.percent();
    assert_eq!(prev, 0);

    let mut ticks = 0;
    while !loader.is_complete() {
        let pct = loader.advance(&mut rng);
        let step = pct - prev;
        assert!(pct <= 100);
        if pct < 100 {
            assert!(
                (LOADER_STEP_MIN..LOADER_STEP_MAX).contains(&step),
                "step {step} out of range"
            );
        }
        prev = pct;
        ticks += 1;
        assert!(ticks <= 20, "loader took too long to complete");
    }
    assert_eq!(loader.percent(), 100);
}

#[test]
fn advance_after_completion_stays_at_100() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut loader = LoaderProgress::new();
    while !loader.is_complete() {
        loader.advance(&mut rng);
    }
    assert_eq!(loader.advance(&mut rng), 100);
    assert!(loader.is_complete());
}

#[test]
fn same_seed_produces_same_trajectory() {
    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut loader = LoaderProgress::new();
        let mut trace = Vec::new();
        while !loader.is_complete() {
            trace.push(loader.advance(&mut rng));
        }
        trace
    };
    assert_eq!(run(1234), run(1234));
}
