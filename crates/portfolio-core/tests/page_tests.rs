// Host-side tests for the scroll predicates, cursor easing, and petal
// placement helpers.

use portfolio_core::motion::approach;
use portfolio_core::page::{
    back_to_top_visible, hero_parallax_offset, navbar_elevated, reveal_triggered,
};
use portfolio_core::petals::PetalSpec;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn navbar_elevates_past_the_header() {
    assert!(!navbar_elevated(0.0));
    assert!(!navbar_elevated(80.0));
    assert!(navbar_elevated(81.0));
}

#[test]
fn back_to_top_shows_after_half_a_viewport() {
    assert!(!back_to_top_visible(300.0, 800.0));
    assert!(back_to_top_visible(401.0, 800.0));
}

#[test]
fn reveal_band_sits_at_85_percent_of_the_viewport() {
    assert!(reveal_triggered(679.0, 800.0));
    assert!(!reveal_triggered(680.0, 800.0));
    // Elements above the viewport stay revealed.
    assert!(reveal_triggered(-100.0, 800.0));
}

#[test]
fn hero_parallax_scales_with_scroll() {
    assert_eq!(hero_parallax_offset(0.0), 0.0);
    assert_eq!(hero_parallax_offset(1000.0), 300.0);
}

#[test]
fn approach_converges_without_overshoot() {
    let mut pos = 0.0_f32;
    let mut prev_dist = f32::MAX;
    for _ in 0..120 {
        pos = approach(pos, 100.0, 0.1, 1.0 / 60.0);
        let dist = (100.0 - pos).abs();
        assert!(dist <= prev_dist, "follower moved away from the target");
        assert!(pos <= 100.0, "follower overshot the target");
        prev_dist = dist;
    }
    // Two seconds at tau=0.1 is ~20 time constants; effectively converged.
    assert!(prev_dist < 0.01);
}

#[test]
fn approach_is_framerate_independent() {
    // One 100ms step covers the same ground as four 25ms steps.
    let coarse = approach(0.0, 100.0, 0.3, 0.1);
    let mut fine = 0.0;
    for _ in 0..4 {
        fine = approach(fine, 100.0, 0.3, 0.025);
    }
    assert!((coarse - fine).abs() < 1e-3);
}

#[test]
fn petal_specs_stay_within_the_styling_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let petal = PetalSpec::random(&mut rng);
        assert!((0.0..100.0).contains(&petal.left_percent));
        assert!((0.0..5.0).contains(&petal.delay_sec));
        assert!((5.0..15.0).contains(&petal.duration_sec));
    }
}
