//! Placement and timing for the decorative falling petals.

use rand::Rng;

use crate::constants::{PETAL_DELAY_MAX_SEC, PETAL_DURATION_MAX_SEC, PETAL_DURATION_MIN_SEC};

/// One petal's randomized layout: horizontal start position plus the CSS
/// animation delay and duration that stagger the fall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetalSpec {
    pub left_percent: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
}

impl PetalSpec {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_percent: rng.gen_range(0.0..100.0),
            delay_sec: rng.gen_range(0.0..PETAL_DELAY_MAX_SEC),
            duration_sec: rng.gen_range(PETAL_DURATION_MIN_SEC..PETAL_DURATION_MAX_SEC),
        }
    }
}
