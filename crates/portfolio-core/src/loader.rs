//! Simulated loading progress for the splash screen.

use rand::Rng;

use crate::constants::{LOADER_STEP_MAX, LOADER_STEP_MIN};

/// Progress percentage that climbs by a random step per tick and saturates
/// at 100. The web glue ticks it on an interval and reads the percentage
/// into the splash readouts.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoaderProgress {
    percent: u32,
}

impl LoaderProgress {
    pub fn new() -> Self {
        Self { percent: 0 }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }

    /// Advance by one tick's random step and return the new percentage.
    pub fn advance(&mut self, rng: &mut impl Rng) -> u32 {
        let step = rng.gen_range(LOADER_STEP_MIN..LOADER_STEP_MAX);
        self.percent = (self.percent + step).min(100);
        self.percent
    }
}
