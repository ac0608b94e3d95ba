//! Simulated upload.
//!
//! No bytes leave the browser: progress and the final verdict come from
//! an [`UploadSource`]. The page uses [`RandomUploadSource`]; tests plug
//! in seeded or scripted sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SimulationSettings;

/// Final verdict of a simulated upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted,
    Rejected,
}

/// Produces the progress steps and final outcome of an upload.
pub trait UploadSource {
    /// Progress to add on this tick, in percent. Must be non-negative.
    fn next_increment(&mut self) -> f64;

    /// Called once, when progress reaches 100.
    fn outcome(&mut self) -> UploadOutcome;
}

/// Random source: uniform increments in `[0, max_increment)` and a
/// `failure_probability` chance of rejection.
#[derive(Clone, Debug)]
pub struct RandomUploadSource<R = StdRng> {
    rng: R,
    settings: SimulationSettings,
}

impl RandomUploadSource<StdRng> {
    /// Source seeded from the browser's entropy.
    pub fn new(settings: SimulationSettings) -> Self {
        Self::with_rng(StdRng::from_entropy(), settings)
    }

    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64, settings: SimulationSettings) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), settings)
    }
}

impl<R: Rng> RandomUploadSource<R> {
    pub fn with_rng(rng: R, settings: SimulationSettings) -> Self {
        Self { rng, settings }
    }
}

impl<R: Rng> UploadSource for RandomUploadSource<R> {
    fn next_increment(&mut self) -> f64 {
        let bound = self.settings.max_increment;
        // gen_range rejects NaN, infinite and empty ranges
        if !(bound > 0.0) || !bound.is_finite() {
            return 0.0;
        }
        self.rng.gen_range(0.0..bound)
    }

    fn outcome(&mut self) -> UploadOutcome {
        // max/min instead of clamp so NaN becomes 0
        let p = self.settings.failure_probability.max(0.0).min(1.0);
        if self.rng.gen_bool(p) {
            UploadOutcome::Rejected
        } else {
            UploadOutcome::Accepted
        }
    }
}
