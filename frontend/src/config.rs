//! Application configuration.
//!
//! Centralized configuration for the model upload page.
//! Everything is compile-time: the page has no backend to fetch
//! settings from.

/// Product name shown in the navbar and hero.
pub const APP_NAME: &str = "Neural Nexus";

/// Period of the simulated upload timer (in milliseconds).
pub const TICK_INTERVAL_MS: u32 = 500;

/// Exclusive upper bound of a single progress increment (percent).
pub const MAX_PROGRESS_INCREMENT: f64 = 10.0;

/// Chance that a finished simulated upload is rejected.
pub const FAILURE_PROBABILITY: f64 = 0.1;

/// Progress value at which an upload is complete.
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Dashboard route (lives outside this page).
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Route of this page; "Upload Another Model" links back here.
pub const UPLOAD_PATH: &str = "/upload";

/// Tunables of the upload simulation.
///
/// Defaults come from the constants above; tests build their own to
/// force outcomes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSettings {
    /// Exclusive upper bound of each progress increment.
    pub max_increment: f64,
    /// Probability in [0, 1] that the upload ends in an error.
    pub failure_probability: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            max_increment: MAX_PROGRESS_INCREMENT,
            failure_probability: FAILURE_PROBABILITY,
        }
    }
}
