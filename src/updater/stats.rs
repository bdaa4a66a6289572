use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::dataset::PhaseDistribution;

/// Outcome of a completed phase update run
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStats {
    /// Dataset that was processed
    pub dataset: PathBuf,
    /// Number of records loaded
    pub rows_loaded: usize,
    /// Distinct identifiers found in the donut directory
    pub donut_found: usize,
    /// Distinct identifiers found in the noise directory
    pub noise_found: usize,
    /// Records assigned the donut phase
    pub donut_updated: usize,
    /// Records assigned the noise phase
    pub noise_updated: usize,
    /// Records left with their previous phase
    pub unchanged: usize,
    /// Phase distribution after the update
    pub distribution: PhaseDistribution,
    /// Whether the dataset was written back
    pub written: bool,
}

impl fmt::Display for UpdateStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updated {} of {} particles ({} donut, {} noise)",
            self.donut_updated + self.noise_updated,
            self.rows_loaded,
            self.donut_updated,
            self.noise_updated
        )
    }
}
