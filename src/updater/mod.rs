//! # Phase Updater
//!
//! Reconciles the dataset's phase column with the classification
//! directories:
//!
//! 1. Load the dataset.
//! 2. Scan the donut and noise directories for `particle_<id>.png` files.
//! 3. In one pass over the records, assign the donut phase to every
//!    identifier found in the donut directory, otherwise the noise phase to
//!    every identifier found in the noise directory. Everything else keeps
//!    its phase.
//! 4. Write the dataset back to where it was loaded from.
//!
//! An identifier present in both directories is labelled donut.
//!
//! ```rust,no_run
//! use particle_phase::report::ConsoleReporter;
//! use particle_phase::updater::{PhaseUpdater, UpdaterConfig};
//!
//! let config = UpdaterConfig::new("particle_images_filtered");
//! let stats = PhaseUpdater::new(config).run(&mut ConsoleReporter::new())?;
//! println!("{}", stats);
//! # Ok::<(), particle_phase::updater::UpdateError>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::dataset::{DatasetError, ParticleDataset};
use crate::report::{ConsoleReporter, Reporter, UpdateEvent};
use crate::scanner::{scan_directory, DirectoryScan, ScanError};

mod config;
mod stats;

#[cfg(test)]
mod tests;

pub use config::{
    PhaseRules, UpdaterConfig, DEFAULT_BASE_DIR, DEFAULT_DATASET_FILE, DEFAULT_DONUT_DIR,
    DEFAULT_DONUT_PHASE, DEFAULT_NOISE_DIR, DEFAULT_NOISE_PHASE,
};
pub use stats::UpdateStats;

/// Errors that abort a phase update run
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// The dataset could not be loaded or saved
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// A classification directory could not be listed
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Classification a directory stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Donut-shaped particles
    Donut,
    /// Noise
    Noise,
}

impl Classification {
    /// Lowercase name, as used for the default subdirectory
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Donut => "donut",
            Classification::Noise => "noise",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the scan-and-relabel pipeline for one dataset
#[derive(Debug, Clone)]
pub struct PhaseUpdater {
    config: UpdaterConfig,
}

impl PhaseUpdater {
    /// Create an updater with the given settings
    pub fn new(config: UpdaterConfig) -> Self {
        Self { config }
    }

    /// Execute the update, reporting every step to `reporter`.
    ///
    /// The dataset is only written after the whole pass has completed in
    /// memory, so a failure before that point leaves the file untouched.
    pub fn run(&self, reporter: &mut dyn Reporter) -> Result<UpdateStats, UpdateError> {
        let dataset_path = self.config.dataset_path();
        let rules = &self.config.phases;

        reporter.report(&UpdateEvent::Reading {
            path: dataset_path.clone(),
        });
        let mut dataset = ParticleDataset::load(&dataset_path, &self.config.columns)?;
        reporter.report(&UpdateEvent::Loaded {
            rows: dataset.len(),
        });

        let donut = self.scan(Classification::Donut, self.config.donut_dir(), reporter)?;
        let noise = self.scan(Classification::Noise, self.config.noise_dir(), reporter)?;

        reporter.report(&UpdateEvent::Updating);
        let mut donut_updated = 0;
        let mut noise_updated = 0;
        // Donut membership is checked first and wins for ids in both sets
        let assigned = dataset.relabel(|id| {
            if donut.contains(id) {
                donut_updated += 1;
                Some(rules.donut_phase)
            } else if noise.contains(id) {
                noise_updated += 1;
                Some(rules.noise_phase)
            } else {
                None
            }
        });
        debug_assert_eq!(assigned, donut_updated + noise_updated);

        reporter.report(&UpdateEvent::Updated {
            class: Classification::Donut,
            phase: rules.donut_phase,
            count: donut_updated,
        });
        reporter.report(&UpdateEvent::Updated {
            class: Classification::Noise,
            phase: rules.noise_phase,
            count: noise_updated,
        });

        let written = self.persist(&dataset, &dataset_path, reporter)?;
        reporter.report(&UpdateEvent::Done);

        let distribution = dataset.phase_distribution();
        reporter.report(&UpdateEvent::Distribution(distribution.clone()));

        let stats = UpdateStats {
            dataset: dataset_path,
            rows_loaded: dataset.len(),
            donut_found: donut.len(),
            noise_found: noise.len(),
            donut_updated,
            noise_updated,
            unchanged: dataset.len() - assigned,
            distribution,
            written,
        };
        info!("{}", stats);
        Ok(stats)
    }

    fn scan(
        &self,
        class: Classification,
        dir: PathBuf,
        reporter: &mut dyn Reporter,
    ) -> Result<DirectoryScan, UpdateError> {
        reporter.report(&UpdateEvent::Scanning {
            class,
            path: dir.clone(),
        });
        let scan = scan_directory(&dir)?;
        if scan.missing {
            reporter.report(&UpdateEvent::DirectoryMissing { path: dir });
        }
        reporter.report(&UpdateEvent::Found {
            class,
            count: scan.len(),
        });
        debug!("{} directory: {} unparseable image names", class, scan.skipped);
        Ok(scan)
    }

    fn persist(
        &self,
        dataset: &ParticleDataset,
        path: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<bool, UpdateError> {
        if self.config.dry_run {
            reporter.report(&UpdateEvent::DryRun {
                path: path.to_path_buf(),
            });
            return Ok(false);
        }

        reporter.report(&UpdateEvent::Saving {
            path: path.to_path_buf(),
        });
        dataset.save(path)?;
        Ok(true)
    }
}

/// Update `csv_path` from the `donut` and `noise` directories under
/// `base_dir`, printing progress to standard output.
pub fn update_particle_phases<P, Q>(csv_path: P, base_dir: Q) -> Result<UpdateStats, UpdateError>
where
    P: Into<PathBuf>,
    Q: Into<PathBuf>,
{
    let config = UpdaterConfig::new(base_dir).with_dataset(csv_path);
    PhaseUpdater::new(config).run(&mut ConsoleReporter::new())
}
