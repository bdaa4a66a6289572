use std::path::PathBuf;

use serde::Deserialize;

use crate::dataset::ColumnNames;

/// Default base directory holding the classification subdirectories
pub const DEFAULT_BASE_DIR: &str = "particle_images_filtered";

/// Default dataset filename, resolved inside the base directory
pub const DEFAULT_DATASET_FILE: &str = "particle_df.csv";

/// Default name of the donut subdirectory
pub const DEFAULT_DONUT_DIR: &str = "donut";

/// Default name of the noise subdirectory
pub const DEFAULT_NOISE_DIR: &str = "noise";

/// Phase assigned to particles found in the donut directory
pub const DEFAULT_DONUT_PHASE: i64 = 2;

/// Phase assigned to particles found in the noise directory
pub const DEFAULT_NOISE_PHASE: i64 = 3;

/// Settings for a phase update run.
///
/// Every field has a default matching the standard directory layout:
///
/// ```text
/// particle_images_filtered/
/// ├── particle_df.csv
/// ├── donut/particle_<id>.png   -> phase 2
/// └── noise/particle_<id>.png   -> phase 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Directory containing the classification subdirectories
    pub base_dir: PathBuf,

    /// Dataset path; `None` resolves to `<base_dir>/particle_df.csv`
    pub dataset: Option<PathBuf>,

    /// Subdirectory names and the phases they assign
    pub phases: PhaseRules,

    /// Column names interpreted in the dataset
    pub columns: ColumnNames,

    /// Compute and report the update without writing the dataset
    pub dry_run: bool,
}

/// Subdirectory names and phase values for both classifications
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseRules {
    /// Donut subdirectory name, relative to the base directory
    pub donut_dir: String,
    /// Phase written for donut particles
    pub donut_phase: i64,
    /// Noise subdirectory name, relative to the base directory
    pub noise_dir: String,
    /// Phase written for noise particles
    pub noise_phase: i64,
}

impl Default for PhaseRules {
    fn default() -> Self {
        Self {
            donut_dir: DEFAULT_DONUT_DIR.to_string(),
            donut_phase: DEFAULT_DONUT_PHASE,
            noise_dir: DEFAULT_NOISE_DIR.to_string(),
            noise_phase: DEFAULT_NOISE_PHASE,
        }
    }
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR)
    }
}

impl UpdaterConfig {
    /// Default settings rooted at `base_dir`
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
            dataset: None,
            phases: PhaseRules::default(),
            columns: ColumnNames::default(),
            dry_run: false,
        }
    }

    /// Use an explicit dataset path instead of the one inside `base_dir`
    pub fn with_dataset<P: Into<PathBuf>>(mut self, dataset: P) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Resolved dataset path
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset
            .clone()
            .unwrap_or_else(|| self.base_dir.join(DEFAULT_DATASET_FILE))
    }

    /// Resolved donut directory
    pub fn donut_dir(&self) -> PathBuf {
        self.base_dir.join(&self.phases.donut_dir)
    }

    /// Resolved noise directory
    pub fn noise_dir(&self) -> PathBuf {
        self.base_dir.join(&self.phases.noise_dir)
    }
}
