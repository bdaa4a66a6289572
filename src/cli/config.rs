//! TOML configuration file support.
//!
//! Instead of passing flags on every run, the layout can be described once:
//!
//! ```toml
//! # particle-phase.toml
//! [paths]
//! base_dir = "particle_images_filtered"
//! dataset = "particle_images_filtered/particle_df.csv"
//!
//! [columns]
//! id = "particle_idx_seq"
//! phase = "phase"
//!
//! [phases]
//! donut_dir = "donut"
//! donut_phase = 2
//! noise_dir = "noise"
//! noise_phase = 3
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use particle_phase::dataset::ColumnNames;
use particle_phase::updater::{PhaseRules, UpdaterConfig};

/// Root configuration structure for particle-phase.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Dataset column names.
    #[serde(default)]
    pub columns: ColumnNames,

    /// Classification subdirectories and the phases they assign.
    #[serde(default)]
    pub phases: PhaseRules,
}

/// Input locations.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding the classification subdirectories.
    pub base_dir: Option<PathBuf>,

    /// Dataset path, defaults to `particle_df.csv` inside `base_dir`.
    pub dataset: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load `path` if given, otherwise use built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Build updater settings; explicit flag values win over file values.
    pub fn into_updater_config(
        self,
        base_dir: Option<PathBuf>,
        dataset: Option<PathBuf>,
        dry_run: bool,
    ) -> UpdaterConfig {
        let mut config = match base_dir.or(self.paths.base_dir) {
            Some(base_dir) => UpdaterConfig::new(base_dir),
            None => UpdaterConfig::default(),
        };
        config.dataset = dataset.or(self.paths.dataset);
        config.columns = self.columns;
        config.phases = self.phases;
        config.dry_run = dry_run;
        config
    }
}
