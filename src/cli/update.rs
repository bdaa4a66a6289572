use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use particle_phase::report::ConsoleReporter;
use particle_phase::updater::PhaseUpdater;

use super::Config;

/// Assign phases from the classification directories
pub fn run(
    base_dir: Option<PathBuf>,
    dataset: Option<PathBuf>,
    config: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let config = Config::load(config.as_deref())?.into_updater_config(base_dir, dataset, dry_run);

    info!("particle-phase update");
    info!("=====================");
    info!("Dataset:  {}", config.dataset_path().display());
    info!("Donut:    {} -> phase {}", config.donut_dir().display(), config.phases.donut_phase);
    info!("Noise:    {} -> phase {}", config.noise_dir().display(), config.phases.noise_phase);
    if dry_run {
        info!("Dry run: dataset will not be written");
    }

    let dataset_path = config.dataset_path();
    let stats = PhaseUpdater::new(config)
        .run(&mut ConsoleReporter::new())
        .with_context(|| format!("Phase update failed for {}", dataset_path.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")?
        );
    }

    Ok(())
}
