use anyhow::{Context, Result};
use std::path::PathBuf;

use particle_phase::dataset::ParticleDataset;

use super::Config;

/// Display the phase distribution of a dataset
pub fn run(file: PathBuf, config: Option<PathBuf>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let config = Config::load(config.as_deref())?;
    let dataset = ParticleDataset::load(&file, &config.columns)
        .with_context(|| format!("Failed to read dataset {}", file.display()))?;

    println!("Particle Dataset Summary");
    println!("========================");
    println!("File: {}", file.display());
    println!("Columns: {}", dataset.headers().join(", "));
    println!("Particles: {}", dataset.len());
    println!();
    print!("{}", dataset.phase_distribution());

    Ok(())
}
