//! # particle-phase
//!
//! Command-line tool that labels particles in a CSV dataset according to the
//! directory their image was sorted into.
//!
//! ## Usage
//!
//! ```bash
//! # Default layout: particle_images_filtered/{particle_df.csv,donut/,noise/}
//! particle-phase
//!
//! # Explicit locations, without touching the file
//! particle-phase update --base-dir images --dataset images/particles.csv --dry-run
//!
//! # Inspect the current labels
//! particle-phase summary images/particles.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
