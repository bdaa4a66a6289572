//! # particle-phase - Directory-Driven Particle Phase Labelling
//!
//! `particle_phase` reconciles a particle table with the result of a manual
//! image classification. Particle images are sorted by hand into a `donut`
//! and a `noise` directory; this crate reads which particles ended up where
//! and writes the matching phase label back into the table.
//!
//! ## Directory Layout
//!
//! ```text
//! particle_images_filtered/
//! ├── particle_df.csv           # particle_idx_seq, phase, ...
//! ├── donut/
//! │   ├── particle_1.png        # -> phase 2
//! │   └── particle_2.png
//! └── noise/
//!     └── particle_3.png        # -> phase 3
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use particle_phase::update_particle_phases;
//!
//! let stats = update_particle_phases(
//!     "particle_images_filtered/particle_df.csv",
//!     "particle_images_filtered",
//! )?;
//! println!("{}", stats);
//! # Ok::<(), particle_phase::updater::UpdateError>(())
//! ```
//!
//! ## Rules
//!
//! - A record whose identifier has an image in `donut/` gets phase 2.
//! - Otherwise, a record whose identifier has an image in `noise/` gets phase 3.
//! - Every other record keeps its phase.
//! - A missing classification directory is treated as empty, with a warning.
//!
//! ## Architecture
//!
//! - [`filename`]: `particle_<id>.png` name parsing
//! - [`scanner`]: identifier sets from directory listings
//! - [`dataset`]: CSV particle table with column-preserving load and save
//! - [`updater`]: the load, scan, relabel, save pipeline
//! - [`report`]: progress events and console output

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod dataset;
pub mod filename;
pub mod report;
pub mod scanner;
pub mod updater;

pub use updater::update_particle_phases;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::dataset::{ColumnNames, DatasetError, ParticleDataset, PhaseDistribution};
    pub use crate::filename::{parse_particle_id, ParticleId};
    pub use crate::report::{ConsoleReporter, RecordingReporter, Reporter, UpdateEvent};
    pub use crate::scanner::{scan_directory, DirectoryScan, ParticleIdSet, ScanError};
    pub use crate::updater::{
        update_particle_phases, Classification, PhaseRules, PhaseUpdater, UpdateError,
        UpdateStats, UpdaterConfig,
    };
}
