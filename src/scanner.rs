//! Directory scanning for classified particle images.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::filename::{is_image_file, parse_particle_id_os, ParticleId};

/// Set of particle identifiers found in one classification directory.
pub type ParticleIdSet = HashSet<ParticleId>;

/// Errors that can occur while scanning a directory
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The directory exists but could not be listed
    #[error("Failed to read directory {}: {source}", .path.display())]
    Io {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Result of scanning a single directory
#[derive(Debug, Clone, Default)]
pub struct DirectoryScan {
    /// Directory that was scanned
    pub path: PathBuf,
    /// Distinct identifiers parsed from `.png` entries
    pub ids: ParticleIdSet,
    /// True if the directory did not exist
    pub missing: bool,
    /// Number of `.png` entries whose name did not yield an identifier
    pub skipped: usize,
}

impl DirectoryScan {
    /// Number of distinct identifiers found
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no identifiers were found
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check whether `id` was found in this directory
    pub fn contains(&self, id: ParticleId) -> bool {
        self.ids.contains(&id)
    }
}

/// Collect the particle identifiers of all `particle_<id>.png` entries in `path`.
///
/// The listing is not recursive. A missing directory is not an error: a
/// warning is logged and an empty scan with `missing` set is returned.
pub fn scan_directory<P: AsRef<Path>>(path: P) -> Result<DirectoryScan, ScanError> {
    let path = path.as_ref();
    let io_err = |source: io::Error| ScanError::Io {
        path: path.to_path_buf(),
        source,
    };

    if !path.exists() {
        warn!("Directory {} does not exist", path.display());
        return Ok(DirectoryScan {
            path: path.to_path_buf(),
            missing: true,
            ..Default::default()
        });
    }

    let mut scan = DirectoryScan {
        path: path.to_path_buf(),
        ..Default::default()
    };

    for entry in fs::read_dir(path).map_err(io_err)? {
        let name = entry.map_err(io_err)?.file_name();

        let is_png = name.to_str().map(is_image_file).unwrap_or(false);
        if !is_png {
            continue;
        }

        match parse_particle_id_os(&name) {
            Some(id) => {
                scan.ids.insert(id);
            }
            None => scan.skipped += 1,
        }
    }

    debug!(
        "Scanned {}: {} identifiers, {} unparseable image names",
        path.display(),
        scan.ids.len(),
        scan.skipped
    );

    Ok(scan)
}
