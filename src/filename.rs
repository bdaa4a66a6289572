//! Particle image filename parsing.
//!
//! Classified particle images are named `particle_<id>.png`. The identifier
//! embedded in the name is the join key against the `particle_idx_seq`
//! column of the dataset.

use std::ffi::OsStr;

/// Integer identifier of a particle record.
pub type ParticleId = i64;

/// Prefix every particle image filename starts with.
pub const PARTICLE_PREFIX: &str = "particle_";

/// Recognized image extension, including the leading dot.
pub const IMAGE_EXTENSION: &str = ".png";

/// Returns true if `name` carries the recognized image extension.
pub fn is_image_file(name: &str) -> bool {
    name.ends_with(IMAGE_EXTENSION)
}

/// Extract the particle identifier from a filename like `particle_123.png`.
///
/// Returns `None` when the prefix or suffix is missing, or when the remainder
/// is not a base-10 integer that fits in a [`ParticleId`].
///
/// ```
/// use particle_phase::filename::parse_particle_id;
///
/// assert_eq!(parse_particle_id("particle_42.png"), Some(42));
/// assert_eq!(parse_particle_id("particle_abc.png"), None);
/// assert_eq!(parse_particle_id("notes.txt"), None);
/// ```
pub fn parse_particle_id(name: &str) -> Option<ParticleId> {
    let digits = name
        .strip_prefix(PARTICLE_PREFIX)?
        .strip_suffix(IMAGE_EXTENSION)?;

    // `i64::from_str` tolerates a single leading sign, nothing else
    digits.parse().ok()
}

/// Like [`parse_particle_id`], for raw directory entry names.
///
/// Names that are not valid UTF-8 never match.
pub fn parse_particle_id_os(name: &OsStr) -> Option<ParticleId> {
    name.to_str().and_then(parse_particle_id)
}
