//! # Particle Dataset
//!
//! In-memory representation of the particle table, a comma-separated file
//! with one row per particle:
//!
//! ```text
//! particle_idx_seq,phase,area,...
//! 1,0,12.5,...
//! 2,0,8.1,...
//! ```
//!
//! Only the identifier and phase columns are interpreted. Every other cell is
//! carried through as text, so a load/save cycle preserves column order, row
//! order, and the content of columns this crate never touches. No index
//! column is added on save.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use particle_phase::dataset::{ColumnNames, ParticleDataset};
//!
//! let mut dataset = ParticleDataset::load("particle_df.csv", &ColumnNames::default())?;
//! dataset.relabel(|id| if id % 2 == 0 { Some(2) } else { None });
//! dataset.save("particle_df.csv")?;
//! println!("{}", dataset.phase_distribution());
//! # Ok::<(), particle_phase::dataset::DatasetError>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::filename::ParticleId;

mod error;
mod stats;


pub use error::DatasetError;
pub use stats::PhaseDistribution;

/// Default name of the particle identifier column
pub const DEFAULT_ID_COLUMN: &str = "particle_idx_seq";

/// Default name of the phase label column
pub const DEFAULT_PHASE_COLUMN: &str = "phase";

/// Names of the columns the dataset interprets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnNames {
    /// Integer particle identifier column
    pub id: String,
    /// Integer phase label column
    pub phase: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID_COLUMN.to_string(),
            phase: DEFAULT_PHASE_COLUMN.to_string(),
        }
    }
}

/// One row of the particle table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticleRecord {
    /// Particle identifier parsed from the identifier column
    pub id: ParticleId,
    /// Current phase label, `None` for an empty cell
    pub phase: Option<i64>,
    fields: Vec<String>,
}

impl ParticleRecord {
    /// Raw cell contents in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// The full ordered particle table
#[derive(Debug, Clone)]
pub struct ParticleDataset {
    headers: Vec<String>,
    records: Vec<ParticleRecord>,
    phase_column: usize,
}

impl ParticleDataset {
    /// Load a dataset from a CSV file
    pub fn load<P: AsRef<Path>>(path: P, columns: &ColumnNames) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|e| DatasetError::io(path, e))?;
        let dataset = Self::from_reader(file, columns)?;
        debug!("Loaded {} records from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Parse a dataset from any CSV reader
    pub fn from_reader<R: std::io::Read>(
        reader: R,
        columns: &ColumnNames,
    ) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
        };
        let id_column = find(columns.id.as_str())?;
        let phase_column = find(columns.phase.as_str())?;

        let mut records = Vec::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            // `flexible` is off, so every record has a cell per header
            let id_cell = &record[id_column];
            let id = parse_integer_cell(id_cell).ok_or_else(|| DatasetError::InvalidIdentifier {
                row,
                value: id_cell.to_string(),
            })?;

            let phase_cell = &record[phase_column];
            let phase = if phase_cell.is_empty() {
                None
            } else {
                Some(
                    parse_integer_cell(phase_cell).ok_or_else(|| DatasetError::InvalidPhase {
                        row,
                        value: phase_cell.to_string(),
                    })?,
                )
            };

            records.push(ParticleRecord {
                id,
                phase,
                fields: record.iter().map(str::to_string).collect(),
            });
        }

        Ok(Self {
            headers,
            records,
            phase_column,
        })
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in file order
    pub fn records(&self) -> &[ParticleRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Apply `rule` to every record in order.
    ///
    /// When `rule` returns `Some(phase)` the record's phase is overwritten;
    /// `None` leaves the record, including its raw phase cell, untouched.
    /// Returns the number of records that were assigned a phase.
    pub fn relabel<F>(&mut self, mut rule: F) -> usize
    where
        F: FnMut(ParticleId) -> Option<i64>,
    {
        let mut assigned = 0;
        for record in &mut self.records {
            if let Some(phase) = rule(record.id) {
                record.phase = Some(phase);
                record.fields[self.phase_column] = phase.to_string();
                assigned += 1;
            }
        }
        assigned
    }

    /// Count the records holding each phase value
    pub fn phase_distribution(&self) -> PhaseDistribution {
        let mut distribution = PhaseDistribution::default();
        for record in &self.records {
            distribution.record(record.phase);
        }
        distribution
    }

    /// Serialize the dataset as CSV
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), DatasetError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv_writer.write_record(&self.headers)?;
        for record in &self.records {
            csv_writer.write_record(&record.fields)?;
        }
        csv_writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Write the dataset to `path`, replacing any existing file.
    ///
    /// The content is first written to a temporary file next to the target
    /// and then renamed over it, so an interrupted save leaves the previous
    /// file intact. When `path` is a symlink, the file it points to is
    /// replaced and the link is kept.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DatasetError> {
        let requested = path.as_ref();
        let target = if requested.exists() {
            fs::canonicalize(requested).map_err(|e| DatasetError::io(requested, e))?
        } else {
            requested.to_path_buf()
        };
        let path = target.as_path();
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| DatasetError::io(parent, e))?;
        self.to_writer(tmp.as_file_mut())?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| DatasetError::io(tmp.path(), e))?;

        // Keep the permissions of the file being replaced
        if let Ok(meta) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| DatasetError::io(tmp.path(), e))?;
        }

        tmp.persist(path)
            .map_err(|e| DatasetError::io(path, e.error))?;
        debug!("Saved {} records to {}", self.len(), requested.display());
        Ok(())
    }
}

/// Parse an integer cell, also accepting integral floats such as `2.0`.
///
/// Tables exported from float-typed columns spell integers that way.
fn parse_integer_cell(cell: &str) -> Option<i64> {
    if let Ok(value) = cell.parse::<i64>() {
        return Some(value);
    }

    let value = cell.parse::<f64>().ok()?;
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
