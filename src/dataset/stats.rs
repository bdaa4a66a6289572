use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Row counts per phase value, ordered by ascending phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseDistribution {
    /// Number of rows holding each phase value
    pub counts: BTreeMap<i64, usize>,
    /// Number of rows with an empty phase cell
    pub unlabelled: usize,
}

impl PhaseDistribution {
    /// Count one row holding `phase`
    pub fn record(&mut self, phase: Option<i64>) {
        match phase {
            Some(p) => *self.counts.entry(p).or_insert(0) += 1,
            None => self.unlabelled += 1,
        }
    }

    /// Number of rows holding `phase`
    pub fn count(&self, phase: i64) -> usize {
        self.counts.get(&phase).copied().unwrap_or(0)
    }

    /// Total number of rows counted, unlabelled included
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.unlabelled
    }
}

impl fmt::Display for PhaseDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Phase Distribution ---")?;
        for (phase, count) in &self.counts {
            writeln!(f, "Phase {}: {} particles", phase, count)?;
        }
        if self.unlabelled > 0 {
            writeln!(f, "Unlabelled: {} particles", self.unlabelled)?;
        }
        Ok(())
    }
}
