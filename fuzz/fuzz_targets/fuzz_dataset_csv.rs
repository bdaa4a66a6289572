#![no_main]

use libfuzzer_sys::fuzz_target;
use particle_phase::dataset::{ColumnNames, ParticleDataset};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary input must either load or fail with an error, never panic
    let columns = ColumnNames::default();
    if let Ok(mut dataset) = ParticleDataset::from_reader(Cursor::new(data), &columns) {
        dataset.relabel(|id| (id % 2 == 0).then_some(2));
        let mut out = Vec::new();
        let _ = dataset.to_writer(&mut out);
        let _ = dataset.phase_distribution();
    }
});
