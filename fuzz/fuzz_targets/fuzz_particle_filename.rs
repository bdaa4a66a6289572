#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Filename parsing must never panic, whatever the directory holds
    if let Ok(name) = std::str::from_utf8(data) {
        if particle_phase::filename::parse_particle_id(name).is_some() {
            assert!(name.starts_with("particle_") && name.ends_with(".png"));
        }
    }
});
