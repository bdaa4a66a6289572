use super::*;
use crate::dataset::{ColumnNames, ParticleDataset};
use crate::report::{RecordingReporter, SilentReporter};
use std::fs::{self, File};
use tempfile::{tempdir, TempDir};

/// Build `base/` with the given images and a dataset of `(id, phase)` rows
fn layout(donut: Option<Vec<&str>>, noise: Option<Vec<&str>>, rows: &[(i64, &str)]) -> TempDir {
    let base = tempdir().unwrap();
    for (sub, names) in [("donut", donut), ("noise", noise)] {
        if let Some(names) = names {
            let dir = base.path().join(sub);
            fs::create_dir(&dir).unwrap();
            for name in names {
                File::create(dir.join(name)).unwrap();
            }
        }
    }

    let mut csv = String::from("particle_idx_seq,phase,size\n");
    for (id, phase) in rows {
        csv.push_str(&format!("{},{},1.5\n", id, phase));
    }
    fs::write(base.path().join("particle_df.csv"), csv).unwrap();
    base
}

fn phases(base: &TempDir) -> Vec<(i64, Option<i64>)> {
    ParticleDataset::load(base.path().join("particle_df.csv"), &ColumnNames::default())
        .unwrap()
        .records()
        .iter()
        .map(|r| (r.id, r.phase))
        .collect()
}

#[test]
fn test_default_config_paths() {
    let config = UpdaterConfig::default();
    assert_eq!(config.base_dir, PathBuf::from("particle_images_filtered"));
    assert_eq!(
        config.dataset_path(),
        PathBuf::from("particle_images_filtered").join("particle_df.csv")
    );
    assert_eq!(
        config.donut_dir(),
        PathBuf::from("particle_images_filtered").join("donut")
    );
    assert_eq!(
        config.noise_dir(),
        PathBuf::from("particle_images_filtered").join("noise")
    );

    let custom = UpdaterConfig::new("base").with_dataset("elsewhere/df.csv");
    assert_eq!(custom.dataset_path(), PathBuf::from("elsewhere/df.csv"));
}

#[test]
fn test_assigns_donut_and_noise() {
    let base = layout(
        Some(vec!["particle_1.png", "particle_2.png"]),
        Some(vec!["particle_3.png"]),
        &[(1, "0"), (2, "0"), (3, "0"), (4, "0")],
    );

    let stats = PhaseUpdater::new(UpdaterConfig::new(base.path()))
        .run(&mut SilentReporter)
        .unwrap();

    assert_eq!(stats.rows_loaded, 4);
    assert_eq!(stats.donut_found, 2);
    assert_eq!(stats.noise_found, 1);
    assert_eq!(stats.donut_updated, 2);
    assert_eq!(stats.noise_updated, 1);
    assert_eq!(stats.unchanged, 1);
    assert!(stats.written);
    assert_eq!(
        phases(&base),
        vec![(1, Some(2)), (2, Some(2)), (3, Some(3)), (4, Some(0))]
    );
}

#[test]
fn test_donut_wins_over_noise() {
    let base = layout(
        Some(vec!["particle_7.png"]),
        Some(vec!["particle_7.png"]),
        &[(7, "0")],
    );

    let stats = PhaseUpdater::new(UpdaterConfig::new(base.path()))
        .run(&mut SilentReporter)
        .unwrap();

    assert_eq!(stats.donut_updated, 1);
    assert_eq!(stats.noise_updated, 0);
    assert_eq!(phases(&base), vec![(7, Some(2))]);
}

#[test]
fn test_custom_phase_rules() {
    let base = tempdir().unwrap();
    fs::create_dir(base.path().join("rings")).unwrap();
    File::create(base.path().join("rings").join("particle_1.png")).unwrap();
    fs::write(base.path().join("particle_df.csv"), "particle_idx_seq,phase\n1,0\n").unwrap();

    let mut config = UpdaterConfig::new(base.path());
    config.phases.donut_dir = "rings".to_string();
    config.phases.donut_phase = 9;

    let stats = PhaseUpdater::new(config).run(&mut SilentReporter).unwrap();
    assert_eq!(stats.donut_updated, 1);
    assert_eq!(phases(&base), vec![(1, Some(9))]);
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let base = layout(Some(vec!["particle_1.png"]), None, &[(1, "0")]);
    let before = fs::read_to_string(base.path().join("particle_df.csv")).unwrap();

    let config = UpdaterConfig::new(base.path()).with_dry_run(true);
    let mut reporter = RecordingReporter::new();
    let stats = PhaseUpdater::new(config).run(&mut reporter).unwrap();

    assert!(!stats.written);
    assert_eq!(stats.donut_updated, 1);
    assert_eq!(stats.distribution.count(2), 1);
    assert_eq!(
        fs::read_to_string(base.path().join("particle_df.csv")).unwrap(),
        before
    );
    assert!(reporter
        .events
        .iter()
        .any(|e| matches!(e, UpdateEvent::DryRun { .. })));
    assert!(!reporter
        .events
        .iter()
        .any(|e| matches!(e, UpdateEvent::Saving { .. })));
}

#[test]
fn test_event_order() {
    let base = layout(None, Some(vec!["particle_5.png"]), &[(5, "0")]);
    let mut reporter = RecordingReporter::new();

    PhaseUpdater::new(UpdaterConfig::new(base.path()))
        .run(&mut reporter)
        .unwrap();

    let donut_dir = base.path().join("donut");
    let noise_dir = base.path().join("noise");
    let dataset = base.path().join("particle_df.csv");
    let mut distribution = crate::dataset::PhaseDistribution::default();
    distribution.record(Some(3));

    assert_eq!(
        reporter.events,
        vec![
            UpdateEvent::Reading {
                path: dataset.clone()
            },
            UpdateEvent::Loaded { rows: 1 },
            UpdateEvent::Scanning {
                class: Classification::Donut,
                path: donut_dir.clone()
            },
            UpdateEvent::DirectoryMissing { path: donut_dir },
            UpdateEvent::Found {
                class: Classification::Donut,
                count: 0
            },
            UpdateEvent::Scanning {
                class: Classification::Noise,
                path: noise_dir
            },
            UpdateEvent::Found {
                class: Classification::Noise,
                count: 1
            },
            UpdateEvent::Updating,
            UpdateEvent::Updated {
                class: Classification::Donut,
                phase: 2,
                count: 0
            },
            UpdateEvent::Updated {
                class: Classification::Noise,
                phase: 3,
                count: 1
            },
            UpdateEvent::Saving { path: dataset },
            UpdateEvent::Done,
            UpdateEvent::Distribution(distribution),
        ]
    );
}

#[test]
fn test_missing_dataset_is_fatal() {
    let base = tempdir().unwrap();
    fs::create_dir(base.path().join("donut")).unwrap();

    let result = PhaseUpdater::new(UpdaterConfig::new(base.path())).run(&mut SilentReporter);
    assert!(matches!(result, Err(UpdateError::Dataset(_))));
    assert!(!base.path().join("particle_df.csv").exists());
}

#[test]
fn test_unreadable_directory_is_fatal() {
    let base = layout(None, None, &[(1, "0")]);
    // A file where the donut directory should be
    fs::write(base.path().join("donut"), "").unwrap();

    let result = PhaseUpdater::new(UpdaterConfig::new(base.path())).run(&mut SilentReporter);
    assert!(matches!(result, Err(UpdateError::Scan(_))));
    assert_eq!(phases(&base), vec![(1, Some(0))]);
}
