use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use particle_phase::dataset::{ColumnNames, ParticleDataset};
use particle_phase::report::SilentReporter;
use particle_phase::scanner::scan_directory;
use particle_phase::updater::{PhaseUpdater, UpdaterConfig};
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

/// Create a base directory with `num_particles` rows, a third of them
/// classified as donut and a third as noise
fn create_layout(base: &Path, num_particles: usize) {
    let donut = base.join("donut");
    let noise = base.join("noise");
    fs::create_dir_all(&donut).unwrap();
    fs::create_dir_all(&noise).unwrap();

    let mut csv = String::from("particle_idx_seq,phase,area,perimeter\n");
    for i in 0..num_particles {
        csv.push_str(&format!("{},0,{}.25,{}.5\n", i, i % 97, i % 13));
        match i % 3 {
            0 => {
                File::create(donut.join(format!("particle_{}.png", i))).unwrap();
            }
            1 => {
                File::create(noise.join(format!("particle_{}.png", i))).unwrap();
            }
            _ => {}
        }
    }
    fs::write(base.join("particle_df.csv"), csv).unwrap();
}

/// Benchmark a full dry run: load, scan both directories, relabel
fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("phase_update");

    for num_particles in [1_000, 10_000] {
        group.throughput(Throughput::Elements(num_particles as u64));

        let temp_dir = TempDir::new().unwrap();
        create_layout(temp_dir.path(), num_particles);
        let updater = PhaseUpdater::new(UpdaterConfig::new(temp_dir.path()).with_dry_run(true));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}particles", num_particles)),
            &updater,
            |b, updater| b.iter(|| black_box(updater.run(&mut SilentReporter).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark directory scanning alone
fn bench_scan(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_layout(temp_dir.path(), 10_000);
    let donut = temp_dir.path().join("donut");

    c.bench_function("scan_directory", |b| {
        b.iter(|| black_box(scan_directory(&donut).unwrap()))
    });
}

/// Benchmark the in-memory relabel pass without I/O
fn bench_relabel(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_layout(temp_dir.path(), 10_000);
    let dataset = ParticleDataset::load(
        temp_dir.path().join("particle_df.csv"),
        &ColumnNames::default(),
    )
    .unwrap();

    c.bench_function("relabel_10000", |b| {
        b.iter(|| {
            let mut dataset = dataset.clone();
            black_box(dataset.relabel(|id| (id % 3 == 0).then_some(2)))
        })
    });
}

criterion_group!(benches, bench_update, bench_scan, bench_relabel);
criterion_main!(benches);
