//! Benchmarks for one full particle pass.
//!
//! Run with: `cargo bench -p particle-simulation`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use particle_physics::{update_particle, ColliderSet, FrameParams, Particle};
use particle_simulation::{ColliderRegistry, ParticleSimulation, SimulationConfig};

fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.618;
            let velocity = Vec3::new(t.cos() * 1.5, 4.0, t.sin() * 1.5);
            Particle::delayed(Vec3::new(0.0, 0.5, 0.0), velocity, 2.0, (i % 120) as f32 / 60.0)
        })
        .collect()
}

fn colliders() -> ColliderRegistry {
    let mut registry = ColliderRegistry::new();
    for i in 0..4 {
        let x = i as f32 - 1.5;
        registry.add_sphere(Vec3::new(x, 1.0, 0.0), 0.3).unwrap();
        registry.add_box(Vec3::new(x, 0.25, 1.5), Vec3::splat(0.25)).unwrap();
    }
    registry
}

fn bench_update_particle(c: &mut Criterion) {
    let registry = colliders();
    let params = FrameParams::default();

    c.bench_function("update_particle", |b| {
        let set: ColliderSet<'_> = registry.as_set();
        let mut particle = particles(1)[0];
        b.iter(|| black_box(update_particle(0, &mut particle, &set, &params)))
    });
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [10_000usize, 100_000] {
        for batch_size in [64usize, 1024] {
            let mut sim = ParticleSimulation::new(
                particles(count),
                colliders(),
                FrameParams::default(),
                SimulationConfig::default().with_batch_size(batch_size),
            )
            .unwrap();

            group.bench_with_input(
                BenchmarkId::new(format!("batch_{}", batch_size), count),
                &count,
                |b, _| b.iter(|| black_box(sim.step().unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_update_particle, bench_step);
criterion_main!(benches);
