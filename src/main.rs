//! Headless particle fountain
//!
//! Sprays particles over a couple of spheres and a box, runs a fixed number of
//! frames and logs what happened. Set `RUST_LOG=debug` for per-frame stats.
//!
//! Usage: `particle-fountain [frames]`

use glam::Vec3;
use particle_physics::{FrameParams, Particle};
use particle_simulation::{ColliderRegistry, FrameStats, ParticleSimulation, SimulationConfig};
use rand::Rng;
use std::time::Instant;

const PARTICLE_COUNT: usize = 20_000;
const DEFAULT_FRAMES: u64 = 600;
const NOZZLE: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const NOZZLE_SPEED: f32 = 6.0;
const CONE_SPREAD: f32 = 0.35;
const LIFETIME_RANGE: std::ops::Range<f32> = 2.0..4.0;
/// Spawns are spread over this many seconds so the fountain flows steadily
const SPAWN_WINDOW: f32 = 3.0;
const LOG_EVERY: u64 = 60;

/// Initialize a fountain: upward cone velocities, staggered spawn delays
fn initialize_particles() -> Vec<Particle> {
    let mut rng = rand::rng();
    let mut particles = Vec::with_capacity(PARTICLE_COUNT);

    for _ in 0..PARTICLE_COUNT {
        let theta = rng.random::<f32>() * std::f32::consts::TAU;
        let tilt = rng.random::<f32>() * CONE_SPREAD;
        let direction = Vec3::new(tilt.sin() * theta.cos(), tilt.cos(), tilt.sin() * theta.sin());
        let speed = NOZZLE_SPEED * rng.random_range(0.8..1.2);

        let lifetime = rng.random_range(LIFETIME_RANGE);
        let delay = rng.random::<f32>() * SPAWN_WINDOW;

        particles.push(Particle::delayed(NOZZLE, direction * speed, lifetime, delay));
    }

    log::info!("✓ Initialized {} particles", PARTICLE_COUNT);
    log::info!(
        "  Particle struct size: {} bytes",
        std::mem::size_of::<Particle>()
    );

    particles
}

fn build_colliders() -> Result<ColliderRegistry, particle_simulation::SimulationError> {
    let mut colliders = ColliderRegistry::new();
    colliders.add_sphere(Vec3::new(0.0, 2.5, 0.0), 0.6)?;
    colliders.add_sphere(Vec3::new(1.5, 0.8, 0.5), 0.8)?;
    colliders.add_box(Vec3::new(-1.5, 0.5, -0.5), Vec3::new(0.75, 0.5, 0.75))?;
    Ok(colliders)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let colliders = match build_colliders() {
        Ok(colliders) => colliders,
        Err(err) => {
            log::error!("Failed to build colliders: {}", err);
            std::process::exit(1);
        }
    };

    let params = FrameParams::default()
        .with_percentage_at_death(0.2)
        .with_restitution(0.6)
        .with_randomized_restitution(true);

    let mut simulation = match ParticleSimulation::new(
        initialize_particles(),
        colliders,
        params,
        SimulationConfig::default(),
    ) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("Failed to create simulation: {}", err);
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let mut totals = FrameStats::default();

    for _ in 0..frames {
        let stats = match simulation.step() {
            Ok(stats) => stats,
            Err(err) => {
                log::error!("Frame {} failed: {}", simulation.frame(), err);
                std::process::exit(1);
            }
        };
        totals = totals.merge(stats);

        if simulation.frame() % LOG_EVERY == 0 {
            let highest = simulation
                .particles()
                .iter()
                .map(|p| p.position[1])
                .fold(0.0_f32, f32::max);
            log::info!(
                "frame {:>5}: alive {:>6}  unborn {:>6}  respawned {:>4}  hits s/b/g {}/{}/{}  top {:.2}",
                simulation.frame(),
                stats.alive,
                stats.unborn,
                stats.respawned,
                stats.sphere_hits,
                stats.box_hits,
                stats.ground_hits,
                highest
            );
        }
    }

    let elapsed = start.elapsed();
    log::info!(
        "Simulated {} frames in {:.2?} ({:.3} ms/frame)",
        frames,
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / frames.max(1) as f64
    );
    log::info!(
        "Totals: {} respawns, {} sphere hits, {} box hits, {} ground hits",
        totals.respawned,
        totals.sphere_hits,
        totals.box_hits,
        totals.ground_hits
    );
}
