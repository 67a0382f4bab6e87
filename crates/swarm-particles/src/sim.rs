//! Simulation context and the per-tick pipeline

use crate::boundary::{self, Bounds};
use crate::collision;
use crate::integrator;
use crate::particle::{Particle, ParticleStore};
use crate::spawn::SpawnQueue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swarm_core::{Result, SimConfig, Vec2};
use swarm_runtime::Command;

/// What happened during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based index of the tick that produced this report
    pub tick: u64,
    pub spawned: bool,
    /// Overlapping pairs resolved across all relaxation passes
    pub contacts: usize,
    /// Contacts with coincident centers
    pub degenerate_contacts: usize,
}

/// All mutable simulation state, owned by the caller.
///
/// Generic over the random source so tests can inject a seeded generator.
pub struct Simulation<R = StdRng> {
    config: SimConfig,
    bounds: Bounds,
    store: ParticleStore,
    spawn_queue: SpawnQueue,
    rng: R,
    tick_count: u64,
}

impl Simulation<StdRng> {
    /// Build from a validated config, seeding from `config.seed` when set
    pub fn new(config: SimConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::rng().random()),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Build with a caller-supplied random source
    pub fn with_rng(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;

        let mut spawn_queue = SpawnQueue::new();
        spawn_queue.request(config.initial_particles);

        log::info!(
            "simulation {}x{} radius {} with {} particle(s) queued",
            config.width,
            config.height,
            config.radius,
            config.initial_particles
        );

        Ok(Self {
            bounds: Bounds::new(config.width, config.height),
            config,
            store: ParticleStore::new(),
            spawn_queue,
            rng,
            tick_count: 0,
        })
    }

    /// Queue `count` particles for staged creation
    pub fn request_spawn(&mut self, count: u32) {
        self.spawn_queue.request(count);
    }

    /// Add `delta` to the velocity of every live particle
    pub fn apply_global_impulse(&mut self, delta: Vec2) {
        integrator::apply_impulse(self.store.as_mut_slice(), delta);
    }

    pub fn apply(&mut self, command: &Command) {
        match *command {
            Command::Spawn(count) => self.request_spawn(count),
            Command::Impulse(delta) => self.apply_global_impulse(delta),
        }
    }

    /// Advance one tick.
    ///
    /// `commands` are applied first, then spawn, integrate, walls, and the
    /// collision passes run in that order. No input is observed mid-tick.
    pub fn tick(&mut self, commands: &[Command]) -> TickReport {
        for command in commands {
            self.apply(command);
        }

        self.tick_count += 1;
        let spawned = self
            .spawn_queue
            .step(&mut self.store, &self.config, &mut self.rng);

        let particles = self.store.as_mut_slice();
        integrator::integrate(particles, self.config.gravity());
        boundary::resolve(
            particles,
            self.bounds,
            self.config.radius,
            self.config.boundary_restitution,
        );
        let stats = collision::resolve(
            particles,
            self.config.radius,
            self.config.collision_restitution,
            self.config.pass_count,
        );

        TickReport {
            tick: self.tick_count,
            spawned,
            contacts: stats.contacts,
            degenerate_contacts: stats.degenerate,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        self.store.as_slice()
    }

    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    pub fn pending_spawns(&self) -> usize {
        self.spawn_queue.pending()
    }

    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Total kinetic energy (unit masses)
    pub fn kinetic_energy(&self) -> f64 {
        self.store.iter().map(|p| p.kinetic_energy()).sum()
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, particle: Particle) {
        self.store.push(particle);
    }

    #[cfg(test)]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        self.store.as_mut_slice()
    }
}
