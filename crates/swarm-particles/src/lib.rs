//! Swarm Particles - 2D particle dynamics core
//!
//! Advances a swarm of equal-radius point masses one tick at a time:
//! - Staged spawning, one particle per tick from a pending counter
//! - Semi-implicit Euler integration under a constant gravity vector
//! - Wall clamping with lossy reflection
//! - Pairwise overlap resolution over several relaxation passes
//! - Instance packing for an external renderer

pub mod boundary;
pub mod collision;
pub mod integrator;
pub mod particle;
pub mod sim;
pub mod spawn;

use swarm_core::{Result, SimConfig};
use swarm_runtime::{CommandQueue, InputFrame, RuntimeSystem, SpawnPolicy};

pub use boundary::Bounds;
pub use collision::CollisionStats;
pub use particle::{pack_instances, Particle, ParticleInstance, ParticleStore};
pub use sim::{Simulation, TickReport};
pub use spawn::SpawnQueue;

/// The particle system, driven as a RuntimeSystem by a host loop
pub struct ParticleSystem {
    pub sim: Simulation,
    pub policy: SpawnPolicy,
    queue: CommandQueue,
    instances: Vec<ParticleInstance>,
    last_report: TickReport,
}

impl ParticleSystem {
    pub fn new(config: SimConfig) -> Result<Self> {
        Ok(Self::from_simulation(Simulation::new(config)?))
    }

    pub fn from_simulation(sim: Simulation) -> Self {
        Self {
            sim,
            policy: SpawnPolicy::default(),
            queue: CommandQueue::new(),
            instances: Vec::new(),
            last_report: TickReport::default(),
        }
    }

    /// Queue a command for the next frame
    pub fn queue(&mut self) -> &mut CommandQueue {
        &mut self.queue
    }

    /// Instances packed after the most recent update, in store order
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }

    pub fn last_report(&self) -> TickReport {
        self.last_report
    }
}

impl RuntimeSystem for ParticleSystem {
    fn initialize(&mut self) -> Result<()> {
        let pending = self.sim.pending_spawns();
        if pending > 0 {
            log::info!("[particles] {pending} particle(s) queued for spawning");
        }
        Ok(())
    }

    fn update(&mut self, frame: &InputFrame) -> Result<()> {
        let pending = self.sim.pending_spawns() + self.queue.queued_spawns() as usize;
        let commands = self
            .policy
            .commands_for(frame, self.sim.particle_count(), pending);
        self.queue.extend(commands);

        let commands = self.queue.drain();
        self.last_report = self.sim.tick(&commands);
        pack_instances(self.sim.particles(), self.sim.radius(), &mut self.instances);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!(
            "[particles] shut down after {} tick(s) with {} particle(s)",
            self.sim.tick_count(),
            self.sim.particle_count()
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "particles"
    }
}
