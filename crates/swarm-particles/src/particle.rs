//! Particle types: simulation state, the store that owns it, and GPU instance data

use bytemuck::{Pod, Zeroable};
use swarm_core::{Color, Vec2};

/// One point mass. Radius is shared by the whole simulation, not stored here.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// World units per tick
    pub velocity: Vec2,
    color: Color,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, color: Color) -> Self {
        Self {
            position,
            velocity,
            color,
        }
    }

    /// Fixed at creation
    pub fn color(&self) -> Color {
        self.color
    }

    /// 1/2 |v|^2 (all particles have unit mass)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.length_squared()
    }
}

/// Append-only owner of the live particles, in creation order.
///
/// Only the spawn queue appends. Physics phases mutate position and velocity
/// in place through `as_mut_slice`; nothing is ever removed.
#[derive(Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

/// GPU instance data for one particle circle.
/// 32 bytes: center + radius packed into a vec4, then linear-ish rgba.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    /// xy = center, z = radius, w = unused
    pub center_radius: [f32; 4],
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn from_particle(p: &Particle, radius: f64) -> Self {
        Self {
            center_radius: [p.position.x as f32, p.position.y as f32, radius as f32, 0.0],
            color: p.color.to_rgba_f32(),
        }
    }
}

/// Refill `out` with one instance per particle, in store order
pub fn pack_instances(particles: &[Particle], radius: f64, out: &mut Vec<ParticleInstance>) {
    out.clear();
    out.extend(particles.iter().map(|p| ParticleInstance::from_particle(p, radius)));
}
