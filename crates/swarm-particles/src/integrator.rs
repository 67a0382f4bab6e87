//! Semi-implicit Euler integration with a fixed step of one tick

use crate::particle::Particle;
use swarm_core::Vec2;

/// Apply gravity to velocity, then velocity to position, for every particle.
/// Velocity must be updated first.
pub fn integrate(particles: &mut [Particle], gravity: Vec2) {
    for p in particles.iter_mut() {
        p.velocity += gravity;
        p.position += p.velocity;
    }
}

/// Add the same velocity delta to every particle
pub fn apply_impulse(particles: &mut [Particle], delta: Vec2) {
    for p in particles.iter_mut() {
        p.velocity += delta;
    }
}
