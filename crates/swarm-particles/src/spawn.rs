//! Staged spawning: turns bulk requests into one new particle per tick

use crate::particle::{Particle, ParticleStore};
use rand::Rng;
use std::f64::consts::TAU;
use swarm_core::{ChannelRange, Color, SimConfig, Vec2};

/// Counter of particles requested but not yet created.
///
/// Creation is rate-limited to one per tick so a large request is spread
/// across frames instead of landing in a single one.
#[derive(Debug, Default)]
pub struct SpawnQueue {
    pending: usize,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` particles to the backlog. No cap is applied here.
    pub fn request(&mut self, count: u32) {
        self.pending = self.pending.saturating_add(count as usize);
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Create at most one particle. Returns true if one was appended.
    pub fn step<R: Rng>(&mut self, store: &mut ParticleStore, config: &SimConfig, rng: &mut R) -> bool {
        if self.pending == 0 {
            return false;
        }
        store.push(sample_particle(config, rng));
        self.pending -= 1;
        if self.pending == 0 {
            log::debug!("spawn queue drained at {} particles", store.len());
        }
        true
    }
}

/// Draw a fresh particle near the spawn anchor, heading in a random direction
pub fn sample_particle<R: Rng>(config: &SimConfig, rng: &mut R) -> Particle {
    let anchor = config.spawn_anchor();
    let position = Vec2::new(
        anchor.x + rng.random::<f64>() * config.radius,
        anchor.y + rng.random::<f64>() * config.radius,
    );

    let angle = rng.random::<f64>() * TAU;
    let velocity = Vec2::new(
        config.spawn_speed * angle.cos(),
        config.spawn_speed * angle.sin() + rng.random::<f64>() * config.spawn_vertical_jitter,
    );

    let color = Color::new(
        sample_channel(config.color_red, rng),
        sample_channel(config.color_green, rng),
        sample_channel(config.color_blue, rng),
    );

    Particle::new(position, velocity, color)
}

fn sample_channel<R: Rng>(range: ChannelRange, rng: &mut R) -> u8 {
    if range.is_empty() {
        return range.min;
    }
    rng.random_range(range.min..range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn one_particle_per_step() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = ParticleStore::new();
        let mut queue = SpawnQueue::new();

        queue.request(3);
        assert_eq!(queue.pending(), 3);

        for expected in 1..=3 {
            assert!(queue.step(&mut store, &config, &mut rng));
            assert_eq!(store.len(), expected);
        }
        assert_eq!(queue.pending(), 0);
        assert!(!queue.step(&mut store, &config, &mut rng));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn sampled_particle_within_ranges() {
        let config = SimConfig::default();
        let anchor = config.spawn_anchor();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let p = sample_particle(&config, &mut rng);
            assert!(p.position.x >= anchor.x && p.position.x < anchor.x + config.radius);
            assert!(p.position.y >= anchor.y && p.position.y < anchor.y + config.radius);

            // Horizontal speed is exactly the cosine term; vertical adds [0, jitter)
            assert!(p.velocity.x.abs() <= config.spawn_speed + 1e-9);
            let vy_bound = config.spawn_speed + config.spawn_vertical_jitter;
            assert!(p.velocity.y.abs() <= vy_bound + 1e-9);

            let c = p.color();
            assert!((50..100).contains(&c.r));
            assert!((50..100).contains(&c.g));
            assert!((200..255).contains(&c.b));
        }
    }

    #[test]
    fn consecutive_spawns_differ() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let a = sample_particle(&config, &mut rng);
        let b = sample_particle(&config, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let config = SimConfig::default();
        let a = sample_particle(&config, &mut StdRng::seed_from_u64(99));
        let b = sample_particle(&config, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_jitter_gives_exact_speed() {
        let config = SimConfig {
            spawn_vertical_jitter: 0.0,
            spawn_speed: 4.0,
            ..SimConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let p = sample_particle(&config, &mut rng);
            assert!((p.velocity.length() - 4.0).abs() < 1e-9);
        }
    }
}
