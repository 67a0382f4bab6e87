//! Pairwise overlap resolution with multi-pass relaxation
//!
//! Every pass sweeps all unordered pairs `(i, j)` with `i < j` in store order.
//! Overlapping pairs are pushed apart along the line of centers and exchange
//! normal velocity according to the restitution coefficient. Repeating the
//! sweep lets corrections propagate through stacks of touching particles;
//! dense clusters improve each pass but are not guaranteed to converge.
//!
//! Cost is O(n^2) per pass with no spatial partitioning, which keeps practical
//! particle counts in the low thousands.

use crate::particle::Particle;
use swarm_core::Vec2;

/// Center distances at or below this are treated as coincident
pub const COINCIDENT_EPSILON: f64 = 1e-9;

/// Fallback contact normal for coincident centers
const FALLBACK_NORMAL: Vec2 = Vec2::RIGHT;

/// Counters from one resolution call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionStats {
    /// Overlapping pairs resolved, summed over all passes
    pub contacts: usize,
    /// Contacts whose centers coincided and used the fallback normal
    pub degenerate: usize,
}

impl CollisionStats {
    fn merge(&mut self, other: CollisionStats) {
        self.contacts += other.contacts;
        self.degenerate += other.degenerate;
    }
}

/// Run `passes` relaxation sweeps over all pairs
pub fn resolve(
    particles: &mut [Particle],
    radius: f64,
    restitution: f64,
    passes: u32,
) -> CollisionStats {
    let mut stats = CollisionStats::default();
    for _ in 0..passes {
        stats.merge(resolve_pass(particles, radius, restitution));
    }
    stats
}

/// One sweep over every unordered pair
pub fn resolve_pass(particles: &mut [Particle], radius: f64, restitution: f64) -> CollisionStats {
    let min_dist = 2.0 * radius;
    let min_dist_sq = min_dist * min_dist;
    let mut stats = CollisionStats::default();

    let n = particles.len();
    for i in 0..n {
        // Everything after i, so `a` and `b` never alias
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            let delta = a.position - b.position;
            if delta.length_squared() >= min_dist_sq {
                continue;
            }
            stats.contacts += 1;
            if resolve_pair(a, b, delta, min_dist, restitution) {
                stats.degenerate += 1;
            }
        }
    }

    stats
}

/// Separate and bounce one overlapping pair. `delta` is `a - b`.
///
/// Returns true when the centers coincided and the fallback normal was used.
fn resolve_pair(a: &mut Particle, b: &mut Particle, delta: Vec2, min_dist: f64, e: f64) -> bool {
    let dist = delta.length();
    let (normal, dist, degenerate) = if dist > COINCIDENT_EPSILON {
        (delta * (1.0 / dist), dist, false)
    } else {
        log::debug!(
            "coincident centers at ({:.3}, {:.3}); using fallback normal",
            a.position.x,
            a.position.y
        );
        (FALLBACK_NORMAL, 0.0, true)
    };

    // Equal masses: each side moves half the overlap
    let push = normal * ((min_dist - dist) * 0.5);
    a.position += push;
    b.position -= push;

    let v1n = a.velocity.dot(&normal);
    let v2n = b.velocity.dot(&normal);
    let v1n_new = (v1n * (1.0 - e) + v2n * (1.0 + e)) * 0.5;
    let v2n_new = (v2n * (1.0 - e) + v1n * (1.0 + e)) * 0.5;

    // Tangential components are left alone
    a.velocity += normal * (v1n_new - v1n);
    b.velocity += normal * (v2n_new - v2n);

    degenerate
}

#[cfg(test)]
mod tests {
    use super::*;
    use swarm_core::Color;

    fn particle(pos: (f64, f64), vel: (f64, f64)) -> Particle {
        Particle::new(Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), Color::default())
    }

    fn distance(a: &Particle, b: &Particle) -> f64 {
        (a.position - b.position).length()
    }

    #[test]
    fn overlapping_pair_separates_in_one_pass() {
        let mut ps = vec![particle((10.0, 10.0), (0.0, 0.0)), particle((16.0, 10.0), (0.0, 0.0))];
        let stats = resolve_pass(&mut ps, 5.0, 0.9);
        assert_eq!(stats.contacts, 1);
        assert_eq!(stats.degenerate, 0);
        assert!(distance(&ps[0], &ps[1]) >= 10.0 - 1e-9);
        // Symmetric push: the midpoint stays put
        let mid = (ps[0].position + ps[1].position) * 0.5;
        assert!((mid - Vec2::new(13.0, 10.0)).length() < 1e-12);
    }

    #[test]
    fn touching_or_apart_pairs_are_ignored() {
        let mut ps = vec![
            particle((10.0, 10.0), (1.0, 0.0)),
            particle((20.0, 10.0), (-1.0, 0.0)),
            particle((50.0, 50.0), (0.0, 0.0)),
        ];
        let before = ps.clone();
        let stats = resolve(&mut ps, 5.0, 0.9, 3);
        assert_eq!(stats, CollisionStats::default());
        assert_eq!(ps, before);
    }

    #[test]
    fn elastic_head_on_exchanges_velocities() {
        let mut ps = vec![particle((100.0, 50.0), (2.0, 0.0)), particle((108.0, 50.0), (-2.0, 0.0))];
        let momentum_before = ps[0].velocity + ps[1].velocity;
        resolve(&mut ps, 5.0, 1.0, 3);
        assert!((ps[0].velocity - Vec2::new(-2.0, 0.0)).length() < 1e-9);
        assert!((ps[1].velocity - Vec2::new(2.0, 0.0)).length() < 1e-9);
        let momentum_after = ps[0].velocity + ps[1].velocity;
        assert!((momentum_after - momentum_before).length() < 1e-9);
    }

    #[test]
    fn restitution_conserves_normal_momentum() {
        let mut ps = vec![particle((0.0, 0.0), (3.0, 1.0)), particle((6.0, 8.0), (-1.0, -4.0))];
        // Centers 10 apart; bring them to 8 along the same line
        ps[1].position = Vec2::new(4.8, 6.4);
        let normal = {
            let d = ps[0].position - ps[1].position;
            d * (1.0 / d.length())
        };
        let before = ps[0].velocity.dot(&normal) + ps[1].velocity.dot(&normal);
        resolve_pass(&mut ps, 5.0, 0.9);
        let after = ps[0].velocity.dot(&normal) + ps[1].velocity.dot(&normal);
        assert!((after - before).abs() < 1e-9);
    }

    #[test]
    fn tangential_velocity_untouched() {
        // Contact normal is along x; y velocities must survive
        let mut ps = vec![particle((10.0, 10.0), (1.0, 3.0)), particle((17.0, 10.0), (-1.0, -2.0))];
        resolve_pass(&mut ps, 5.0, 0.9);
        assert!((ps[0].velocity.y - 3.0).abs() < 1e-12);
        assert!((ps[1].velocity.y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn coincident_centers_stay_finite_and_separate() {
        let mut ps = vec![particle((30.0, 30.0), (1.0, 1.0)), particle((30.0, 30.0), (-1.0, 2.0))];
        let stats = resolve(&mut ps, 5.0, 0.9, 3);
        assert!(stats.degenerate >= 1);
        for p in &ps {
            assert!(p.position.is_finite());
            assert!(p.velocity.is_finite());
        }
        // The fallback direction is arbitrary; only separation is required
        assert!(distance(&ps[0], &ps[1]) >= 10.0 - 1e-9);
    }

    #[test]
    fn multiple_passes_relax_a_row() {
        // Three particles squeezed into a row; a single sweep leaves residual overlap
        let mut ps = vec![
            particle((20.0, 20.0), (0.0, 0.0)),
            particle((27.0, 20.0), (0.0, 0.0)),
            particle((34.0, 20.0), (0.0, 0.0)),
        ];
        let worst_overlap = |ps: &[Particle]| {
            let mut worst: f64 = 0.0;
            for i in 0..ps.len() {
                for j in (i + 1)..ps.len() {
                    worst = worst.max(10.0 - distance(&ps[i], &ps[j]));
                }
            }
            worst
        };
        let initial = worst_overlap(&ps);
        resolve_pass(&mut ps, 5.0, 0.0);
        let after_one = worst_overlap(&ps);
        resolve(&mut ps, 5.0, 0.0, 2);
        let after_three = worst_overlap(&ps);
        assert!(after_one < initial);
        assert!(after_three <= after_one);
    }
}
