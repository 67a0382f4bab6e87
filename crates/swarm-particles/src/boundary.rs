//! Wall containment with lossy reflection

use crate::particle::Particle;

/// Axis-aligned simulation area `[0, width] x [0, height]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if a circle of `radius` centered at (x, y) lies inside, with `tolerance` slack
    pub fn contains(&self, x: f64, y: f64, radius: f64, tolerance: f64) -> bool {
        x >= radius - tolerance
            && x <= self.width - radius + tolerance
            && y >= radius - tolerance
            && y <= self.height - radius + tolerance
    }
}

/// Clamp every particle into `[radius, dimension - radius]` on both axes.
///
/// On contact the velocity component along that axis is negated and scaled by
/// `restitution`. Axes are handled independently, so a corner hit bounces both.
pub fn resolve(particles: &mut [Particle], bounds: Bounds, radius: f64, restitution: f64) {
    let max_x = bounds.width - radius;
    let max_y = bounds.height - radius;
    for p in particles.iter_mut() {
        clamp_axis(&mut p.position.x, &mut p.velocity.x, radius, max_x, restitution);
        clamp_axis(&mut p.position.y, &mut p.velocity.y, radius, max_y, restitution);
    }
}

#[inline]
fn clamp_axis(pos: &mut f64, vel: &mut f64, lo: f64, hi: f64, restitution: f64) {
    if *pos < lo {
        *pos = lo;
        *vel = -*vel * restitution;
    } else if *pos > hi {
        *pos = hi;
        *vel = -*vel * restitution;
    }
}
