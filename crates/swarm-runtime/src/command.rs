//! External requests applied to the simulation between ticks

use swarm_core::Vec2;

/// A discrete request from the input layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Queue this many particles for staged creation
    Spawn(u32),
    /// Add this velocity delta to every live particle
    Impulse(Vec2),
}
