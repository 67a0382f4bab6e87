//! Runtime system trait

use crate::input::InputFrame;
use swarm_core::Result;

/// A system that can be ticked by the host loop
///
/// The host calls `update` exactly once per frame, synchronously. Systems never
/// spawn threads or block, so everything a frame does happens inside that call.
pub trait RuntimeSystem {
    /// Called once when the system is first registered
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with that frame's input snapshot
    fn update(&mut self, frame: &InputFrame) -> Result<()>;

    /// Called when the system is being shut down
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
