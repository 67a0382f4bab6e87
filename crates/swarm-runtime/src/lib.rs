//! Swarm Runtime - Frame loop infrastructure
//!
//! Provides the building blocks a host loop needs to drive the simulation:
//! - `Command` / `CommandQueue`: external requests staged between ticks
//! - `InputFrame` / `SpawnPolicy`: per-frame input and the caller-side particle cap
//! - `RuntimeSystem`: trait for systems ticked once per frame

mod command;
mod command_queue;
mod input;
mod system;

pub use command::Command;
pub use command_queue::CommandQueue;
pub use input::{InputFrame, SpawnPolicy};
pub use system::RuntimeSystem;
