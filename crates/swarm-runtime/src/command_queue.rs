//! Queue for commands staged between ticks

use crate::command::Command;

/// A simple command queue that the input layer pushes to and the tick drains
///
/// Draining happens at the start of a tick, so a command is never applied in
/// the middle of a physics phase.
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Push a command onto the queue
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.commands.extend(commands);
    }

    /// Drain all commands in push order
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Spawn requests still waiting in the queue
    pub fn queued_spawns(&self) -> u32 {
        self.commands
            .iter()
            .map(|c| match c {
                Command::Spawn(n) => *n,
                Command::Impulse(_) => 0,
            })
            .fold(0u32, u32::saturating_add)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
