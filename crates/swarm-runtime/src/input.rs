//! Per-frame input snapshot and the caller-side spawn policy

use crate::command::Command;
use swarm_core::Vec2;

/// What the input layer observed this frame
///
/// Button hit-testing happens in the host; by the time a frame reaches the
/// simulation it only carries resolved requests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputFrame {
    /// Pointer position in world units
    pub pointer: Vec2,
    pub pointer_pressed: bool,
    /// Toggle signal (e.g. an overlay key chord)
    pub toggle: bool,
    /// "Add particles" button: one capped batch
    pub add_requested: bool,
    /// Preset bulk request, not subject to the cap
    pub bulk_requested: Option<u32>,
    /// "Boost" button: impulse applied to every particle
    pub boost_requested: bool,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_pointer(mut self, pointer: Vec2, pressed: bool) -> Self {
        self.pointer = pointer;
        self.pointer_pressed = pressed;
        self
    }

    pub fn with_add(mut self) -> Self {
        self.add_requested = true;
        self
    }

    pub fn with_bulk(mut self, count: u32) -> Self {
        self.bulk_requested = Some(count);
        self
    }

    pub fn with_boost(mut self) -> Self {
        self.boost_requested = true;
        self
    }

    #[cfg(test)]
    pub fn with_toggle(mut self) -> Self {
        self.toggle = true;
        self
    }
}

/// Caller-side limits on how input turns into simulation commands
///
/// The simulation itself never caps its particle count; this policy is where
/// the host decides how much work it is willing to queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnPolicy {
    /// Add-button batches are refused once live + pending reaches this
    pub max_in_flight: usize,
    pub boost_batch: u32,
    pub boost_impulse: Vec2,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            max_in_flight: 1000,
            boost_batch: 20,
            boost_impulse: Vec2::UP * 10.0,
        }
    }
}

impl SpawnPolicy {
    /// Translate one frame of input into commands.
    ///
    /// `live` and `pending` are the simulation's current particle count and
    /// spawn backlog. An add batch is accepted whole while the total is below
    /// the cap, so the total can overshoot by at most one batch.
    pub fn commands_for(&self, frame: &InputFrame, live: usize, pending: usize) -> Vec<Command> {
        let mut commands = Vec::new();

        if frame.add_requested {
            if live.saturating_add(pending) < self.max_in_flight {
                commands.push(Command::Spawn(self.boost_batch));
            } else {
                log::warn!(
                    "add request refused: {} live + {} pending reached cap {}",
                    live,
                    pending,
                    self.max_in_flight
                );
            }
        }

        if let Some(count) = frame.bulk_requested {
            if count > 0 {
                commands.push(Command::Spawn(count));
            }
        }

        if frame.boost_requested {
            commands.push(Command::Impulse(self.boost_impulse));
        }

        commands
    }
}
