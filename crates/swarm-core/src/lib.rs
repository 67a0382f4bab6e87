//! Swarm Core - Foundational types for the Swarm particle simulator
//!
//! This crate provides the types that all other Swarm crates depend on:
//! - `Vec2` - 2D world-space vector
//! - `Color` - 8-bit RGB particle color
//! - `SimConfig` - physical constants and bounds, loadable from TOML
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{ChannelRange, SimConfig};
pub use error::{Result, SwarmError};
pub use types::{Color, Vec2};
