//! Headless match engine for Pixel Forts.
//!
//! Owns the hecs ECS world and the tile grid, runs the per-tick systems
//! in a fixed order, and produces `MatchSnapshot`s for the rendering
//! collaborator. No rendering or input framework dependencies, which
//! keeps every match deterministic and testable.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchConfig, MatchEngine};
pub use forts_core as core;
