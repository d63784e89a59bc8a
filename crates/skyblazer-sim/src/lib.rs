//! Simulation engine for SKYBLAZER.
//!
//! Owns the hecs ECS world, processes player commands, runs all systems in a
//! fixed per-tick order, and produces `GameSnapshot`s for the renderer.
//! Completely headless (no window or input dependency), enabling
//! deterministic testing.

pub mod combat;
pub mod engine;
pub mod guidance;
pub mod missile;
pub mod progress;
pub mod systems;
pub mod world_setup;

pub use engine::{EngineConfig, GameEngine};
pub use skyblazer_core as core;
