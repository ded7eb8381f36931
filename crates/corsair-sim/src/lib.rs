//! Simulation engine for CORSAIR.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces WorldSnapshots for the presentation layer.

pub mod controller;
pub mod engine;
pub mod error;
pub mod score;
pub mod systems;
pub mod templates;
pub mod world_setup;

pub use corsair_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;
