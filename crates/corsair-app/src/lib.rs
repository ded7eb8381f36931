//! CORSAIR headless application.
//!
//! This crate wires the simulation to a fixed-rate game loop thread,
//! a scripted autopilot standing in for the player, and the `corsair`
//! binary that ties them together from a TOML config.

pub mod autopilot;
pub mod config;
pub mod control;
pub mod game_loop;
pub mod session;
pub mod state;

pub use corsair_core as core;
