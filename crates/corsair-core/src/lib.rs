//! Core types and definitions for the CORSAIR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, events, constants and the
//! proximity test used by every collision sweep.
//! It has no dependency on any ECS or runtime framework.

pub mod collision;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod hud;
pub mod state;
pub mod types;
