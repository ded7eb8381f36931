//! Enemy boat AI for CORSAIR.
//!
//! Implements the pursuit/firing state machine and the tunable
//! behavior profile boats are driven by.

pub mod fsm;
pub mod profiles;

pub use corsair_core as core;

#[cfg(test)]
mod tests;
