//! Boat behavior profiles.

use serde::{Deserialize, Serialize};

use corsair_core::constants::*;

/// Tunables for one class of enemy boat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoatProfile {
    /// Closing step per axis per tick.
    pub step: f64,
    /// Planar radius inside which the boat stops closing and may fire.
    pub approach_radius: f64,
    /// Per-tick chance to fire while in range.
    pub fire_probability: f64,
    /// Minimum elapsed game ticks before the first shot.
    pub fire_grace_ticks: u64,
}

impl Default for BoatProfile {
    fn default() -> Self {
        Self {
            step: BOAT_STEP,
            approach_radius: BOAT_APPROACH_RADIUS,
            fire_probability: BOAT_FIRE_PROBABILITY,
            fire_grace_ticks: BOAT_FIRE_GRACE_TICKS,
        }
    }
}

impl BoatProfile {
    /// Default profile with a different trigger rate.
    pub fn with_fire_probability(fire_probability: f64) -> Self {
        Self {
            fire_probability: fire_probability.clamp(0.0, 1.0),
            ..Self::default()
        }
    }
}
