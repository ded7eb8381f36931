//! Events emitted by the simulation for audio and UI feedback.
//!
//! The core never plays sounds; the audio layer observes these.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, Side};

/// Audio cues, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A cannonball left the barrel.
    CannonFired { side: Side },
    /// A cannonball struck a hull.
    Impact { side: Side, target: u32 },
    /// An enemy boat went down.
    BoatSunk { boat: u32 },
    /// The player's ship went down.
    ShipDestroyed,
    /// A reward started reeling toward the ship.
    RewardReeling { chest: u32 },
    /// A chest was looted.
    ChestLooted { chest: u32 },
    /// Ship started moving (movement loop on).
    ShipUnderway,
    /// Ship stopped moving (movement loop off).
    ShipStopped,
    /// The game phase changed.
    PhaseChanged { from: GamePhase, to: GamePhase },
}
