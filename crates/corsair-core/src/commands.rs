//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, in order.

use serde::{Deserialize, Serialize};

use crate::enums::ActorId;

/// All discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Game flow ---
    /// Leave Loading once templates are registered.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Toggle between Playing and Paused.
    TogglePause,
    /// Abandon the game.
    Quit,

    // --- Actors ---
    /// Fire one cannonball from the given actor.
    Fire { actor: ActorId },
    /// Restore an actor to its spawn state.
    Reset { actor: ActorId },
    /// Refill the ship's magazine.
    Reload,
    /// Toggle ship visibility.
    ToggleHidden,

    // --- Presentation ---
    /// Toggle the mute latch reported in snapshots.
    ToggleMute,
}
