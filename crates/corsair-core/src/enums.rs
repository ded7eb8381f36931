//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for entity templates and the start action.
    #[default]
    Loading,
    Playing,
    Paused,
    /// Player quit.
    Over,
    Won,
    Lost,
}

impl GamePhase {
    /// Over, Won and Lost have no outgoing transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Over | GamePhase::Won | GamePhase::Lost)
    }
}

/// Which fleet an actor or cannonball belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }

    /// Direction sign applied to the firer's heading.
    /// Player cannonballs travel along +heading, enemy ones along -heading.
    pub fn launch_sign(self) -> f64 {
        match self {
            Side::Player => 1.0,
            Side::Enemy => -1.0,
        }
    }
}

/// Addresses an actor for explicit action entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorId {
    Ship,
    Boat(u32),
}

/// Player ship lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipStatus {
    #[default]
    Alive,
    Destroyed,
}

/// Result of applying one cannonball impact to a hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// The hull was already at 0; nothing happened.
    NoChange,
    /// Damage applied, hull still afloat.
    HitConfirmed,
    /// This hit took the hull to 0.
    Destroyed,
}

/// Result of one reward update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LootOutcome {
    NoChange,
    /// The reward just entered collection.
    Reeling,
    /// The reward reached collection height; chest and reward are removed.
    Looted,
}

/// Visual templates the asset loader must supply before a game can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateKind {
    Ship,
    Boat,
    Chest,
    Reward,
    Cannonball,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Ship,
        TemplateKind::Boat,
        TemplateKind::Chest,
        TemplateKind::Reward,
        TemplateKind::Cannonball,
    ];
}
