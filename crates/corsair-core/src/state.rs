//! World snapshot: the complete read-only state handed to the presentation
//! layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime};

/// Complete game state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Ticks left before the end screen should appear (Won/Lost only).
    pub end_screen_in_ticks: Option<u32>,
    pub muted: bool,
    pub ship: ShipView,
    pub boats: Vec<BoatView>,
    pub chests: Vec<ChestView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    pub audio_events: Vec<AudioEvent>,
}

/// Player ship as rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    /// Radians.
    pub heading: f64,
    pub scale: f64,
    pub health: u32,
    pub ammo: u32,
    pub boost: f64,
    pub velocity: f64,
    pub distance_travelled: f64,
    pub status: ShipStatus,
    pub visible: bool,
}

/// An active enemy boat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatView {
    pub id: u32,
    pub position: Position,
    pub heading: f64,
    pub scale: f64,
    pub health: u32,
    pub ammo: u32,
    pub colliding: bool,
}

/// A chest together with its floating reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChestView {
    pub id: u32,
    pub position: Position,
    pub rotation: f64,
    pub scale: f64,
    pub reward: RewardView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardView {
    pub position: Position,
    pub rotation: f64,
    pub scale: f64,
    pub in_collection: bool,
}

/// A cannonball in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub heading: f64,
    pub scale: f64,
    pub owner: Side,
    pub travelled: f64,
}

/// Running tallies for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub chests_looted: u32,
    pub chests_total: u32,
    pub boats_destroyed: u32,
    pub boats_total: u32,
    pub cannonballs_fired: u32,
}
