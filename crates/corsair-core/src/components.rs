//! ECS components for hecs entities.
//!
//! Components are plain data. The few methods here are total state
//! transitions on a single component (clamped, never failing); game logic
//! that spans entities lives in systems.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::Position;

/// Spawn-order identifier. Sorting by it recovers append order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Rotation about the vertical axis (radians).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading(pub f64);

/// Uniform visual scale assigned at spawn from the entity template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale(pub f64);

/// Where an actor returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub position: Position,
    pub heading: f64,
}

/// Health shared by every hull (ship and boats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hull {
    pub health: u32,
}

impl Default for Hull {
    fn default() -> Self {
        Self { health: MAX_HEALTH }
    }
}

impl Hull {
    /// Apply one cannonball impact. Health saturates at 0 and never recovers.
    pub fn hit(&mut self) -> HitOutcome {
        if self.health == 0 {
            return HitOutcome::NoChange;
        }
        self.health = self.health.saturating_sub(HIT_DAMAGE);
        if self.health == 0 {
            HitOutcome::Destroyed
        } else {
            HitOutcome::HitConfirmed
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }
}

/// Cannonball stock. Never negative; firing on empty is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub rounds: u32,
    pub capacity: u32,
}

impl Magazine {
    pub fn full(capacity: u32) -> Self {
        Self {
            rounds: capacity,
            capacity,
        }
    }

    /// Take one round if any remain.
    pub fn draw(&mut self) -> bool {
        if self.rounds == 0 {
            return false;
        }
        self.rounds -= 1;
        true
    }

    pub fn refill(&mut self) {
        self.rounds = self.capacity;
    }
}

/// Held movement flags, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intents {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

impl Intents {
    /// Any directional flag held (boost alone does not count).
    pub fn any_movement(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Player-ship-only state. Shared hull data lives in `Hull`, `Heading`
/// and `Position`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub status: ShipStatus,
    /// Linear speed resolved this tick (units per tick, signed).
    pub velocity: f64,
    /// Turn rate resolved this tick (radians per tick, signed).
    pub angular_velocity: f64,
    /// Boost resource, saturating in [0, BOOST_MAX].
    pub boost: f64,
    /// Net distance travelled along the bow.
    pub distance_travelled: f64,
    pub intents: Intents,
    pub visible: bool,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            status: ShipStatus::Alive,
            velocity: 0.0,
            angular_velocity: 0.0,
            boost: BOOST_MAX,
            distance_travelled: 0.0,
            intents: Intents::default(),
            visible: true,
        }
    }
}

/// Enemy-boat-only state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyBoat {
    /// Overlapping another boat this tick (recomputed every tick, unused by gameplay).
    pub colliding: bool,
}

/// Treasure chest. Its reward lives on the same entity, so both are
/// despawned together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chest {
    /// Cosmetic spin (radians).
    pub rotation: f64,
}

/// Floating reward token paired with the chest on the same entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    /// Height above the chest.
    pub offset: f64,
    /// Ship is within collection range of the chest.
    pub in_collection: bool,
    /// `in_collection` as seen by the previous loot update.
    pub reeling: bool,
    pub rotation: f64,
    pub scale: f64,
}

impl Default for Reward {
    fn default() -> Self {
        Self {
            offset: REWARD_REST_OFFSET,
            in_collection: false,
            reeling: false,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

/// In-flight cannonball.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Side,
    /// Spawn id of the firing actor.
    pub fired_by: EntityId,
    /// Distance covered since launch.
    pub travelled: f64,
}
