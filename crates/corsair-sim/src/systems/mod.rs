//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything lives in components or is passed in.
//! Removals are marked into a despawn buffer and compacted after the pass,
//! so no system ever skips the successor of a removed entity.

use hecs::{Entity, World};

use corsair_core::components::{EntityId, PlayerShip};
use corsair_core::enums::ShipStatus;
use corsair_core::types::Position;

pub mod boat_ai;
pub mod collision;
pub mod loot;
pub mod outcome;
pub mod projectiles;
pub mod ship_control;
pub mod snapshot;

/// Entities carrying `T`, in spawn (append) order.
pub(crate) fn in_spawn_order<T: hecs::Component>(world: &World) -> Vec<Entity> {
    let mut found: Vec<(EntityId, Entity)> = world
        .query::<(&EntityId, &T)>()
        .iter()
        .map(|(entity, (id, _))| (*id, entity))
        .collect();
    found.sort_by_key(|(id, _)| *id);
    found.into_iter().map(|(_, entity)| entity).collect()
}

/// Ship position and whether it is still afloat.
pub(crate) fn ship_state(world: &World) -> Option<(Position, bool)> {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (ship, pos))| (*pos, ship.status == ShipStatus::Alive))
}

/// Despawn everything in the buffer, leaving it empty.
pub(crate) fn compact(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
