//! Proximity sweeps: ship alongside chests, and boats overlapping boats.
//!
//! Neither sweep moves anything. The ship sweep decides which rewards are
//! in collection; the boat sweep only refreshes the diagnostic flag.

use hecs::{Entity, World};

use corsair_core::collision::is_colliding;
use corsair_core::components::{EnemyBoat, Reward};
use corsair_core::constants::{BOAT_BOAT_TOLERANCE, SHIP_CHEST_TOLERANCE};
use corsair_core::types::Position;

use super::{in_spawn_order, ship_state};

/// Flag each reward whose chest sits inside the ship's collection window.
/// A sunk ship collects nothing.
pub fn sweep_chests(world: &mut World) {
    let ship = ship_state(world);
    for (_entity, (reward, pos)) in world.query_mut::<(&mut Reward, &Position)>() {
        reward.in_collection = match ship {
            Some((ship_pos, true)) => is_colliding(&ship_pos, pos, SHIP_CHEST_TOLERANCE),
            _ => false,
        };
    }
}

/// Recompute every boat's `colliding` flag against the rest of the fleet.
/// A boat without a position overlaps nothing.
pub fn sweep_boats(world: &mut World) {
    let boats: Vec<(Entity, Option<Position>)> = in_spawn_order::<EnemyBoat>(world)
        .into_iter()
        .map(|e| (e, world.get::<&Position>(e).ok().map(|p| *p)))
        .collect();

    for (i, &(entity, pos)) in boats.iter().enumerate() {
        let colliding = pos.is_some_and(|pos| {
            boats.iter().enumerate().any(|(j, (_, other))| {
                i != j && other.is_some_and(|other| is_colliding(&pos, &other, BOAT_BOAT_TOLERANCE))
            })
        });
        if let Ok(mut boat) = world.get::<&mut EnemyBoat>(entity) {
            boat.colliding = colliding;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsair_core::components::{Chest, EntityId, PlayerShip};
    use corsair_core::enums::ShipStatus;

    fn world_with_ship(at: Position, status: ShipStatus) -> World {
        let mut world = World::new();
        world.spawn((
            PlayerShip {
                status,
                ..PlayerShip::default()
            },
            EntityId(0),
            at,
        ));
        world
    }

    #[test]
    fn test_ship_alongside_chest_starts_collection() {
        let mut world = world_with_ship(Position::new(0.0, 0.0, 0.0), ShipStatus::Alive);
        let near = world.spawn((Chest::default(), Reward::default(), Position::new(40.0, 0.0, 20.0)));
        let far = world.spawn((Chest::default(), Reward::default(), Position::new(40.0, 0.0, 30.0)));
        sweep_chests(&mut world);
        assert!(world.get::<&Reward>(near).unwrap().in_collection);
        assert!(
            !world.get::<&Reward>(far).unwrap().in_collection,
            "z tolerance is the tight axis"
        );
    }

    #[test]
    fn test_sunk_ship_collects_nothing() {
        let mut world = world_with_ship(Position::new(0.0, 0.0, 0.0), ShipStatus::Destroyed);
        let chest = world.spawn((Chest::default(), Reward::default(), Position::new(0.0, 0.0, 0.0)));
        sweep_chests(&mut world);
        assert!(!world.get::<&Reward>(chest).unwrap().in_collection);
    }

    #[test]
    fn test_boat_overlap_flag() {
        let mut world = World::new();
        let a = world.spawn((EnemyBoat::default(), EntityId(1), Position::new(0.0, 0.0, 0.0)));
        let b = world.spawn((EnemyBoat::default(), EntityId(2), Position::new(30.0, 0.0, 30.0)));
        let c = world.spawn((EnemyBoat::default(), EntityId(3), Position::new(500.0, 0.0, 0.0)));
        sweep_boats(&mut world);
        assert!(world.get::<&EnemyBoat>(a).unwrap().colliding);
        assert!(world.get::<&EnemyBoat>(b).unwrap().colliding);
        assert!(!world.get::<&EnemyBoat>(c).unwrap().colliding);
    }

    #[test]
    fn test_boat_without_position_still_refreshes_fleet() {
        let mut world = World::new();
        let a = world.spawn((EnemyBoat::default(), EntityId(1), Position::new(0.0, 0.0, 0.0)));
        let b = world.spawn((EnemyBoat::default(), EntityId(2), Position::new(500.0, 0.0, 0.0)));
        let adrift = world.spawn((EnemyBoat { colliding: true, ..EnemyBoat::default() }, EntityId(3)));
        world.get::<&mut EnemyBoat>(a).unwrap().colliding = true;
        world.get::<&mut EnemyBoat>(b).unwrap().colliding = true;

        sweep_boats(&mut world);
        assert!(!world.get::<&EnemyBoat>(a).unwrap().colliding, "Stale flag cleared");
        assert!(!world.get::<&EnemyBoat>(b).unwrap().colliding);
        assert!(!world.get::<&EnemyBoat>(adrift).unwrap().colliding);
    }
}
