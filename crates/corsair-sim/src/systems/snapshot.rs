//! Snapshot system: queries the ECS world and builds a complete WorldSnapshot.
//!
//! This system is read-only; it never modifies the world. Every list is
//! emitted in spawn order so consecutive snapshots line up.

use hecs::World;

use corsair_core::components::*;
use corsair_core::enums::GamePhase;
use corsair_core::events::AudioEvent;
use corsair_core::state::*;
use corsair_core::types::{Position, SimTime};

use crate::controller::GameController;
use crate::score::ScoreState;

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    controller: &GameController,
    audio_events: Vec<AudioEvent>,
    score: &ScoreState,
) -> WorldSnapshot {
    let phase = controller.phase();
    WorldSnapshot {
        time: *time,
        phase,
        end_screen_in_ticks: match phase {
            GamePhase::Won | GamePhase::Lost => controller.end_screen_in(),
            _ => None,
        },
        muted: controller.muted(),
        ship: build_ship(world),
        boats: build_boats(world),
        chests: build_chests(world),
        projectiles: build_projectiles(world),
        score: ScoreView {
            chests_looted: score.chests_looted,
            chests_total: score.chests_total,
            boats_destroyed: score.boats_destroyed,
            boats_total: score.boats_total,
            cannonballs_fired: score.cannonballs_fired,
        },
        audio_events,
    }
}

/// The ship, or a default view while nothing has been spawned yet.
fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&PlayerShip, &Position, &Heading, &Hull, &Magazine, &Scale)>()
        .iter()
        .next()
        .map(|(_, (ship, pos, heading, hull, magazine, scale))| ShipView {
            position: *pos,
            heading: heading.0,
            scale: scale.0,
            health: hull.health,
            ammo: magazine.rounds,
            boost: ship.boost,
            velocity: ship.velocity,
            distance_travelled: ship.distance_travelled,
            status: ship.status,
            visible: ship.visible,
        })
        .unwrap_or_default()
}

fn build_boats(world: &World) -> Vec<BoatView> {
    let mut boats: Vec<BoatView> = world
        .query::<(&EnemyBoat, &EntityId, &Position, &Heading, &Hull, &Magazine, &Scale)>()
        .iter()
        .map(|(_, (boat, id, pos, heading, hull, magazine, scale))| BoatView {
            id: id.0,
            position: *pos,
            heading: heading.0,
            scale: scale.0,
            health: hull.health,
            ammo: magazine.rounds,
            colliding: boat.colliding,
        })
        .collect();
    boats.sort_by_key(|b| b.id);
    boats
}

fn build_chests(world: &World) -> Vec<ChestView> {
    let mut chests: Vec<ChestView> = world
        .query::<(&Chest, &Reward, &EntityId, &Position, &Scale)>()
        .iter()
        .map(|(_, (chest, reward, id, pos, scale))| ChestView {
            id: id.0,
            position: *pos,
            rotation: chest.rotation,
            scale: scale.0,
            reward: RewardView {
                position: Position::new(pos.x, pos.y + reward.offset, pos.z),
                rotation: reward.rotation,
                scale: reward.scale,
                in_collection: reward.in_collection,
            },
        })
        .collect();
    chests.sort_by_key(|c| c.id);
    chests
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut shots: Vec<ProjectileView> = world
        .query::<(&Projectile, &EntityId, &Position, &Heading, &Scale)>()
        .iter()
        .map(|(_, (projectile, id, pos, heading, scale))| ProjectileView {
            id: id.0,
            position: *pos,
            heading: heading.0,
            scale: scale.0,
            owner: projectile.owner,
            travelled: projectile.travelled,
        })
        .collect();
    shots.sort_by_key(|p| p.id);
    shots
}
