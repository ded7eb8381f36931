//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the enemy fleet and the chest field with
//! appropriate component bundles. Boats and chests are scattered over the
//! arena but never inside the exclusion radius around the ship's spawn.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use corsair_core::components::*;
use corsair_core::constants::*;
use corsair_core::enums::{Side, TemplateKind};
use corsair_core::types::Position;

use crate::engine::SimConfig;
use crate::error::SimError;
use crate::templates::TemplateRegistry;

/// Hands out spawn-order ids.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

/// Where the ship starts, and the center of the exclusion zone.
pub fn ship_spawn() -> Spawn {
    Spawn {
        position: Position::new(0.0, 0.0, 0.0),
        heading: SHIP_SPAWN_HEADING,
    }
}

/// Populate a fresh world: ship, boats, then chests with their rewards.
pub fn setup_world(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut IdAllocator,
    config: &SimConfig,
    templates: &TemplateRegistry,
) -> Result<hecs::Entity, SimError> {
    templates.validate()?;

    let ship = spawn_ship(world, ids, config.ship_ammo, templates);
    let center = ship_spawn().position;

    for _ in 0..config.boat_count {
        let position = sample_spawn_point(
            rng,
            config.arena_half_extent,
            &center,
            config.exclusion_radius,
        );
        spawn_boat(world, ids, position, config.boat_ammo, templates);
    }

    for _ in 0..config.chest_count {
        let position = sample_spawn_point(
            rng,
            config.arena_half_extent,
            &center,
            config.exclusion_radius,
        );
        spawn_chest(world, ids, position, templates);
    }

    Ok(ship)
}

/// Spawn the player's ship at its spawn point with full health, boost and ammo.
pub fn spawn_ship(
    world: &mut World,
    ids: &mut IdAllocator,
    ammo: u32,
    templates: &TemplateRegistry,
) -> hecs::Entity {
    let spawn = ship_spawn();
    world.spawn((
        PlayerShip::default(),
        ids.next_id(),
        Side::Player,
        spawn.position,
        Heading(spawn.heading),
        Hull::default(),
        Magazine::full(ammo),
        spawn,
        Scale(templates.scale_of(TemplateKind::Ship)),
    ))
}

/// Spawn one enemy boat facing the default quarter-turn heading.
pub fn spawn_boat(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    ammo: u32,
    templates: &TemplateRegistry,
) -> hecs::Entity {
    let spawn = Spawn {
        position,
        heading: std::f64::consts::FRAC_PI_2,
    };
    world.spawn((
        EnemyBoat::default(),
        ids.next_id(),
        Side::Enemy,
        position,
        Heading(spawn.heading),
        Hull::default(),
        Magazine::full(ammo),
        spawn,
        Scale(templates.scale_of(TemplateKind::Boat)),
    ))
}

/// Spawn a chest; its reward rides on the same entity.
pub fn spawn_chest(
    world: &mut World,
    ids: &mut IdAllocator,
    position: Position,
    templates: &TemplateRegistry,
) -> hecs::Entity {
    let reward = Reward {
        scale: templates.scale_of(TemplateKind::Reward),
        ..Reward::default()
    };
    world.spawn((
        Chest::default(),
        reward,
        ids.next_id(),
        position,
        Scale(templates.scale_of(TemplateKind::Chest)),
    ))
}

/// Integer grid point in the arena, strictly outside `radius` of `center`.
///
/// Callers must ensure the arena extends past the exclusion radius
/// (`SimConfig::validate`), otherwise this never returns.
pub fn sample_spawn_point(
    rng: &mut ChaCha8Rng,
    half_extent: f64,
    center: &Position,
    radius: f64,
) -> Position {
    let extent = half_extent.floor() as i64;
    loop {
        let x = rng.gen_range(-extent..=extent) as f64;
        let z = rng.gen_range(-extent..=extent) as f64;
        let candidate = Position::new(x, 0.0, z);
        if candidate.planar_distance_to(center) > radius {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_points_respect_exclusion() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = ship_spawn().position;
        for _ in 0..2_000 {
            let p = sample_spawn_point(&mut rng, 300.0, &center, 250.0);
            assert!(p.planar_distance_to(&center) > 250.0);
            assert!(p.x.abs() <= 300.0 && p.z.abs() <= 300.0);
            assert_eq!(p.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_ids_increase() {
        let mut ids = IdAllocator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(a < b);
    }
}
