//! Cannonball lifecycle: launch, advance, impact, retire.
//!
//! Every in-flight cannonball advances exactly once per tick, in spawn
//! order. A cannonball that hits is retired before it can move again;
//! one that outruns `PROJECTILE_MAX_RANGE` is retired without effect.

use hecs::{Entity, World};

use corsair_core::collision::is_colliding;
use corsair_core::components::*;
use corsair_core::constants::*;
use corsair_core::enums::{HitOutcome, ShipStatus, Side};
use corsair_core::events::AudioEvent;
use corsair_core::types::{heading_direction, Position};

use super::in_spawn_order;
use crate::score::ScoreState;

/// Spawn a cannonball at `origin` (raised to launch height) flying along
/// the firer's heading.
pub fn launch(
    world: &mut World,
    id: EntityId,
    origin: Position,
    heading: f64,
    owner: Side,
    fired_by: EntityId,
    scale: f64,
) -> Entity {
    let position = Position::new(origin.x, PROJECTILE_LAUNCH_HEIGHT, origin.z);
    world.spawn((
        Projectile {
            owner,
            fired_by,
            travelled: 0.0,
        },
        id,
        position,
        Heading(heading),
        Scale(scale),
    ))
}

/// Advance all cannonballs one step and resolve impacts.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) {
    for shot in in_spawn_order::<Projectile>(world) {
        if despawn_buffer.contains(&shot) {
            continue;
        }
        let Ok((projectile, pos, heading)) =
            world.query_one_mut::<(&mut Projectile, &mut Position, &Heading)>(shot)
        else {
            continue;
        };

        let step = heading_direction(heading.0) * (PROJECTILE_SPEED * projectile.owner.launch_sign());
        pos.x += step.x;
        pos.z += step.y;
        projectile.travelled += PROJECTILE_SPEED;

        let owner = projectile.owner;
        let travelled = projectile.travelled;
        let shot_pos = *pos;

        if let Some(target) = first_hull_hit(world, &shot_pos, owner.opponent(), despawn_buffer) {
            despawn_buffer.push(shot);
            apply_hit(world, target, despawn_buffer, score, audio_events);
        } else if travelled > PROJECTILE_MAX_RANGE {
            despawn_buffer.push(shot);
        }
    }
}

/// First afloat hull of `side` (in spawn order) inside the impact window.
fn first_hull_hit(
    world: &World,
    shot: &Position,
    side: Side,
    despawn_buffer: &[Entity],
) -> Option<Entity> {
    let mut candidates: Vec<(EntityId, Entity)> = world
        .query::<(&EntityId, &Side, &Position, &Hull)>()
        .iter()
        .filter(|(entity, (_, s, pos, hull))| {
            **s == side
                && !hull.is_sunk()
                && !despawn_buffer.contains(entity)
                && is_colliding(shot, pos, CANNONBALL_HULL_TOLERANCE)
        })
        .map(|(entity, (id, ..))| (*id, entity))
        .collect();
    candidates.sort_by_key(|(id, _)| *id);
    candidates.first().map(|(_, entity)| *entity)
}

/// Damage a hull and resolve what that means for its owner.
pub fn apply_hit(
    world: &mut World,
    target: Entity,
    despawn_buffer: &mut Vec<Entity>,
    score: &mut ScoreState,
    audio_events: &mut Vec<AudioEvent>,
) -> HitOutcome {
    let Ok((hull, side, id)) = world.query_one_mut::<(&mut Hull, &Side, &EntityId)>(target) else {
        return HitOutcome::NoChange;
    };
    let side = *side;
    let id = *id;
    let outcome = hull.hit();
    if outcome == HitOutcome::NoChange {
        return outcome;
    }

    audio_events.push(AudioEvent::Impact {
        side,
        target: id.0,
    });

    if outcome == HitOutcome::Destroyed {
        match side {
            Side::Enemy => {
                despawn_buffer.push(target);
                score.boats_destroyed += 1;
                audio_events.push(AudioEvent::BoatSunk { boat: id.0 });
                tracing::info!(
                    boat = id.0,
                    destroyed = score.boats_destroyed,
                    total = score.boats_total,
                    "Boat sunk"
                );
            }
            Side::Player => {
                if let Ok(mut ship) = world.get::<&mut PlayerShip>(target) {
                    ship.status = ShipStatus::Destroyed;
                    ship.velocity = 0.0;
                    ship.angular_velocity = 0.0;
                }
                audio_events.push(AudioEvent::ShipDestroyed);
                tracing::info!("Ship destroyed");
            }
        }
    }
    outcome
}
