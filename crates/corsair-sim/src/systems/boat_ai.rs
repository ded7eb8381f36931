//! Enemy boat AI system: drives the pure FSM from `corsair-boat-ai` for
//! every boat, in spawn order.
//!
//! The FSM picks heading and position; firing is only requested here and
//! carried out by the engine so ammo and projectile spawning stay in one
//! place for both sides.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use corsair_boat_ai::fsm::{self, BoatContext};
use corsair_boat_ai::profiles::BoatProfile;
use corsair_core::components::{EnemyBoat, Heading, Hull, Magazine};
use corsair_core::types::Position;

use super::{in_spawn_order, ship_state};

/// Update every afloat boat. Returns the boats that want to fire this tick.
pub fn run(
    world: &mut World,
    profile: &BoatProfile,
    rng: &mut ChaCha8Rng,
    elapsed_ticks: u64,
) -> Vec<Entity> {
    let Some((target, target_alive)) = ship_state(world) else {
        return Vec::new();
    };

    let mut fire_requests = Vec::new();
    for entity in in_spawn_order::<EnemyBoat>(world) {
        let Ok((pos, heading, hull, magazine)) =
            world.query_one_mut::<(&mut Position, &mut Heading, &Hull, &Magazine)>(entity)
        else {
            continue;
        };
        if hull.is_sunk() {
            continue;
        }

        // One draw per afloat boat per tick keeps the stream aligned across runs.
        let fire_roll = rng.gen::<f64>();
        let ctx = BoatContext {
            position: *pos,
            heading: heading.0,
            target,
            target_alive,
            ammo: magazine.rounds,
            elapsed_ticks,
            fire_roll,
        };
        let update = fsm::evaluate(&ctx, profile);

        *pos = update.position;
        heading.0 = update.heading;
        if update.fire {
            fire_requests.push(entity);
        }
    }
    fire_requests
}
