//! Player ship control: intents -> speed, boost economy, integration.
//!
//! Opposite intents cancel: forward+backward gives zero speed and
//! left+right gives zero turn, whatever order the keys went down in.

use hecs::World;

use corsair_core::components::{Heading, Intents, PlayerShip};
use corsair_core::constants::*;
use corsair_core::enums::ShipStatus;
use corsair_core::events::AudioEvent;
use corsair_core::types::Position;

/// Apply this tick's intents to the ship and integrate its motion.
pub fn run(world: &mut World, intents: Intents) {
    for (_entity, (ship, pos, heading)) in
        world.query_mut::<(&mut PlayerShip, &mut Position, &mut Heading)>()
    {
        ship.intents = intents;
        if ship.status == ShipStatus::Destroyed {
            ship.velocity = 0.0;
            ship.angular_velocity = 0.0;
            continue;
        }

        let (velocity, angular_velocity) = resolve_speeds(&intents);
        ship.velocity = velocity;
        ship.angular_velocity = angular_velocity;
        apply_boost(ship, intents.boost);

        heading.0 += ship.angular_velocity;
        pos.translate_along(heading.0, ship.velocity);
        ship.distance_travelled += ship.velocity;
    }
}

/// Linear and angular speed from held flags, before boost.
pub fn resolve_speeds(intents: &Intents) -> (f64, f64) {
    let velocity = match (intents.forward, intents.backward) {
        (true, false) => SHIP_SPEED,
        (false, true) => -SHIP_SPEED,
        _ => 0.0,
    };

    let mut angular = match (intents.left, intents.right) {
        (true, false) => SHIP_TURN_RATE,
        (false, true) => -SHIP_TURN_RATE,
        _ => 0.0,
    };

    // Reversing steers the opposite way.
    if velocity < 0.0 {
        angular = -angular;
    }

    (velocity, angular)
}

/// Boost drains while held and regenerates while released, never both.
pub fn apply_boost(ship: &mut PlayerShip, boosting: bool) {
    if boosting {
        if ship.boost > 0.0 {
            ship.velocity *= BOOST_FACTOR;
            ship.angular_velocity *= BOOST_FACTOR;
            ship.boost = (ship.boost - BOOST_DRAIN_PER_TICK * BOOST_FACTOR).max(0.0);
        }
    } else if ship.boost < BOOST_MAX {
        ship.boost = (ship.boost + BOOST_REGEN_PER_TICK).min(BOOST_MAX);
    }
}

/// Flip the movement-audio latch when the ship starts or stops moving.
pub fn underway_transition(latch: &mut bool, moving: bool) -> Option<AudioEvent> {
    if *latch == moving {
        return None;
    }
    *latch = moving;
    Some(if moving {
        AudioEvent::ShipUnderway
    } else {
        AudioEvent::ShipStopped
    })
}
