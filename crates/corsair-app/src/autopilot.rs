//! Scripted player for headless sessions.
//!
//! Reads only the snapshot, like a real presentation layer would, and
//! answers with held intents plus discrete commands. Engages boats that
//! come close, otherwise sails for the nearest chest.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use corsair_core::commands::PlayerCommand;
use corsair_core::components::Intents;
use corsair_core::enums::{ActorId, GamePhase, ShipStatus};
use corsair_core::state::WorldSnapshot;
use corsair_core::types::Position;

/// Boats closer than this are engaged instead of looting.
const ENGAGE_RANGE: f64 = 400.0;
/// Heading error below which a broadside is worth a round.
const AIM_TOLERANCE: f64 = 0.08;
/// Heading error inside which no turn is requested.
const TURN_DEADBAND: f64 = 0.02;
/// Hold this far off an engaged boat.
const STANDOFF: f64 = 150.0;
/// Use boost beyond this range when well aligned.
const BOOST_RANGE: f64 = 600.0;
const MIN_BOOST_RESERVE: f64 = 30.0;
const FIRE_COOLDOWN_TICKS: u64 = 30;

/// What the autopilot wants this tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decision {
    pub intents: Intents,
    pub commands: Vec<PlayerCommand>,
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    last_shot_tick: Option<u64>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(&mut self, snapshot: &WorldSnapshot) -> Decision {
        let ship = &snapshot.ship;
        if snapshot.phase != GamePhase::Playing || ship.status != ShipStatus::Alive {
            return Decision::default();
        }

        let nearest_boat = snapshot
            .boats
            .iter()
            .map(|b| (b.position, ship.position.planar_distance_to(&b.position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|(_, range)| *range < ENGAGE_RANGE);

        let mut commands = Vec::new();
        if ship.ammo == 0 {
            commands.push(PlayerCommand::Reload);
        }

        let (target, range, engaging) = match nearest_boat {
            Some((pos, range)) => (pos, range, true),
            None => match nearest_chest(snapshot) {
                Some((pos, range)) => (pos, range, false),
                None => return Decision { intents: Intents::default(), commands },
            },
        };

        let error = heading_error(ship.heading, heading_to(&ship.position, &target));
        let intents = Intents {
            forward: error.abs() < FRAC_PI_2 && (!engaging || range > STANDOFF),
            backward: false,
            left: error > TURN_DEADBAND,
            right: error < -TURN_DEADBAND,
            boost: range > BOOST_RANGE && error.abs() < 0.3 && ship.boost > MIN_BOOST_RESERVE,
        };

        if engaging && error.abs() < AIM_TOLERANCE && ship.ammo > 0 && self.cooled_down(snapshot) {
            self.last_shot_tick = Some(snapshot.time.tick);
            commands.push(PlayerCommand::Fire {
                actor: ActorId::Ship,
            });
        }

        Decision { intents, commands }
    }

    fn cooled_down(&self, snapshot: &WorldSnapshot) -> bool {
        self.last_shot_tick
            .map_or(true, |t| snapshot.time.tick.saturating_sub(t) >= FIRE_COOLDOWN_TICKS)
    }
}

fn nearest_chest(snapshot: &WorldSnapshot) -> Option<(Position, f64)> {
    snapshot
        .chests
        .iter()
        .map(|c| (c.position, snapshot.ship.position.planar_distance_to(&c.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Ship heading whose bow points from `from` at `to`.
pub fn heading_to(from: &Position, to: &Position) -> f64 {
    let offset = from.planar_offset_to(to);
    (-offset.y).atan2(offset.x)
}

/// Signed turn from `current` to `desired`, wrapped to [-π, π).
pub fn heading_error(current: f64, desired: f64) -> f64 {
    (desired - current + PI).rem_euclid(TAU) - PI
}
