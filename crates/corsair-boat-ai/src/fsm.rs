//! Enemy boat behavior finite state machine.
//!
//! Pure functions that compute the facing, closing step and trigger
//! decision for one boat from its situation. No ECS dependency; the
//! random draw is supplied by the caller so the outcome is reproducible.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use corsair_core::types::Position;

use crate::profiles::BoatProfile;

/// What a boat is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoatPhase {
    /// Outside the approach radius, closing on the ship.
    Pursuing,
    /// Inside the approach radius, holding and eligible to fire.
    InRange,
    /// The ship is destroyed; hold position and heading.
    Idle,
}

/// Input to the boat FSM for a single boat.
pub struct BoatContext {
    pub position: Position,
    pub heading: f64,
    pub target: Position,
    pub target_alive: bool,
    pub ammo: u32,
    pub elapsed_ticks: u64,
    /// Uniform draw in [0, 1).
    pub fire_roll: f64,
}

/// Output from the boat FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoatUpdate {
    pub phase: BoatPhase,
    pub heading: f64,
    pub position: Position,
    pub fire: bool,
}

/// Evaluate the FSM for one boat.
pub fn evaluate(ctx: &BoatContext, profile: &BoatProfile) -> BoatUpdate {
    if !ctx.target_alive {
        return BoatUpdate {
            phase: BoatPhase::Idle,
            heading: ctx.heading,
            position: ctx.position,
            fire: false,
        };
    }

    let heading = bearing_heading(&ctx.position, &ctx.target);
    let range = ctx.position.planar_distance_to(&ctx.target);

    if range >= profile.approach_radius {
        return BoatUpdate {
            phase: BoatPhase::Pursuing,
            heading,
            position: close_in(&ctx.position, &ctx.target, profile.step),
            fire: false,
        };
    }

    BoatUpdate {
        phase: BoatPhase::InRange,
        heading,
        position: ctx.position,
        fire: wants_to_fire(ctx, profile),
    }
}

/// Heading that turns a boat's hull toward the target.
///
/// Boats face the opposite convention from the ship, so their
/// cannonballs leave along -heading.
pub fn bearing_heading(from: &Position, to: &Position) -> f64 {
    let offset = from.planar_offset_to(to);
    PI - offset.y.atan2(offset.x)
}

/// Step each axis independently toward the target (not normalized).
fn close_in(from: &Position, to: &Position, step: f64) -> Position {
    let mut next = *from;
    if to.x > from.x {
        next.x += step;
    } else if to.x < from.x {
        next.x -= step;
    }
    if to.z > from.z {
        next.z += step;
    } else if to.z < from.z {
        next.z -= step;
    }
    next
}

fn wants_to_fire(ctx: &BoatContext, profile: &BoatProfile) -> bool {
    ctx.ammo > 0
        && ctx.elapsed_ticks >= profile.fire_grace_ticks
        && ctx.fire_roll < profile.fire_probability
}
