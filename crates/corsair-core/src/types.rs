//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 3D position in world units.
/// y is the vertical axis (water plane at 0); x/z form the play-field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the x/z play-field.
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }

    /// Planar offset from `self` to `other` as (dx, dz).
    pub fn planar_offset_to(&self, other: &Position) -> DVec2 {
        other.planar() - self.planar()
    }

    /// Planar (x/z) distance to another position.
    pub fn planar_distance_to(&self, other: &Position) -> f64 {
        self.planar().distance(other.planar())
    }

    /// Move `distance` units along `heading` in the local +X direction.
    ///
    /// Heading is a rotation about the vertical axis, so heading 0 points
    /// down +x and heading π/2 points down -z.
    pub fn translate_along(&mut self, heading: f64, distance: f64) {
        let step = heading_direction(heading) * distance;
        self.x += step.x;
        self.z += step.y;
    }
}

/// Unit vector on the x/z plane for a heading (y component holds z).
pub fn heading_direction(heading: f64) -> DVec2 {
    DVec2::new(heading.cos(), -heading.sin())
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
