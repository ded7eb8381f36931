//! Axis-aligned proximity test shared by every collision sweep.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Half-extents of a rectangular footprint on the x/z plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    pub dx: f64,
    pub dz: f64,
}

impl Tolerance {
    pub const fn new(dx: f64, dz: f64) -> Self {
        Self { dx, dz }
    }
}

/// True iff both planar axis offsets are strictly inside the tolerance window.
/// Height is ignored.
pub fn is_colliding(a: &Position, b: &Position, tolerance: Tolerance) -> bool {
    (a.x - b.x).abs() < tolerance.dx && (a.z - b.z).abs() < tolerance.dz
}
