//! On-screen text derived from a snapshot.
//!
//! The presentation layer only has to draw these strings.

use crate::constants::TICK_RATE;
use crate::state::WorldSnapshot;

/// Heads-up display lines, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLines {
    pub chests: String,
    pub boats: String,
    pub time: String,
    pub health: String,
    pub ammo: String,
    pub boost: String,
    pub position: String,
    pub rotation: String,
}

impl HudLines {
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Self {
        let ship = &snapshot.ship;
        let score = &snapshot.score;
        Self {
            chests: format!(
                "Chests Looted: {} / {}",
                score.chests_looted, score.chests_total
            ),
            boats: format!(
                "Boats Destroyed: {} / {}",
                score.boats_destroyed, score.boats_total
            ),
            time: format!("Time: {}", format_clock(snapshot.time.tick)),
            health: format!("Health: {}", ship.health),
            ammo: format!("Ammo: {}", ship.ammo),
            boost: format!("Boost: {:.0}", ship.boost),
            position: format!(
                "Ship Position: {:.1} {:.1} {:.1}",
                ship.position.x, ship.position.y, ship.position.z
            ),
            rotation: format!("Ship Rotation: {:.1}°", heading_degrees(ship.heading)),
        }
    }

    /// All lines joined with the classic separator.
    pub fn joined(&self) -> String {
        [
            self.chests.as_str(),
            self.boats.as_str(),
            self.time.as_str(),
            self.health.as_str(),
            self.ammo.as_str(),
            self.boost.as_str(),
            self.position.as_str(),
            self.rotation.as_str(),
        ]
        .join("  ---  ")
    }
}

/// `MM:SS` from a tick count.
pub fn format_clock(ticks: u64) -> String {
    let secs = ticks / TICK_RATE as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Heading magnitude in degrees, wrapped to [0, 360).
pub fn heading_degrees(heading: f64) -> f64 {
    heading.to_degrees().abs() % 360.0
}
