//! Running tallies owned by the engine.

/// Counters that drive the win condition and the HUD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub chests_looted: u32,
    pub chests_total: u32,
    pub boats_destroyed: u32,
    pub boats_total: u32,
    pub cannonballs_fired: u32,
}

impl ScoreState {
    pub fn new(boats_total: u32, chests_total: u32) -> Self {
        Self {
            boats_total,
            chests_total,
            ..Self::default()
        }
    }

    pub fn all_boats_destroyed(&self) -> bool {
        self.boats_total > 0 && self.boats_destroyed == self.boats_total
    }

    pub fn all_chests_looted(&self) -> bool {
        self.chests_total > 0 && self.chests_looted == self.chests_total
    }
}
