//! Terminal condition check, run last in every playing tick.

use hecs::World;

use corsair_core::enums::GamePhase;

use super::ship_state;
use crate::score::ScoreState;

/// Won or Lost if the game just ended, `None` otherwise.
///
/// A sunk ship loses even if the same tick also cleared the last boat.
pub fn evaluate(world: &World, score: &ScoreState) -> Option<GamePhase> {
    if matches!(ship_state(world), Some((_, false))) {
        return Some(GamePhase::Lost);
    }
    if score.all_boats_destroyed() || score.all_chests_looted() {
        return Some(GamePhase::Won);
    }
    None
}
