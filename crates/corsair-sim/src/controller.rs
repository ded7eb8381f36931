//! Game state controller: the finite state machine that decides whether
//! the world loop advances.
//!
//! ```text
//! Loading --start--> Playing <--pause/resume--> Paused
//! Playing --quit--> Over
//! Playing --condition--> Won | Lost
//! ```
//!
//! Over, Won and Lost are terminal. Entering one detaches input.

use corsair_core::constants::END_SCREEN_DELAY_TICKS;
use corsair_core::enums::GamePhase;

#[derive(Debug, Clone)]
pub struct GameController {
    phase: GamePhase,
    input_attached: bool,
    end_screen_in: Option<u32>,
    muted: bool,
}

impl Default for GameController {
    fn default() -> Self {
        Self {
            phase: GamePhase::Loading,
            input_attached: true,
            end_screen_in: None,
            muted: false,
        }
    }
}

impl GameController {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the world loop should run this tick.
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn input_attached(&self) -> bool {
        self.input_attached
    }

    pub fn end_screen_in(&self) -> Option<u32> {
        self.end_screen_in
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Loading -> Playing. Returns whether the transition happened.
    pub fn start(&mut self) -> bool {
        self.transition(GamePhase::Loading, GamePhase::Playing)
    }

    pub fn pause(&mut self) -> bool {
        self.transition(GamePhase::Playing, GamePhase::Paused)
    }

    pub fn resume(&mut self) -> bool {
        self.transition(GamePhase::Paused, GamePhase::Playing)
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => false,
        }
    }

    /// Playing -> Over.
    pub fn quit(&mut self) -> bool {
        if !self.transition(GamePhase::Playing, GamePhase::Over) {
            return false;
        }
        self.input_attached = false;
        true
    }

    /// Playing -> Won/Lost, starting the end-screen countdown.
    pub fn conclude(&mut self, outcome: GamePhase) -> bool {
        if !matches!(outcome, GamePhase::Won | GamePhase::Lost) {
            return false;
        }
        if !self.transition(GamePhase::Playing, outcome) {
            return false;
        }
        self.input_attached = false;
        self.end_screen_in = Some(END_SCREEN_DELAY_TICKS);
        true
    }

    /// Count down the end-screen delay. Called once per tick in any phase.
    pub fn tick_end_screen(&mut self) {
        if let Some(remaining) = self.end_screen_in.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    fn transition(&mut self, from: GamePhase, to: GamePhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameController {
        let mut controller = GameController::default();
        assert!(controller.start());
        controller
    }

    #[test]
    fn test_starts_in_loading() {
        let controller = GameController::default();
        assert_eq!(controller.phase(), GamePhase::Loading);
        assert!(!controller.is_running());
    }

    #[test]
    fn test_start_only_from_loading() {
        let mut controller = playing();
        assert!(!controller.start());
        assert_eq!(controller.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_pause_toggle() {
        let mut controller = playing();
        assert!(controller.toggle_pause());
        assert_eq!(controller.phase(), GamePhase::Paused);
        assert!(!controller.pause(), "Already paused");
        assert!(controller.toggle_pause());
        assert_eq!(controller.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_cannot_pause_while_loading() {
        let mut controller = GameController::default();
        assert!(!controller.pause());
        assert!(!controller.toggle_pause());
        assert_eq!(controller.phase(), GamePhase::Loading);
    }

    #[test]
    fn test_quit_is_terminal_and_detaches_input() {
        let mut controller = playing();
        assert!(controller.quit());
        assert_eq!(controller.phase(), GamePhase::Over);
        assert!(!controller.input_attached());
        assert!(!controller.resume());
        assert!(!controller.conclude(GamePhase::Won));
        assert_eq!(controller.phase(), GamePhase::Over);
    }

    #[test]
    fn test_cannot_quit_while_paused() {
        let mut controller = playing();
        controller.pause();
        assert!(!controller.quit());
        assert_eq!(controller.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_conclude_is_sticky() {
        let mut controller = playing();
        assert!(controller.conclude(GamePhase::Won));
        assert!(!controller.conclude(GamePhase::Lost));
        assert!(!controller.toggle_pause());
        assert_eq!(controller.phase(), GamePhase::Won);
    }

    #[test]
    fn test_conclude_rejects_non_outcomes() {
        let mut controller = playing();
        assert!(!controller.conclude(GamePhase::Paused));
        assert_eq!(controller.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_end_screen_countdown() {
        let mut controller = playing();
        controller.conclude(GamePhase::Lost);
        assert_eq!(controller.end_screen_in(), Some(END_SCREEN_DELAY_TICKS));
        for _ in 0..END_SCREEN_DELAY_TICKS + 5 {
            controller.tick_end_screen();
        }
        assert_eq!(controller.end_screen_in(), Some(0));
    }
}
