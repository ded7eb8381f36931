//! Control surface for a running game.
//!
//! These handlers are what a presentation layer calls. They bridge its
//! requests to the game loop thread via channels and report failures
//! as plain strings.

use corsair_core::commands::PlayerCommand;
use corsair_core::components::Intents;
use corsair_core::state::WorldSnapshot;
use corsair_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;

    if *running {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    let mut handle_lock = state.loop_handle.lock().map_err(|e| e.to_string())?;
    *handle_lock = Some(handle);
    *running = true;

    tracing::info!("Game loop started");
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Replace the movement flags the loop samples every tick.
pub fn set_intents(state: &AppState, intents: Intents) -> Result<(), String> {
    send(state, GameLoopCommand::SetIntents(intents))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<WorldSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let mut running = state.running.lock().map_err(|e| e.to_string())?;
    if !*running {
        return Err("Simulation not started".into());
    }

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A loop that already exited has dropped its receiver; nothing to stop.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    let handle = state.loop_handle.lock().map_err(|e| e.to_string())?.take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| "Game loop thread panicked".to_string())?;
    }
    *running = false;

    tracing::info!("Game loop stopped");
    Ok(())
}

fn send(state: &AppState, message: GameLoopCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(message)
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corsair_core::enums::GamePhase;
    use std::time::{Duration, Instant};

    fn wait_for(state: &AppState, pred: impl Fn(&WorldSnapshot) -> bool) -> WorldSnapshot {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(snap) = get_snapshot(state).unwrap() {
                if pred(&snap) || Instant::now() > deadline {
                    return snap;
                }
            }
            assert!(Instant::now() <= deadline, "No snapshot published");
            std::thread::sleep(game_loop::TICK_DURATION);
        }
    }

    #[test]
    fn test_commands_require_running_loop() {
        let state = AppState::new();
        assert!(send_command(&state, PlayerCommand::Pause).is_err());
        assert!(set_intents(&state, Intents::default()).is_err());
        assert!(stop_simulation(&state).is_err());
        assert_eq!(get_snapshot(&state).unwrap().map(|s| s.phase), None);
    }

    #[test]
    fn test_start_pause_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        assert!(start_simulation(&state, SimConfig::default()).is_err());

        let playing = wait_for(&state, |s| s.phase == GamePhase::Playing);
        assert_eq!(playing.phase, GamePhase::Playing);

        send_command(&state, PlayerCommand::Pause).unwrap();
        let paused = wait_for(&state, |s| s.phase == GamePhase::Paused);
        assert_eq!(paused.phase, GamePhase::Paused);

        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(send_command(&state, PlayerCommand::Resume).is_err());
    }
}
