//! Handles held by the control surface while a game loop thread runs.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use corsair_core::commands::PlayerCommand;
use corsair_core::components::Intents;
use corsair_core::state::WorldSnapshot;

/// Inbox of the game loop thread, drained once per tick.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Queued on the engine and applied at the next tick boundary.
    PlayerCommand(PlayerCommand),
    /// Movement flags to hold until the next `SetIntents`.
    SetIntents(Intents),
    /// Stop ticking and let the thread return.
    Shutdown,
}

/// One game loop's worth of handles. Every field sits behind a lock so a
/// single `AppState` can be shared by reference between callers.
pub struct AppState {
    /// Inbox sender, present from `start_simulation` until `stop_simulation`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Last published frame. The loop thread holds the other `Arc`.
    pub latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
    /// Joined by `stop_simulation` after `Shutdown` is sent.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
