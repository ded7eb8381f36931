//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands and held intents arrive via an `mpsc` channel. Snapshots are
//! stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use corsair_core::commands::PlayerCommand;
use corsair_core::components::Intents;
use corsair_core::constants::TICK_RATE;
use corsair_core::state::WorldSnapshot;
use corsair_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread. The game starts on its first tick.
///
/// Returns the command sender for the control surface and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("corsair-game-loop".into())
        .spawn(move || {
            let mut engine = SimulationEngine::new(config).with_default_templates();
            engine.queue_command(PlayerCommand::StartGame);
            run_game_loop(&mut engine, cmd_rx, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    engine: &mut SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
) {
    let mut intents = Intents::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(engine, &cmd_rx, &mut intents) {
            tracing::debug!(tick = engine.time().tick, "Game loop stopping");
            return;
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(intents);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Apply every pending message. Returns false once the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    intents: &mut Intents,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::SetIntents(held)) => *intents = held,
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
