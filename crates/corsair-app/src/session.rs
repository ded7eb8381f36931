//! Autopilot sessions: one game played start to finish by the autopilot.
//!
//! `run_stepped` drives the engine directly on the calling thread, one
//! decision per tick, so a seed always replays the same game.
//! `run_realtime` plays through the game loop thread and control surface
//! at wall-clock pace, as an interactive frontend would.

use std::time::Instant;

use corsair_core::components::Intents;
use corsair_core::enums::GamePhase;
use corsair_core::hud::HudLines;
use corsair_core::state::WorldSnapshot;
use corsair_sim::engine::SimulationEngine;
use corsair_sim::SimError;

use crate::autopilot::Autopilot;
use crate::config::AppConfig;
use crate::control;
use crate::game_loop::TICK_DURATION;
use crate::state::AppState;

/// Whether the session has nothing left to show.
pub fn is_finished(snapshot: &WorldSnapshot) -> bool {
    match snapshot.phase {
        GamePhase::Over => true,
        GamePhase::Won | GamePhase::Lost => snapshot.end_screen_in_ticks.unwrap_or(0) == 0,
        _ => false,
    }
}

/// Log the on-screen text for one snapshot.
pub fn log_hud(snapshot: &WorldSnapshot) {
    let hud = HudLines::from_snapshot(snapshot);
    tracing::info!(phase = ?snapshot.phase, "{}", hud.joined());
}

/// Play a full game on this thread without pacing.
pub fn run_stepped(config: &AppConfig) -> Result<WorldSnapshot, SimError> {
    let mut engine = SimulationEngine::new(config.sim.clone()).with_default_templates();
    engine.start()?;

    let mut autopilot = Autopilot::new();
    let mut intents = Intents::default();
    let mut snapshot = engine.tick(intents);

    for _ in 1..config.session.max_ticks {
        if is_finished(&snapshot) {
            break;
        }
        if should_log(config, &snapshot) {
            log_hud(&snapshot);
        }
        let decision = autopilot.decide(&snapshot);
        intents = decision.intents;
        engine.queue_commands(decision.commands);
        snapshot = engine.tick(intents);
    }

    log_hud(&snapshot);
    Ok(snapshot)
}

/// Play a full game through the game loop thread at the tick rate.
pub fn run_realtime(config: &AppConfig) -> Result<WorldSnapshot, String> {
    let state = AppState::new();
    control::start_simulation(&state, config.sim.clone())?;

    let mut autopilot = Autopilot::new();
    let mut last_tick = None;
    let mut latest = WorldSnapshot::default();
    let started = Instant::now();

    loop {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = control::get_snapshot(&state)? else {
            // The loop thread has not produced its first tick yet.
            if started.elapsed() > TICK_DURATION * 600 {
                break;
            }
            continue;
        };
        if last_tick == Some(snapshot.time.tick) && snapshot.phase == GamePhase::Playing {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        if should_log(config, &snapshot) {
            log_hud(&snapshot);
        }
        let finished = is_finished(&snapshot) || snapshot.time.tick >= config.session.max_ticks;
        if finished {
            latest = snapshot;
            break;
        }

        let decision = autopilot.decide(&snapshot);
        control::set_intents(&state, decision.intents)?;
        for command in decision.commands {
            control::send_command(&state, command)?;
        }
        latest = snapshot;
    }

    control::stop_simulation(&state)?;
    log_hud(&latest);
    Ok(latest)
}

fn should_log(config: &AppConfig, snapshot: &WorldSnapshot) -> bool {
    let interval = config.session.hud_interval_ticks;
    interval > 0 && snapshot.time.tick > 0 && snapshot.time.tick % interval == 0
}
