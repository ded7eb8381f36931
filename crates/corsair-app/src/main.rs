use std::path::PathBuf;
use std::process::ExitCode;

use corsair_app::config;
use corsair_app::session;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    init_tracing();

    // Optional config path as the only argument.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match config::load(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "Failed to load config");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        seed = config.sim.seed,
        max_ticks = config.session.max_ticks,
        realtime = config.session.realtime,
        "Starting autopilot session"
    );

    let result = if config.session.realtime {
        session::run_realtime(&config)
    } else {
        session::run_stepped(&config).map_err(|e| e.to_string())
    };

    match result {
        Ok(snapshot) => {
            let score = serde_json::to_string(&snapshot.score).unwrap_or_default();
            tracing::info!(phase = ?snapshot.phase, tick = snapshot.time.tick, %score, "Session finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "Session failed");
            ExitCode::FAILURE
        }
    }
}
