use std::{env, fs, path::Path};

use serde::Deserialize;

use corsair_core::constants::TICK_RATE;
use corsair_sim::engine::SimConfig;

// Runtime settings for the binary (not gameplay tuning).

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "corsair.toml";

/// Everything the `corsair` binary reads at startup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sim: SimConfig,
    pub session: SessionConfig,
}

/// How long and how fast the autopilot session runs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Stop after this many ticks even if the game is still going.
    pub max_ticks: u64,
    /// Log the HUD every this many ticks.
    pub hud_interval_ticks: u64,
    /// Pace the game loop thread at the tick rate; otherwise step as fast as possible.
    pub realtime: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_ticks: 5 * 60 * TICK_RATE as u64,
            hud_interval_ticks: 5 * TICK_RATE as u64,
            realtime: false,
        }
    }
}

/// Parse a TOML document. Missing keys take their defaults.
pub fn parse(text: &str) -> Result<AppConfig, String> {
    toml::from_str(text).map_err(|e| format!("invalid config: {e}"))
}

/// Load the config from `path`, or from `corsair.toml` when present,
/// then apply environment overrides.
pub fn load(path: Option<&Path>) -> Result<AppConfig, String> {
    let mut config = match path {
        Some(path) => read(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => read(Path::new(DEFAULT_CONFIG_PATH))?,
        None => AppConfig::default(),
    };
    apply_overrides(&mut config, |key| env::var(key).ok());
    Ok(config)
}

fn read(path: &Path) -> Result<AppConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse(&text)
}

/// `CORSAIR_SEED` and `CORSAIR_TICKS` win over the file. Unparsable
/// values are ignored.
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(seed) = lookup("CORSAIR_SEED").and_then(|v| v.parse().ok()) {
        config.sim.seed = seed;
    }
    if let Some(ticks) = lookup("CORSAIR_TICKS").and_then(|v| v.parse().ok()) {
        config.session.max_ticks = ticks;
    }
}
