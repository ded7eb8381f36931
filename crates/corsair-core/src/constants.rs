//! Simulation constants and tuning parameters.
//!
//! All speeds are expressed per tick: the simulation advances exactly once
//! per rendered frame.

use crate::collision::Tolerance;

/// Simulation tick rate (Hz), matching the presentation frame clock.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Half-width of the square spawn area around the origin.
pub const ARENA_HALF_EXTENT: f64 = 2_000.0;

/// Minimum planar distance between a spawned boat/chest and the ship spawn.
pub const SPAWN_EXCLUSION_RADIUS: f64 = 200.0;

/// Default number of enemy boats.
pub const DEFAULT_BOAT_COUNT: u32 = 5;

/// Default number of chests (and rewards, one per chest).
pub const DEFAULT_CHEST_COUNT: u32 = 30;

// --- Hulls ---

/// Full health for every hull.
pub const MAX_HEALTH: u32 = 100;

/// Damage dealt by one cannonball impact.
pub const HIT_DAMAGE: u32 = 20;

// --- Player ship ---

/// Linear speed (units per tick).
pub const SHIP_SPEED: f64 = 1.5;

/// Turn rate (radians per tick).
pub const SHIP_TURN_RATE: f64 = 0.025;

/// Spawn heading (radians): bow pointing down -z.
pub const SHIP_SPAWN_HEADING: f64 = std::f64::consts::FRAC_PI_2;

/// Cannonballs carried at full load.
pub const SHIP_MAX_AMMO: u32 = DEFAULT_BOAT_COUNT * 10;

/// Speed and turn-rate multiplier while boosting.
pub const BOOST_FACTOR: f64 = 2.0;

/// Boost resource ceiling.
pub const BOOST_MAX: f64 = 100.0;

/// Base boost drain per tick, scaled by `BOOST_FACTOR` while boosting.
pub const BOOST_DRAIN_PER_TICK: f64 = 0.5;

/// Boost regeneration per idle tick.
pub const BOOST_REGEN_PER_TICK: f64 = 0.1;

// --- Enemy boats ---

/// Per-axis closing step toward the ship (units per tick).
pub const BOAT_STEP: f64 = 0.5;

/// Boats stop closing (and may fire) inside this planar radius.
pub const BOAT_APPROACH_RADIUS: f64 = 100.0;

/// Per-tick chance that an in-range boat opens fire.
pub const BOAT_FIRE_PROBABILITY: f64 = 0.0025;

/// Boats hold fire until this many ticks of play have elapsed.
pub const BOAT_FIRE_GRACE_TICKS: u64 = 5 * TICK_RATE as u64;

/// Cannonballs carried by each boat (never replenished).
pub const BOAT_AMMO: u32 = 10;

// --- Projectiles ---

/// Cannonball speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 4.0;

/// Cannonballs are retired after travelling this far.
pub const PROJECTILE_MAX_RANGE: f64 = 1_000.0;

/// Launch height of a cannonball above the water plane.
pub const PROJECTILE_LAUNCH_HEIGHT: f64 = 20.0;

// --- Loot ---

/// Chest (and reward) spin per tick (radians).
pub const CHEST_SPIN_PER_TICK: f64 = 0.05;

/// Reward resting height above its chest.
pub const REWARD_REST_OFFSET: f64 = 100.0;

/// Reward height above its chest at which it counts as collected.
pub const REWARD_COLLECT_OFFSET: f64 = 30.0;

/// Reward vertical speed (units per tick), both directions.
pub const REWARD_STEP: f64 = 0.5;

// --- Collision footprints ---

/// Ship hull vs chest: the hull is longer than it is wide.
pub const SHIP_CHEST_TOLERANCE: Tolerance = Tolerance::new(50.0, 25.0);

/// Cannonball vs any hull.
pub const CANNONBALL_HULL_TOLERANCE: Tolerance = Tolerance::new(50.0, 50.0);

/// Boat vs boat (diagnostic only).
pub const BOAT_BOAT_TOLERANCE: Tolerance = Tolerance::new(50.0, 50.0);

// --- Game flow ---

/// Ticks between reaching Won/Lost and showing the end screen.
pub const END_SCREEN_DELAY_TICKS: u32 = 3 * TICK_RATE;
