//! Simulation constants and tuning parameters.
//!
//! Distances are device units, times are ticks (one tick per frame).

use crate::draw::Rgb;

// --- Frame pacing ---

/// Target frame rate the reference host paces at (Hz).
pub const FRAME_RATE: u32 = 100;

// --- World defaults ---

/// Default play-area width.
pub const DEFAULT_WIDTH: f64 = 3440.0;

/// Default play-area height.
pub const DEFAULT_HEIGHT: f64 = 1440.0;

/// Stars present at startup.
pub const DEFAULT_INITIAL_STARS: usize = 1;

/// Ships present at startup; the population is conserved from then on.
pub const DEFAULT_INITIAL_SHIPS: usize = 3;

// --- Stars ---

/// Per-tick star drift.
pub const STAR_VELOCITY: (f64, f64) = (4.0, 2.0);

/// A new star spawns when a uniform roll in [0, 100] exceeds this.
pub const STAR_SPAWN_THRESHOLD: u32 = 70;

// --- Ships ---

pub const SHIP_RADIUS: f64 = 20.0;

/// Ship velocity components are resampled uniformly from [-MAX, MAX].
pub const SHIP_MAX_STEP: i32 = 5;

/// Percentage chance per tick that a ship picks a new heading.
pub const DIRECTION_CHANGE_CHANCE: u32 = 5;

/// Percentage chance per tick that a ship fires at a random target.
pub const FIRE_CHANCE: u32 = 2;

/// Random draws made before target selection gives up.
pub const TARGET_SAMPLE_ATTEMPTS: usize = 5;

pub const PLAYER_RADIUS: f64 = 5.0;

/// Gap between the hull radius and the freeze status ring.
pub const FREEZE_RING_GAP: f64 = 6.0;

// --- Weapon range bands (upper bounds, exclusive) ---

pub const LASER_MAX_RANGE: f64 = 500.0;
pub const FREEZE_RAY_MAX_RANGE: f64 = 650.0;
pub const MACHINE_GUN_MAX_RANGE: f64 = 1000.0;
pub const GLIDE_BOMB_MAX_RANGE: f64 = 2000.0;

// --- Beams ---

pub const BEAM_WIDTH: f64 = 2.0;

/// Ticks of freeze applied by the freezing ray.
pub const FREEZE_RAY_TICKS: u32 = 200;

// --- Machine gun ---

pub const MACHINE_GUN_ROUNDS: usize = 8;

/// Distance is divided by this to get the per-tick velocity.
pub const MACHINE_GUN_SPEED_DIVISOR: f64 = 500.0;

pub const GENERIC_ROUND_RADIUS: f64 = 1.0;

// --- Glide bombs ---

pub const GLIDE_BOMB_COUNT: usize = 3;
pub const GLIDE_BOMB_SPEED_DIVISOR: f64 = 100.0;

/// Bombs aim this far above the target and fall onto it.
pub const GLIDE_BOMB_AIM_HEIGHT: f64 = 500.0;

pub const GLIDE_BOMB_GRAVITY: f64 = 0.1;
pub const GLIDE_BOMB_RADIUS: f64 = 5.0;

/// A smoke puff is emitted every N ticks of flight.
pub const GLIDE_BOMB_SMOKE_INTERVAL: u32 = 3;

/// Puffs appear this many radii behind the bomb.
pub const GLIDE_BOMB_SMOKE_OFFSET: f64 = 1.5;

pub const GLIDE_BOMB_SMOKE_STRENGTH: f64 = 0.6;

// --- Torpedoes ---

pub const TORPEDO_COUNT: usize = 2;
pub const TORPEDO_SPEED_DIVISOR: f64 = 1500.0;

/// Acceleration is launch velocity divided by this.
pub const TORPEDO_ACCEL_DIVISOR: f64 = 10.0;

pub const TORPEDO_RADIUS: f64 = 4.0;

/// Recoil impulse on the launcher, as a multiple of launch velocity.
pub const TORPEDO_RECOIL: f64 = 2.0;

pub const EXHAUST_STRENGTH: f64 = 1.0;

// --- Exhaust ---

pub const EXHAUST_PARTICLES: (u32, u32) = (8, 12);
pub const EXHAUST_SPEED: (f64, f64) = (1.5, 4.0);
pub const EXHAUST_JITTER: f64 = 0.6;
pub const EXHAUST_LIFE: (u32, u32) = (12, 24);
pub const EXHAUST_RADIUS: (u32, u32) = (2, 3);
pub const EXHAUST_SHRINK: f64 = 0.1;
pub const EXHAUST_MIN_RADIUS: f64 = 1.0;

// --- Trail smoke ---

pub const TRAIL_PARTICLES: (u32, u32) = (2, 4);
pub const TRAIL_SPEED: (f64, f64) = (0.6, 1.4);
pub const TRAIL_JITTER: f64 = 0.4;
pub const TRAIL_LIFE: (u32, u32) = (10, 18);
pub const TRAIL_RADIUS: (f64, f64) = (1.0, 2.4);
pub const TRAIL_GROWTH: f64 = 0.05;
pub const TRAIL_MAX_RADIUS: f64 = 4.0;
pub const TRAIL_DRAG: f64 = 0.98;

// --- Death burst ---

pub const FLASH_TICKS: u32 = 6;
pub const FLASH_START_RADIUS: f64 = 10.0;
pub const FLASH_GROWTH: f64 = 1.2;

pub const RING_START_RADIUS: f64 = 6.0;
pub const RING_STEP: f64 = 6.0;
pub const RING_START_WIDTH: f64 = 2.0;
pub const RING_THINNING: f64 = 0.05;
pub const RING_MAX_RADIUS: (u32, u32) = (120, 200);

pub const SPARK_COUNT: (u32, u32) = (28, 42);
pub const SPARK_SPEED: (f64, f64) = (2.5, 6.0);
pub const SPARK_LIFE: (u32, u32) = (18, 34);
pub const SPARK_RADIUS: (f64, f64) = (1.0, 2.5);
pub const SPARK_SHRINK: f64 = 0.04;
pub const SPARK_MIN_RADIUS: f64 = 0.5;
pub const SPARK_DRAG: f64 = 0.98;

/// Outward push along the radial direction, keeps the burst expanding.
pub const SPARK_OUTWARD_PUSH: f64 = 0.02;

pub const SMOKE_COUNT: (u32, u32) = (8, 14);
pub const SMOKE_SPEED: (f64, f64) = (0.4, 1.4);
pub const SMOKE_LIFE: (u32, u32) = (28, 48);
pub const SMOKE_RADIUS: (f64, f64) = (2.0, 4.0);
pub const SMOKE_GROWTH: f64 = 0.08;
pub const SMOKE_MAX_RADIUS: f64 = 12.0;
pub const SMOKE_RISE: f64 = 0.01;
pub const SMOKE_DRAG: f64 = 0.99;

// --- Colors without a name ---

/// Freezing ray beam and the frozen-ship status ring.
pub const FREEZE_COLOR: Rgb = Rgb::new(150, 220, 255);

pub const TRAIL_SMOKE_COLOR: Rgb = Rgb::new(170, 170, 170);
pub const DEATH_SMOKE_COLOR: Rgb = Rgb::new(150, 150, 150);

pub const BOMB_BODY_COLOR: Rgb = Rgb::new(80, 80, 80);
pub const BOMB_OUTLINE_COLOR: Rgb = Rgb::new(230, 230, 230);
