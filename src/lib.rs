//! Puck Shot - aim a hockey puck and shoot it into the net
//!
//! Core modules:
//! - `sim`: Deterministic simulation (aim, launch, puck physics, collisions, game state)
//! - `game`: Gameplay core driving the simulation from a frame clock
//! - `input`: Per-tick key sampling with edge detection
//! - `view`: Read-only HUD projection onto a renderer
//! - `config`: Scene layout and tuning, validated at construction
//! - `session`: Start screen wrapping the gameplay core

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod session;
pub mod sim;
pub mod view;

pub use config::{GoalDebounce, SceneConfig, Tuning};
pub use game::GameplayCore;
pub use error::ConfigError;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the accumulator will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Puck defaults
    pub const PUCK_SIZE: f32 = 32.0;
    pub const SPAWN_X: f32 = 200.0;
    pub const SPAWN_Y: f32 = ARENA_HEIGHT - 100.0;
    /// Multiplicative velocity decay applied once per tick
    pub const PUCK_DRAG: f32 = 0.99;
    /// Below this speed the puck is considered at rest (units/sec)
    pub const REST_SPEED: f32 = 1.0;

    /// Shot defaults
    pub const SHOT_SPEED: f32 = 400.0;
    /// Heading change per tick while a turn key is held (degrees)
    pub const TURN_RATE_DEG: f32 = 2.0;
    /// Aim indicator length
    pub const AIM_LINE_LENGTH: f32 = 50.0;

    /// Goal net box (top-right corner)
    pub const GOAL_MIN_X: f32 = 860.0;
    pub const GOAL_MIN_Y: f32 = 20.0;
    pub const GOAL_WIDTH: f32 = 120.0;
    pub const GOAL_HEIGHT: f32 = 110.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 60.0;

    /// Time the goal banner stays up before the puck resets (seconds)
    pub const GOAL_COOLDOWN_SECS: f32 = 1.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector for a heading in degrees, measured from +x
#[inline]
pub fn heading_to_unit(deg: f32) -> Vec2 {
    let rad = deg_to_rad(deg);
    Vec2::new(rad.cos(), rad.sin())
}
