//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`. Renderers and input
//! adapters only ever see it through a shared reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aim::AimController;
use super::puck::Puck;
use super::rect::Rect;
use crate::config::{GoalDebounce, SceneConfig, Tuning};
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Puck idle or in flight, aim and shot input live
    Aiming,
    /// Goal banner up, waiting for the puck reset
    GoalCooldown,
}

/// A static block the puck stops dead against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub bounds: Rect,
}

/// Puck reset scheduled against simulation time.
///
/// Counted in ticks so expiry never depends on float accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredReset {
    pub remaining_ticks: u32,
}

impl DeferredReset {
    /// Schedule a reset `secs` from now at a tick length of `dt`
    pub fn after(secs: f32, dt: f32) -> Self {
        let ticks = (secs / dt).round().max(1.0) as u32;
        Self {
            remaining_ticks: ticks,
        }
    }

    /// Count down one tick. Returns true once the timer has run out.
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

/// Things that happened during a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Shot trigger accepted; `shot` is the new shot count
    ShotFired { shot: u32, velocity: Vec2 },
    /// Puck stopped against an obstacle
    ObstacleHit { id: u32 },
    /// Puck stopped against an arena wall
    BoundsHit,
    /// Puck overlapped the goal net
    GoalScored { goals: u32 },
    /// Cooldown expired, puck back at the spawn point
    PuckReset,
    /// Session state thrown away and rebuilt
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena rectangle the puck is confined to
    pub arena: Rect,
    /// Puck spawn point
    pub spawn: Vec2,
    pub goal: Rect,
    /// Static obstacles (sorted by id, never mutated)
    pub obstacles: Vec<Obstacle>,
    pub puck: Puck,
    pub aim: AimController,
    pub tuning: Tuning,
    pub goal_debounce: GoalDebounce,
    /// Shots taken this session (never decreases)
    pub shots: u32,
    /// Goals scored this session
    pub goals: u32,
    pub phase: GamePhase,
    /// Pending puck reset (present only in GoalCooldown)
    pub pending_reset: Option<DeferredReset>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh session from `config`, validating it first
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Build from a config that already passed `validate`
    pub(crate) fn from_validated(config: &SceneConfig) -> Self {
        let obstacles = config
            .obstacles
            .iter()
            .enumerate()
            .map(|(i, &bounds)| Obstacle {
                id: i as u32 + 1,
                bounds,
            })
            .collect();

        Self {
            arena: config.arena(),
            spawn: config.spawn,
            goal: config.goal,
            obstacles,
            puck: Puck::new(config.spawn, config.puck_size / 2.0, config.tuning.drag),
            aim: AimController::new(config.tuning.turn_rate_deg),
            tuning: config.tuning.clone(),
            goal_debounce: config.goal_debounce,
            shots: 0,
            goals: 0,
            phase: GamePhase::Aiming,
            pending_reset: None,
            time_ticks: 0,
        }
    }

    /// Goal banner is up for the whole cooldown
    pub fn goal_banner_visible(&self) -> bool {
        self.phase == GamePhase::GoalCooldown
    }

    /// Drop a scheduled reset without running it
    pub fn cancel_pending_reset(&mut self) -> bool {
        self.pending_reset.take().is_some()
    }

    /// Aim indicator endpoints, anchored on the puck
    pub fn aim_line(&self) -> (Vec2, Vec2) {
        self.aim.aim_line(self.puck.pos, self.tuning.aim_line_length)
    }
}
