//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input sampled once per tick, never through callbacks
//! - Stable iteration order (obstacles by id)
//! - No rendering or platform dependencies

pub mod aim;
pub mod collision;
pub mod launch;
pub mod puck;
pub mod rect;
pub mod state;
pub mod tick;

pub use aim::{AimController, AimDirection};
pub use collision::{Collision, detect};
pub use launch::compute_impulse;
pub use puck::Puck;
pub use rect::Rect;
pub use state::{DeferredReset, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{TickInput, tick};
