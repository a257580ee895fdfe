//! Puck body
//!
//! Simple arcade integration: per-tick multiplicative drag, explicit Euler
//! position update, no bounce off walls or obstacles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::REST_SPEED;

/// The player-controlled puck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puck {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half-extents of the bounding box
    pub half_size: Vec2,
    /// Velocity multiplier applied once per tick (0 < drag <= 1)
    pub drag: f32,
}

impl Puck {
    pub fn new(pos: Vec2, half_size: Vec2, drag: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_size,
            drag,
        }
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Rect {
        Rect::from_center_half(self.pos, self.half_size)
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Advance one fixed tick: decay velocity, then move
    pub fn integrate(&mut self, dt: f32) {
        if !self.is_moving() {
            return;
        }

        self.vel *= self.drag;
        if self.vel.length() < REST_SPEED {
            self.vel = Vec2::ZERO;
        }
        self.pos += self.vel * dt;
    }

    /// Keep the box inside `arena`.
    ///
    /// Returns true when the box crossed an edge this tick. The box is moved
    /// flush with the edge and the whole velocity (not just the normal
    /// component) is dropped.
    pub fn clamp_to_bounds(&mut self, arena: &Rect) -> bool {
        let legal = arena.inset(self.half_size);
        let clamped = self.pos.clamp(legal.min, legal.max);
        if clamped == self.pos {
            return false;
        }

        self.pos = clamped;
        self.vel = Vec2::ZERO;
        true
    }

    /// Overwrite velocity (shot trigger or full stop)
    pub fn apply_impulse(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    /// Teleport to `spawn` at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
    }
}
