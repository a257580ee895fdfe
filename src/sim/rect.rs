//! Axis-aligned bounding boxes
//!
//! Every collider in the game (puck, obstacles, goal net, arena) is a `Rect`
//! stored as min/max corners in world space. +y points down the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle from its top-left corner and size
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self { min, max: min + size }
    }

    /// Rectangle centered on `center` extending `half` in each direction
    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True when both extents are finite and strictly positive
    pub fn is_well_formed(&self) -> bool {
        let size = self.size();
        self.min.is_finite() && self.max.is_finite() && size.x > 0.0 && size.y > 0.0
    }

    /// Strict overlap test. Rectangles that only share an edge do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// True if `other` lies entirely inside (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }

    /// Shrink by `inset` on every side (used to get the legal range of a box center)
    pub fn inset(&self, inset: Vec2) -> Rect {
        Rect {
            min: self.min + inset,
            max: self.max - inset,
        }
    }
}
