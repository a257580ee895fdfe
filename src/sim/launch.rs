//! Launch impulse
//!
//! A shot overwrites the puck's velocity with `speed` along the heading.

use glam::Vec2;

use crate::heading_to_unit;

/// Velocity for a shot at `heading_deg` (degrees from +x) and `speed` units/sec
#[inline]
pub fn compute_impulse(heading_deg: f32, speed: f32) -> Vec2 {
    heading_to_unit(heading_deg) * speed
}
