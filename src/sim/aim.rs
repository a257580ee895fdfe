//! Aim controller
//!
//! Heading accumulates in degrees, measured from +x. It is never wrapped:
//! holding a turn key long enough walks it past ±360. Shot math goes through
//! sin/cos so the raw value is fine; `display_heading` is the wrapped view.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TURN_RATE_DEG;
use crate::{heading_to_unit, normalize_degrees};

/// Turn direction for one tick of a held key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimDirection {
    /// Counterclockwise on screen (heading decreases)
    Left,
    /// Clockwise on screen (heading increases)
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AimController {
    /// Raw accumulated heading (degrees)
    heading_deg: f32,
    /// Degrees per rotate call
    turn_rate: f32,
}

impl Default for AimController {
    fn default() -> Self {
        Self::new(TURN_RATE_DEG)
    }
}

impl AimController {
    pub fn new(turn_rate: f32) -> Self {
        Self {
            heading_deg: 0.0,
            turn_rate,
        }
    }

    /// Step the heading by one tick's worth of turning
    pub fn rotate(&mut self, direction: AimDirection) {
        match direction {
            AimDirection::Left => self.heading_deg -= self.turn_rate,
            AimDirection::Right => self.heading_deg += self.turn_rate,
        }
    }

    #[inline]
    pub fn heading_degrees(&self) -> f32 {
        self.heading_deg
    }

    /// Heading wrapped to [0, 360) for HUD and logs
    pub fn display_heading(&self) -> f32 {
        normalize_degrees(self.heading_deg)
    }

    /// Unit vector the puck would travel along if shot now
    pub fn direction(&self) -> Vec2 {
        heading_to_unit(self.heading_deg)
    }

    /// Endpoints of the aim indicator starting at `origin`
    pub fn aim_line(&self, origin: Vec2, length: f32) -> (Vec2, Vec2) {
        (origin, origin + self.direction() * length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rotate_steps() {
        let mut aim = AimController::default();
        aim.rotate(AimDirection::Right);
        aim.rotate(AimDirection::Right);
        assert_eq!(aim.heading_degrees(), 4.0);
        aim.rotate(AimDirection::Left);
        assert_eq!(aim.heading_degrees(), 2.0);
    }

    #[test]
    fn test_heading_unbounded() {
        let mut aim = AimController::default();
        for _ in 0..200 {
            aim.rotate(AimDirection::Left);
        }
        assert_eq!(aim.heading_degrees(), -400.0);
        assert!((aim.display_heading() - 320.0).abs() < 1e-3);
    }

    #[test]
    fn test_aim_line_length() {
        let mut aim = AimController::default();
        for _ in 0..45 {
            aim.rotate(AimDirection::Right);
        }
        let origin = Vec2::new(200.0, 400.0);
        let (from, to) = aim.aim_line(origin, 50.0);
        assert_eq!(from, origin);
        assert!(((to - from).length() - 50.0).abs() < 1e-3);
        // 90 degrees points down the screen
        assert!((to.y - 450.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_rotation_is_exact_and_direction_is_unit(turns in prop::collection::vec(any::<bool>(), 0..500)) {
            let mut aim = AimController::default();
            let mut expected = 0.0f32;
            for right in turns {
                let before = aim.heading_degrees();
                if right {
                    aim.rotate(AimDirection::Right);
                    expected += 2.0;
                } else {
                    aim.rotate(AimDirection::Left);
                    expected -= 2.0;
                }
                // Whole multiples of 2 are exact in f32 at this range
                prop_assert_eq!((aim.heading_degrees() - before).abs(), 2.0);
                prop_assert!((aim.direction().length() - 1.0).abs() < 1e-5);
            }
            prop_assert_eq!(aim.heading_degrees(), expected);
        }
    }
}
