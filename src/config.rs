//! Scene layout and gameplay tuning
//!
//! One `SceneConfig` describes a whole rink: arena size, spawn point, goal
//! net, obstacles and tuning. The minimal and obstacle-course variants are
//! just different presets. Configs can also be read from JSON, where any
//! missing key falls back to the default.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::rect::Rect;

/// How repeated goal overlaps are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GoalDebounce {
    /// Goal cooldown freezes the puck and ignores everything until the reset
    #[default]
    Gated,
    /// Every overlapping tick re-scores and restarts the reset timer; the puck
    /// keeps moving and input stays live. A puck that stops inside the net
    /// never resets.
    Legacy,
}

impl GoalDebounce {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDebounce::Gated => "Gated",
            GoalDebounce::Legacy => "Legacy",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gated" => Some(GoalDebounce::Gated),
            "legacy" => Some(GoalDebounce::Legacy),
            _ => None,
        }
    }
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Launch speed (units/sec)
    pub shot_speed: f32,
    /// Heading change per tick while a turn key is held (degrees)
    pub turn_rate_deg: f32,
    /// Per-tick velocity multiplier
    pub drag: f32,
    /// Goal banner duration before the puck resets (seconds)
    pub goal_cooldown_secs: f32,
    /// Aim indicator length
    pub aim_line_length: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            shot_speed: SHOT_SPEED,
            turn_rate_deg: TURN_RATE_DEG,
            drag: PUCK_DRAG,
            goal_cooldown_secs: GOAL_COOLDOWN_SECS,
            aim_line_length: AIM_LINE_LENGTH,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return Err(ConfigError::BadDrag(self.drag));
        }
        let positive = [
            ("shot_speed", self.shot_speed),
            ("turn_rate_deg", self.turn_rate_deg),
            ("goal_cooldown_secs", self.goal_cooldown_secs),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::BadTuning { name, value });
            }
        }
        if !(self.aim_line_length.is_finite() && self.aim_line_length >= 0.0) {
            return Err(ConfigError::BadTuning {
                name: "aim_line_length",
                value: self.aim_line_length,
            });
        }
        Ok(())
    }
}

/// Full scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Arena size; the arena spans (0, 0) to this corner
    pub arena_size: Vec2,
    /// Puck center at scene start and after every goal
    pub spawn: Vec2,
    /// Puck bounding box size
    pub puck_size: Vec2,
    /// Goal net box
    pub goal: Rect,
    /// Static obstacle boxes, in collision-check order
    pub obstacles: Vec<Rect>,
    pub tuning: Tuning,
    pub goal_debounce: GoalDebounce,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::minimal()
    }
}

impl SceneConfig {
    /// Empty rink: puck, net, nothing in between
    pub fn minimal() -> Self {
        Self {
            arena_size: Vec2::new(ARENA_WIDTH, ARENA_HEIGHT),
            spawn: Vec2::new(SPAWN_X, SPAWN_Y),
            puck_size: Vec2::splat(PUCK_SIZE),
            goal: Rect::from_min_size(
                Vec2::new(GOAL_MIN_X, GOAL_MIN_Y),
                Vec2::new(GOAL_WIDTH, GOAL_HEIGHT),
            ),
            obstacles: Vec::new(),
            tuning: Tuning::default(),
            goal_debounce: GoalDebounce::default(),
        }
    }

    /// Obstacle course: five blocks between the spawn point and the net
    pub fn with_obstacles() -> Self {
        let size = Vec2::splat(OBSTACLE_SIZE);
        let corners = [
            Vec2::new(350.0, 250.0),
            Vec2::new(500.0, 120.0),
            Vec2::new(520.0, 330.0),
            Vec2::new(680.0, 220.0),
            Vec2::new(700.0, 60.0),
        ];
        Self {
            obstacles: corners
                .iter()
                .map(|&min| Rect::from_min_size(min, size))
                .collect(),
            ..Self::minimal()
        }
    }

    /// Random obstacle layout, reproducible from `seed`.
    ///
    /// Obstacles never overlap each other, the goal, or the area around the
    /// spawn point.
    pub fn scattered(seed: u64, count: usize) -> Result<Self, ConfigError> {
        let mut config = Self::minimal();
        let mut rng = Pcg32::seed_from_u64(seed);
        let size = Vec2::splat(OBSTACLE_SIZE);
        // Keep a puck-width lane clear around the spawn box
        let spawn_zone = Rect::from_center_half(config.spawn, config.puck_size * 1.5);
        let max_corner = config.arena_size - size;

        let max_attempts = count * 100;
        let mut attempts = 0;
        while config.obstacles.len() < count && attempts < max_attempts {
            attempts += 1;
            let min = Vec2::new(
                rng.random_range(0.0..max_corner.x),
                rng.random_range(0.0..max_corner.y),
            );
            let candidate = Rect::from_min_size(min, size);
            let blocked = candidate.intersects(&spawn_zone)
                || candidate.intersects(&config.goal)
                || config.obstacles.iter().any(|o| o.intersects(&candidate));
            if !blocked {
                config.obstacles.push(candidate);
            }
        }

        if config.obstacles.len() < count {
            return Err(ConfigError::Layout {
                placed: config.obstacles.len(),
                requested: count,
            });
        }

        log::debug!("Scattered {} obstacles (seed {}) in {} attempts", count, seed, attempts);
        Ok(config)
    }

    /// Parse a JSON scene description
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded scene from {} ({} obstacles)",
            path.display(),
            config.obstacles.len()
        );
        Ok(config)
    }

    /// The arena rectangle
    pub fn arena(&self) -> Rect {
        Rect::from_min_size(Vec2::ZERO, self.arena_size)
    }

    /// Puck box at the spawn point
    pub fn spawn_bounds(&self) -> Rect {
        Rect::from_center_half(self.spawn, self.puck_size / 2.0)
    }

    /// Check geometry and tuning. Runs before any simulation state exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.arena_size;
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::BadArena {
                width: size.x,
                height: size.y,
            });
        }
        let arena = self.arena();

        let spawn = self.spawn_bounds();
        check_box("puck", &spawn)?;
        check_box("goal", &self.goal)?;
        if !arena.contains_rect(&self.goal) {
            return Err(ConfigError::OutOfArena { what: "goal".into() });
        }
        for (i, obstacle) in self.obstacles.iter().enumerate() {
            let what = format!("obstacle {}", i);
            check_box(&what, obstacle)?;
            if !arena.contains_rect(obstacle) {
                return Err(ConfigError::OutOfArena { what });
            }
        }

        if !arena.contains_rect(&spawn) {
            return Err(ConfigError::OutOfArena { what: "spawn point".into() });
        }
        if spawn.intersects(&self.goal) {
            return Err(ConfigError::SpawnOverlap { what: "the goal".into() });
        }
        if let Some(i) = self.obstacles.iter().position(|o| spawn.intersects(o)) {
            return Err(ConfigError::SpawnOverlap {
                what: format!("obstacle {}", i),
            });
        }

        self.tuning.validate()
    }
}

fn check_box(what: &str, rect: &Rect) -> Result<(), ConfigError> {
    if rect.is_well_formed() {
        Ok(())
    } else {
        Err(ConfigError::DegenerateBox {
            what: what.to_string(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_validate() {
        SceneConfig::minimal().validate().unwrap();
        SceneConfig::with_obstacles().validate().unwrap();
        assert_eq!(SceneConfig::with_obstacles().obstacles.len(), 5);
        assert_eq!(SceneConfig::default().spawn, Vec2::new(200.0, 400.0));
    }

    #[test]
    fn test_zero_sized_obstacle_rejected() {
        let mut config = SceneConfig::minimal();
        config.obstacles.push(Rect::from_min_size(Vec2::new(400.0, 200.0), Vec2::new(0.0, 40.0)));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DegenerateBox { ref what, .. } if what == "obstacle 0"));
    }

    #[test]
    fn test_zero_sized_puck_rejected() {
        let mut config = SceneConfig::minimal();
        config.puck_size = Vec2::new(32.0, 0.0);
        assert!(matches!(config.validate(), Err(ConfigError::DegenerateBox { .. })));
    }

    #[test]
    fn test_spawn_in_goal_rejected() {
        let mut config = SceneConfig::minimal();
        config.spawn = config.goal.center();
        assert!(matches!(config.validate(), Err(ConfigError::SpawnOverlap { .. })));
    }

    #[test]
    fn test_goal_outside_arena_rejected() {
        let mut config = SceneConfig::minimal();
        config.goal = Rect::from_min_size(Vec2::new(950.0, 20.0), Vec2::new(120.0, 110.0));
        assert!(matches!(config.validate(), Err(ConfigError::OutOfArena { .. })));
    }

    #[test]
    fn test_bad_tuning_rejected() {
        let mut config = SceneConfig::minimal();
        config.tuning.drag = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::BadDrag(_))));

        let mut config = SceneConfig::minimal();
        config.tuning.goal_cooldown_secs = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadTuning { name: "goal_cooldown_secs", .. })
        ));
    }

    #[test]
    fn test_bad_arena_rejected() {
        let mut config = SceneConfig::minimal();
        config.arena_size = Vec2::new(f32::INFINITY, 500.0);
        assert!(matches!(config.validate(), Err(ConfigError::BadArena { .. })));
    }

    #[test]
    fn test_json_partial_override() {
        let json = r#"{ "tuning": { "shot_speed": 600.0 }, "goal_debounce": "Legacy" }"#;
        let config = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(config.tuning.shot_speed, 600.0);
        assert_eq!(config.tuning.drag, PUCK_DRAG);
        assert_eq!(config.goal_debounce, GoalDebounce::Legacy);
        assert_eq!(config.arena_size, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT));
    }

    #[test]
    fn test_json_roundtrip_preserves_obstacles() {
        let config = SceneConfig::with_obstacles();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_json_garbage_is_parse_error() {
        assert!(matches!(SceneConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SceneConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_scattered_is_deterministic_and_valid() {
        let a = SceneConfig::scattered(42, 5).unwrap();
        let b = SceneConfig::scattered(42, 5).unwrap();
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.obstacles.len(), 5);
        a.validate().unwrap();

        for (i, x) in a.obstacles.iter().enumerate() {
            for y in &a.obstacles[i + 1..] {
                assert!(!x.intersects(y));
            }
        }
    }

    #[test]
    fn test_scattered_overfull_fails() {
        let err = SceneConfig::scattered(1, 1000).unwrap_err();
        assert!(matches!(err, ConfigError::Layout { requested: 1000, .. }));
    }

    #[test]
    fn test_goal_debounce_from_str() {
        assert_eq!(GoalDebounce::from_str("LEGACY"), Some(GoalDebounce::Legacy));
        assert_eq!(GoalDebounce::from_str("gated"), Some(GoalDebounce::Gated));
        assert_eq!(GoalDebounce::from_str("bouncy"), None);
        assert_eq!(GoalDebounce::Gated.as_str(), "Gated");
    }
}
