//! Scene configuration errors
//!
//! The simulation itself has no failure paths. Everything that could make it
//! misbehave (degenerate boxes, a spawn point inside the net, silly tuning)
//! is rejected once, when a scene is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena size must be positive and finite, got {width}x{height}")]
    BadArena { width: f32, height: f32 },

    #[error("{what} has a degenerate bounding box ({width}x{height})")]
    DegenerateBox { what: String, width: f32, height: f32 },

    #[error("{what} does not fit inside the arena")]
    OutOfArena { what: String },

    #[error("puck spawn box overlaps {what}")]
    SpawnOverlap { what: String },

    #[error("drag factor must be in (0, 1], got {0}")]
    BadDrag(f32),

    #[error("{name} must be positive and finite, got {value}")]
    BadTuning { name: &'static str, value: f32 },

    #[error("placed only {placed} of {requested} obstacles")]
    Layout { placed: usize, requested: usize },

    #[error("invalid scene config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read scene config: {0}")]
    Io(#[from] std::io::Error),
}
