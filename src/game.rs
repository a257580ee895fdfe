//! Gameplay core
//!
//! Owns one session of simulation state and feeds it fixed ticks from a
//! variable-rate frame clock. There is no global instance: whoever starts a
//! session holds the `GameplayCore` and drops it when the session ends.

use crate::config::SceneConfig;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::ConfigError;
use crate::input::{InputSource, sample_input};
use crate::sim::{GameEvent, GameState, TickInput, tick};

/// Source of per-frame elapsed time
pub trait FrameClock {
    /// Seconds since the previous frame
    fn delta(&mut self) -> f32;
}

/// Clock that reports the same delta every frame (tests, headless runs)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self { dt: SIM_DT }
    }
}

impl FrameClock for FixedClock {
    fn delta(&mut self) -> f32 {
        self.dt
    }
}

/// One running game session
#[derive(Debug, Clone)]
pub struct GameplayCore {
    config: SceneConfig,
    state: GameState,
    accumulator: f32,
}

impl GameplayCore {
    /// Validate `config` and start a session
    pub fn start(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: SceneConfig) -> Self {
        log::info!(
            "Gameplay started: {} obstacles, {:?} goal handling",
            config.obstacles.len(),
            config.goal_debounce
        );
        let state = GameState::from_validated(&config);
        Self {
            config,
            state,
            accumulator: 0.0,
        }
    }

    /// Read-only view for renderers
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Pull the elapsed time from `clock` and advance
    pub fn on_frame(
        &mut self,
        clock: &mut dyn FrameClock,
        input: &mut dyn InputSource,
    ) -> Vec<GameEvent> {
        let dt = clock.delta();
        self.advance(dt, input)
    }

    /// Run as many fixed ticks as `frame_dt` covers, sampling input once per tick
    pub fn advance(&mut self, frame_dt: f32, input: &mut dyn InputSource) -> Vec<GameEvent> {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let tick_input = sample_input(input);
            events.extend(self.step(&tick_input));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Drop time we could not catch up on rather than spiral
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        events
    }

    /// Run exactly one fixed tick
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        if input.restart {
            self.restart();
            return vec![GameEvent::Restarted];
        }
        tick(&mut self.state, input, SIM_DT)
    }

    /// Start over with the same scene. Any pending goal reset is cancelled
    /// first so it cannot fire into the new session.
    pub fn restart(&mut self) {
        if self.state.cancel_pending_reset() {
            log::debug!("Cancelled pending puck reset");
        }
        log::info!(
            "Restarting session ({} shots, {} goals)",
            self.state.shots,
            self.state.goals
        );
        self.state = GameState::from_validated(&self.config);
        self.accumulator = 0.0;
    }
}
