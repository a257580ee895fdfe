//! Fixed timestep simulation tick
//!
//! Per tick: cooldown timer, aim, shot, integrate, walls, collisions.

use glam::Vec2;

use super::aim::AimDirection;
use super::collision::{Collision, detect};
use super::launch::compute_impulse;
use super::state::{DeferredReset, GameEvent, GamePhase, GameState};
use crate::config::GoalDebounce;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Turn key held (counterclockwise)
    pub rotate_left: bool,
    /// Turn key held (clockwise)
    pub rotate_right: bool,
    /// Shot key went down since the last sample (edge, not level)
    pub shoot: bool,
    /// Restart key went down since the last sample
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    if state.phase == GamePhase::GoalCooldown {
        let expired = state.pending_reset.as_mut().is_none_or(|timer| timer.tick());
        if expired {
            state.pending_reset = None;
            state.puck.reset(state.spawn);
            state.phase = GamePhase::Aiming;
            events.push(GameEvent::PuckReset);
            log::info!("Puck reset to spawn after goal {}", state.goals);
            return events;
        }

        // Gated cooldown freezes everything until the reset
        if state.goal_debounce == GoalDebounce::Gated {
            return events;
        }
    }

    // Aim
    if input.rotate_left {
        state.aim.rotate(AimDirection::Left);
    }
    if input.rotate_right {
        state.aim.rotate(AimDirection::Right);
    }

    // Shoot
    if input.shoot {
        let velocity = compute_impulse(state.aim.heading_degrees(), state.tuning.shot_speed);
        state.shots += 1;
        state.puck.apply_impulse(velocity);
        events.push(GameEvent::ShotFired {
            shot: state.shots,
            velocity,
        });
        log::debug!(
            "Shot {} at {:.0} deg ({:.1}, {:.1})",
            state.shots,
            state.aim.display_heading(),
            velocity.x,
            velocity.y
        );
    }

    // Move
    let prev_pos = state.puck.pos;
    state.puck.integrate(dt);
    if state.puck.clamp_to_bounds(&state.arena) {
        events.push(GameEvent::BoundsHit);
        log::debug!("Puck stopped at wall ({:.1}, {:.1})", state.puck.pos.x, state.puck.pos.y);
    }

    // Collide
    for collision in detect(&state.puck, prev_pos, &state.obstacles, &state.goal) {
        match collision {
            Collision::Obstacle { id } => {
                state.puck.apply_impulse(Vec2::ZERO);
                events.push(GameEvent::ObstacleHit { id });
                log::debug!("Puck stopped by obstacle {}", id);
            }
            Collision::Goal => on_goal(state, dt, &mut events),
        }
    }

    events
}

fn on_goal(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let timer = DeferredReset::after(state.tuning.goal_cooldown_secs, dt);

    match (state.phase, state.goal_debounce) {
        (GamePhase::Aiming, debounce) => {
            state.goals += 1;
            state.phase = GamePhase::GoalCooldown;
            state.pending_reset = Some(timer);
            if debounce == GoalDebounce::Gated {
                state.puck.apply_impulse(Vec2::ZERO);
            }
            events.push(GameEvent::GoalScored { goals: state.goals });
            log::info!("Goal scored! ({} goals, {} shots)", state.goals, state.shots);
        }
        (GamePhase::GoalCooldown, GoalDebounce::Legacy) => {
            // Still overlapping: re-fire and push the reset back
            state.pending_reset = Some(timer);
            events.push(GameEvent::GoalScored { goals: state.goals });
        }
        (GamePhase::GoalCooldown, GoalDebounce::Gated) => {}
    }
}
