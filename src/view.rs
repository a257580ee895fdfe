//! HUD presentation
//!
//! The renderer is a pure consumer: it gets a snapshot of post-tick state
//! and never writes back into the simulation.

use glam::Vec2;

use crate::sim::{GamePhase, GameState};

/// Text labels the HUD owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    ShotCounter,
    GoalCounter,
    GoalBanner,
}

/// Drawing surface the HUD needs
pub trait Renderer {
    fn draw_line(&mut self, from: Vec2, to: Vec2);
    fn set_label_text(&mut self, label: Label, text: &str);
    fn set_label_visible(&mut self, label: Label, visible: bool);
}

/// Everything a frame needs to draw the HUD
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub puck_pos: Vec2,
    pub aim_from: Vec2,
    pub aim_to: Vec2,
    /// Heading wrapped to [0, 360)
    pub heading: f32,
    pub shots: u32,
    pub goals: u32,
    pub phase: GamePhase,
    pub banner_visible: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        let (aim_from, aim_to) = state.aim_line();
        Self {
            puck_pos: state.puck.pos,
            aim_from,
            aim_to,
            heading: state.aim.display_heading(),
            shots: state.shots,
            goals: state.goals,
            phase: state.phase,
            banner_visible: state.goal_banner_visible(),
        }
    }

    pub fn shot_text(&self) -> String {
        format!("Shots: {}", self.shots)
    }

    pub fn goal_text(&self) -> String {
        format!("Goals: {}", self.goals)
    }
}

/// Draw one frame's HUD
pub fn present(state: &GameState, renderer: &mut impl Renderer) -> HudView {
    let view = HudView::from_state(state);
    renderer.draw_line(view.aim_from, view.aim_to);
    renderer.set_label_text(Label::ShotCounter, &view.shot_text());
    renderer.set_label_text(Label::GoalCounter, &view.goal_text());
    renderer.set_label_visible(Label::GoalBanner, view.banner_visible);
    view
}
