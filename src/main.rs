//! Puck Shot entry point
//!
//! Native builds run a headless scripted session: the title screen, a few
//! aimed shots at the net, and the HUD written to the log. Pass a scene JSON
//! path as the first argument to play a custom rink.

use glam::Vec2;

use puck_shot::SceneConfig;
use puck_shot::game::{FixedClock, FrameClock};
use puck_shot::input::{Key, KeyboardState};
use puck_shot::session::Session;
use puck_shot::sim::GameEvent;
use puck_shot::view::{HudView, Label, Renderer, present};

/// Renderer that logs HUD changes instead of drawing
#[derive(Default)]
struct LogRenderer {
    shot_text: String,
    goal_text: String,
    banner: bool,
}

impl Renderer for LogRenderer {
    fn draw_line(&mut self, from: Vec2, to: Vec2) {
        log::trace!("aim ({:.0}, {:.0}) -> ({:.0}, {:.0})", from.x, from.y, to.x, to.y);
    }

    fn set_label_text(&mut self, label: Label, text: &str) {
        let slot = match label {
            Label::ShotCounter => &mut self.shot_text,
            Label::GoalCounter => &mut self.goal_text,
            Label::GoalBanner => return,
        };
        if slot.as_str() != text {
            log::info!("HUD {}", text);
            *slot = text.to_string();
        }
    }

    fn set_label_visible(&mut self, label: Label, visible: bool) {
        if label == Label::GoalBanner && visible != self.banner {
            log::info!("{}", if visible { "GOAL!" } else { "Banner hidden" });
            self.banner = visible;
        }
    }
}

/// Scripted key presses: (frame, key, down)
const SCRIPT: &[(u32, Key, bool)] = &[
    (5, Key::Shoot, true), // leave the title screen
    (6, Key::Shoot, false),
    (10, Key::Left, true), // swing the aim up toward the net
    (29, Key::Left, false),
    (30, Key::Shoot, true),
    (31, Key::Shoot, false),
    (200, Key::Right, true),
    (215, Key::Right, false),
    (220, Key::Shoot, true),
    (221, Key::Shoot, false),
    (400, Key::Restart, true),
    (401, Key::Restart, false),
];

const DEMO_FRAMES: u32 = 480;

fn main() {
    env_logger::init();
    log::info!("Puck Shot (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(&path),
        None => Ok(SceneConfig::with_obstacles()),
    };
    let session = config.and_then(Session::new);
    let mut session = match session {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    let mut keyboard = KeyboardState::new();
    let mut clock = FixedClock::default();
    let mut renderer = LogRenderer::default();

    for frame in 0..DEMO_FRAMES {
        for &(_, key, down) in SCRIPT.iter().filter(|(f, _, _)| *f == frame) {
            if down {
                keyboard.press(key);
            } else {
                keyboard.release(key);
            }
        }

        let was_playing = session.is_playing();
        let dt = clock.delta();
        for event in session.advance(dt, &mut keyboard) {
            if let GameEvent::ObstacleHit { id } = event {
                log::info!("Blocked by obstacle {}", id);
            }
        }
        if !was_playing && session.is_playing() {
            log::info!("Title screen dismissed");
        }

        if let Some(core) = session.core() {
            present(core.state(), &mut renderer);
        }
    }

    if let Some(core) = session.core() {
        let hud = HudView::from_state(core.state());
        log::info!(
            "Demo finished: {} shots, {} goals, puck at ({:.0}, {:.0}), heading {:.0} deg",
            hud.shots,
            hud.goals,
            hud.puck_pos.x,
            hud.puck_pos.y,
            hud.heading
        );
    }
    session.end_gameplay();
}

