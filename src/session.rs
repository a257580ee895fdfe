//! Start screen and session lifecycle
//!
//! The menu launches the gameplay core once; ending the game drops it and
//! returns to the menu.

use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::game::GameplayCore;
use crate::input::{InputSource, Key};
use crate::sim::GameEvent;

/// Which screen is showing
#[derive(Debug)]
pub enum Screen {
    /// Title screen, waiting for the shoot key
    Menu,
    Playing(Box<GameplayCore>),
}

#[derive(Debug)]
pub struct Session {
    config: SceneConfig,
    screen: Screen,
}

impl Session {
    /// Validates the scene up front so starting a game cannot fail later
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            screen: Screen::Menu,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn core(&self) -> Option<&GameplayCore> {
        match &self.screen {
            Screen::Playing(core) => Some(core.as_ref()),
            Screen::Menu => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing(_))
    }

    /// Launch the gameplay core if it is not running yet
    pub fn start_gameplay(&mut self) {
        if let Screen::Menu = self.screen {
            let core = GameplayCore::from_validated(self.config.clone());
            self.screen = Screen::Playing(Box::new(core));
        }
    }

    /// Drop the running core and go back to the title screen
    pub fn end_gameplay(&mut self) {
        if let Screen::Playing(core) = &self.screen {
            log::info!(
                "Session ended: {} shots, {} goals",
                core.state().shots,
                core.state().goals
            );
        }
        self.screen = Screen::Menu;
    }

    /// Per-frame entry point
    pub fn advance(&mut self, frame_dt: f32, input: &mut dyn InputSource) -> Vec<GameEvent> {
        if let Screen::Playing(core) = &mut self.screen {
            return core.advance(frame_dt, input);
        }

        // The press that leaves the menu is consumed here, not shot
        if input.just_pressed(Key::Shoot) {
            self.start_gameplay();
        }
        Vec::new()
    }
}
