//! Keyboard sampling
//!
//! The simulation never sees key events. Once per tick the core asks an
//! `InputSource` which keys are held and which went down since the last ask,
//! and folds that into a `TickInput`.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Shoot,
    Restart,
}

impl Key {
    const ALL: [Key; 4] = [Key::Left, Key::Right, Key::Shoot, Key::Restart];

    fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Shoot => 2,
            Key::Restart => 3,
        }
    }

    /// Map a DOM/winit style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "Right" | "d" | "D" => Some(Key::Right),
            " " | "Space" | "Spacebar" => Some(Key::Shoot),
            "r" | "R" | "Escape" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Where key state comes from
pub trait InputSource {
    /// Level: is the key down right now
    fn is_held(&self, key: Key) -> bool;

    /// Edge: true exactly once per physical press. Consumes the press.
    fn just_pressed(&mut self, key: Key) -> bool;
}

/// Build this tick's input from a source
pub fn sample_input(source: &mut dyn InputSource) -> TickInput {
    TickInput {
        rotate_left: source.is_held(Key::Left),
        rotate_right: source.is_held(Key::Right),
        shoot: source.just_pressed(Key::Shoot),
        restart: source.just_pressed(Key::Restart),
    }
}

/// Turns a level signal into rising edges
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTracker {
    was_down: bool,
}

impl EdgeTracker {
    /// Feed the current level; true only on up -> down transitions
    pub fn update(&mut self, down: bool) -> bool {
        let rising = down && !self.was_down;
        self.was_down = down;
        rising
    }
}

/// Event-fed keyboard with latched presses.
///
/// Platform glue calls `press`/`release` from its key handlers; the core
/// samples it once per tick. A press and release that both land between two
/// samples still count as one shot. OS auto-repeat (press without release)
/// does not.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: [bool; 4],
    pressed: [bool; 4],
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Forget everything (focus loss)
    pub fn clear(&mut self) {
        for key in Key::ALL {
            self.held[key.index()] = false;
            self.pressed[key.index()] = false;
        }
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    fn just_pressed(&mut self, key: Key) -> bool {
        std::mem::take(&mut self.pressed[key.index()])
    }
}

/// Adapter for hosts that can only poll key levels (gamepads, test rigs)
#[derive(Debug, Clone, Default)]
pub struct PolledKeys {
    levels: [bool; 4],
    edges: [EdgeTracker; 4],
}

impl PolledKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current level of `key`
    pub fn set(&mut self, key: Key, down: bool) {
        self.levels[key.index()] = down;
    }
}

impl InputSource for PolledKeys {
    fn is_held(&self, key: Key) -> bool {
        self.levels[key.index()]
    }

    fn just_pressed(&mut self, key: Key) -> bool {
        let i = key.index();
        self.edges[i].update(self.levels[i])
    }
}
