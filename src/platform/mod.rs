//! Platform abstraction layer
//!
//! Maps physical keys to simulation input. Frontends feed key transitions
//! into a [`KeyboardState`] and turn it into one [`TickInput`] per frame.

use std::collections::HashSet;

use crate::sim::{MoveInput, ShapeSelection, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Tab,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    R,
    L,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "KeyW" => Key::W,
            "KeyA" => Key::A,
            "KeyS" => Key::S,
            "KeyD" => Key::D,
            "Space" => Key::Space,
            "Tab" => Key::Tab,
            "Digit1" | "Numpad1" => Key::Digit1,
            "Digit2" | "Numpad2" => Key::Digit2,
            "Digit3" | "Numpad3" => Key::Digit3,
            "Digit4" | "Numpad4" => Key::Digit4,
            "KeyR" => Key::R,
            "KeyL" => Key::L,
            _ => return None,
        };
        Some(key)
    }
}

/// Per-key queries offered by a windowing backend
pub trait InputSource {
    fn is_down(&self, key: Key) -> bool;
    fn was_pressed(&self, key: Key) -> bool;
}

/// Held keys plus the keys pressed since the last frame
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    down: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down; auto-repeat does not count as a new press
    pub fn press(&mut self, key: Key) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.down.clear();
    }

    /// Forget one-shot presses after a frame consumed them
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Build the frame's simulation input from key state
pub fn tick_input<I: InputSource + ?Sized>(keys: &I) -> TickInput {
    let select_shape = [
        (Key::Digit1, ShapeSelection::Triangle),
        (Key::Digit2, ShapeSelection::Square),
        (Key::Digit3, ShapeSelection::Pentagon),
        (Key::Digit4, ShapeSelection::Random),
    ]
    .into_iter()
    .filter(|(key, _)| keys.was_pressed(*key))
    .map(|(_, shape)| shape)
    .last();

    TickInput {
        movement: MoveInput {
            up: keys.is_down(Key::W),
            down: keys.is_down(Key::S),
            left: keys.is_down(Key::A),
            right: keys.is_down(Key::D),
        },
        fire: keys.is_down(Key::Space),
        cycle_weapon: keys.was_pressed(Key::Tab),
        select_shape,
        restart: keys.was_pressed(Key::R),
        toggle_skin: keys.was_pressed(Key::L),
    }
}
