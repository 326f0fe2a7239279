use macroquad::prelude::{is_key_pressed, KeyCode};

use crate::game::Direction;

/// Keys checked each frame, in the order their commands are applied.
const POLLED_KEYS: [KeyCode; 9] = [
    KeyCode::W,
    KeyCode::Up,
    KeyCode::S,
    KeyCode::Down,
    KeyCode::A,
    KeyCode::Left,
    KeyCode::D,
    KeyCode::Right,
    KeyCode::Escape,
];

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key to its command, if any
    pub fn command_for(&self, key: KeyCode) -> Option<Command> {
        match key {
            // Movement - WASD and arrow keys
            KeyCode::W | KeyCode::Up => Some(Command::Steer(Direction::Up)),
            KeyCode::S | KeyCode::Down => Some(Command::Steer(Direction::Down)),
            KeyCode::A | KeyCode::Left => Some(Command::Steer(Direction::Left)),
            KeyCode::D | KeyCode::Right => Some(Command::Steer(Direction::Right)),

            // Controls
            KeyCode::Escape => Some(Command::Quit),

            _ => None,
        }
    }

    /// Commands for the keys pressed since the last frame.
    ///
    /// Edge-triggered; a held key fires once. When several keys land in
    /// one frame the receiver applies them in the returned order, so the
    /// last accepted steer wins.
    pub fn poll(&self) -> Vec<Command> {
        POLLED_KEYS
            .iter()
            .filter(|&&key| is_key_pressed(key))
            .filter_map(|&key| self.command_for(key))
            .collect()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
