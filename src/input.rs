use macroquad::prelude::*;

use crate::direction::Direction;
use crate::game::InputEvent;

pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

pub fn is_close_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Escape | KeyCode::Q)
}

pub fn event_for_key(key: KeyCode) -> Option<InputEvent> {
    if is_close_key(key) {
        return Some(InputEvent::Close);
    }
    direction_for_key(key).map(InputEvent::Turn)
}

/// Collects input seen on every frame until the next game tick drains it.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn extend_from_keys(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.events.extend(keys.into_iter().filter_map(event_for_key));
    }

    /// Reads this frame's key presses and window close request.
    ///
    /// Presses from different frames queue in the order they happened.
    /// macroquad reports the presses of a single frame as an unordered set, so
    /// two turns landing in the same frame are queued in arbitrary order.
    pub fn poll(&mut self) {
        self.extend_from_keys(get_keys_pressed());
        if is_quit_requested() {
            self.push(InputEvent::Close);
        }
    }

    pub fn close_requested(&self) -> bool {
        self.events.contains(&InputEvent::Close)
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
