use serde::{Deserialize, Serialize};

/// Keys that steer the active light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// -X
    A,
    /// +X
    D,
    /// +Y
    R,
    /// -Y
    F,
    /// -Z
    W,
    /// +Z
    S,
}

impl Key {
    pub const ALL: [Key; 6] = [Key::A, Key::D, Key::R, Key::F, Key::W, Key::S];

    /// Axis index (0 = x, 1 = y, 2 = z) and direction sign
    pub const fn axis(self) -> (usize, f32) {
        match self {
            Key::A => (0, -1.0),
            Key::D => (0, 1.0),
            Key::R => (1, 1.0),
            Key::F => (1, -1.0),
            Key::W => (2, -1.0),
            Key::S => (2, 1.0),
        }
    }

    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'a' => Some(Key::A),
            'd' => Some(Key::D),
            'r' => Some(Key::R),
            'f' => Some(Key::F),
            'w' => Some(Key::W),
            's' => Some(Key::S),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Discrete key transition delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub const fn down(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
        }
    }

    pub const fn up(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Released,
        }
    }
}

/// Controller - handles key input states
pub trait Controller {
    /// Apply one key transition
    fn handle_key(&mut self, event: KeyEvent);

    /// Check if key is currently down
    fn is_down(&self, key: Key) -> bool;

    /// Get all currently pressed keys, oldest first
    fn get_down_keys(&self) -> &[Key];
}
