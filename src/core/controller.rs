use std::collections::HashSet;

use log::debug;

use crate::animation::VelocityState;
use crate::traits::{Controller, Key, KeyEvent, KeyState};

/// Owns the single velocity state shared by whichever scene is active
///
/// Key handlers only touch this buffer; light positions change inside the tick.
#[derive(Debug, Clone, Default)]
pub struct LightController {
    velocity: VelocityState,
    /// Currently pressed keys
    pressed_keys: HashSet<Key>,
    /// All pressed keys as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Key>,
}

impl LightController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> &VelocityState {
        &self.velocity
    }
}

impl Controller for LightController {
    fn handle_key(&mut self, event: KeyEvent) {
        match event.state {
            KeyState::Pressed => {
                if self.pressed_keys.insert(event.key) {
                    self.pressed_vec.push(event.key);
                }
                self.velocity.press(event.key);
                debug!("key down {:?} -> velocity {:?}", event.key, self.velocity.velocity());
            }
            KeyState::Released => {
                if self.pressed_keys.remove(&event.key) {
                    self.pressed_vec.retain(|&k| k != event.key);
                }
                self.velocity.release(event.key);
                debug!("key up {:?} -> velocity {:?}", event.key, self.velocity.velocity());
            }
        }
    }

    fn is_down(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn get_down_keys(&self) -> &[Key] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_controller_empty() {
        let controller = LightController::new();
        assert!(!controller.is_down(Key::W));
        assert_eq!(controller.get_down_keys().len(), 0);
        assert!(controller.velocity().is_idle());
    }

    #[test]
    fn test_key_down_updates_velocity() {
        let mut controller = LightController::new();
        controller.handle_key(KeyEvent::down(Key::A));

        assert!(controller.is_down(Key::A));
        assert_eq!(controller.velocity().velocity(), Vec3::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn test_repeated_key_down_tracked_once() {
        let mut controller = LightController::new();
        controller.handle_key(KeyEvent::down(Key::W));
        controller.handle_key(KeyEvent::down(Key::W));

        assert_eq!(controller.get_down_keys(), &[Key::W]);
    }

    #[test]
    fn test_key_up_clears_axis() {
        let mut controller = LightController::new();
        controller.handle_key(KeyEvent::down(Key::S));
        controller.handle_key(KeyEvent::up(Key::S));

        assert!(!controller.is_down(Key::S));
        assert_eq!(controller.velocity().velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_opposite_keys_last_event_wins() {
        let mut controller = LightController::new();
        controller.handle_key(KeyEvent::down(Key::R));
        controller.handle_key(KeyEvent::down(Key::F));
        assert_eq!(controller.velocity().velocity().y, -5.0);

        controller.handle_key(KeyEvent::up(Key::R));
        assert_eq!(controller.velocity().velocity().y, -5.0);
        assert_eq!(controller.get_down_keys(), &[Key::F]);
    }
}
