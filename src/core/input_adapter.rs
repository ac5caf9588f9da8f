use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Key, KeyEvent, KeyState};

/// Map Winit KeyCode to Key
pub fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
    match keycode {
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::KeyF => Some(Key::F),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        _ => None,
    }
}

/// Translate a physical key transition into a light-steering event
pub fn translate_key(keycode: KeyCode, state: ElementState) -> Option<KeyEvent> {
    let key = keycode_to_key(keycode)?;
    let state = match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };
    Some(KeyEvent { key, state })
}

/// Bridge for hosts driving the catalog from a Winit event loop
pub fn translate_window_event(event: &WindowEvent) -> Option<KeyEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
            PhysicalKey::Code(keycode) => translate_key(keycode, event.state),
            PhysicalKey::Unidentified(_) => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Winit KeyEvent construction requires internal fields that are not publicly accessible,
    // so these tests go through the keycode-level translation

    #[test]
    fn test_steering_keys_mapped() {
        assert_eq!(keycode_to_key(KeyCode::KeyA), Some(Key::A));
        assert_eq!(keycode_to_key(KeyCode::KeyD), Some(Key::D));
        assert_eq!(keycode_to_key(KeyCode::KeyR), Some(Key::R));
        assert_eq!(keycode_to_key(KeyCode::KeyF), Some(Key::F));
        assert_eq!(keycode_to_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(keycode_to_key(KeyCode::KeyS), Some(Key::S));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(keycode_to_key(KeyCode::KeyQ), None);
        assert_eq!(keycode_to_key(KeyCode::Space), None);
        assert_eq!(translate_key(KeyCode::Escape, ElementState::Pressed), None);
    }

    #[test]
    fn test_translate_states() {
        assert_eq!(
            translate_key(KeyCode::KeyA, ElementState::Pressed),
            Some(KeyEvent::down(Key::A))
        );
        assert_eq!(
            translate_key(KeyCode::KeyA, ElementState::Released),
            Some(KeyEvent::up(Key::A))
        );
    }

    #[test]
    fn test_non_keyboard_window_event_ignored() {
        assert_eq!(translate_window_event(&WindowEvent::Focused(true)), None);
    }
}
