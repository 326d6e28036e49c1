use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::types::{Key, KeyAction};

/// Translates a winit keyboard event into an engine key event.
///
/// Returns `None` for keys outside the engine's key set. Unrecognized codes
/// are reported at debug level and otherwise ignored, so the state table
/// never observes them and prior state is preserved.
pub fn translate_key_event(event: &KeyEvent) -> Option<(Key, KeyAction)> {
    let action = map_action(event.state, event.repeat);

    match event.physical_key {
        PhysicalKey::Code(code) => match map_key_code(code) {
            Some(key) => Some((key, action)),
            None => {
                log::debug!("ignoring unmapped key code {code:?}");
                None
            }
        },
        PhysicalKey::Unidentified(native) => {
            log::debug!("ignoring unidentified platform key {native:?}");
            None
        }
    }
}

fn map_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Pressed, false) => KeyAction::Press,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Released, _) => KeyAction::Release,
    }
}

fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp => Some(Key::ArrowUp),
        KeyCode::ArrowDown => Some(Key::ArrowDown),
        KeyCode::ArrowLeft => Some(Key::ArrowLeft),
        KeyCode::ArrowRight => Some(Key::ArrowRight),

        KeyCode::Space => Some(Key::Space),
        KeyCode::Escape => Some(Key::Escape),

        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_codes_map_into_the_key_set() {
        assert_eq!(map_key_code(KeyCode::KeyW), Some(Key::W));
        assert_eq!(map_key_code(KeyCode::ArrowUp), Some(Key::ArrowUp));
        assert_eq!(map_key_code(KeyCode::Space), Some(Key::Space));
        assert_eq!(map_key_code(KeyCode::Escape), Some(Key::Escape));
    }

    #[test]
    fn unmapped_codes_are_rejected_not_stored() {
        assert_eq!(map_key_code(KeyCode::F1), None);
        assert_eq!(map_key_code(KeyCode::Tab), None);
        assert_eq!(map_key_code(KeyCode::Digit0), None);
    }

    #[test]
    fn press_repeat_release_map_to_actions() {
        assert_eq!(map_action(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(map_action(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(map_action(ElementState::Released, false), KeyAction::Release);
        assert_eq!(map_action(ElementState::Released, true), KeyAction::Release);
    }
}
