use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{Key, KeyAction};

/// Current keyboard state for the window.
///
/// Holds the set of currently held keys; per-frame transitions are recorded
/// into an [`InputFrame`]. Updated only from the event-dispatch path, queried
/// from app code — both on the event-loop thread.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies one key event.
    ///
    /// `Press` and `Repeat` mark the key held; `Release` clears it. Total
    /// over its inputs — never panics in the dispatch path.
    pub fn apply_key_event(&mut self, frame: &mut InputFrame, key: Key, action: KeyAction) {
        match action {
            KeyAction::Press | KeyAction::Repeat => {
                if self.keys_down.insert(key) {
                    frame.keys_pressed.insert(key);
                }
            }
            KeyAction::Release => {
                if self.keys_down.remove(&key) {
                    frame.keys_released.insert(key);
                }
            }
        }
    }

    /// True while `key` is held: its last recorded action was `Press` or
    /// `Repeat` with no `Release` since. Keys never seen are not held.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &mut InputState, frame: &mut InputFrame, events: &[(Key, KeyAction)]) {
        for &(key, action) in events {
            state.apply_key_event(frame, key, action);
        }
    }

    #[test]
    fn key_never_seen_is_not_held() {
        let state = InputState::default();
        assert!(!state.is_key_down(Key::Space));
    }

    #[test]
    fn press_without_release_holds() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        apply(&mut state, &mut frame, &[(Key::W, KeyAction::Press)]);
        assert!(state.is_key_down(Key::W));
        assert!(frame.keys_pressed.contains(&Key::W));
    }

    #[test]
    fn press_then_release_clears() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        apply(
            &mut state,
            &mut frame,
            &[(Key::A, KeyAction::Press), (Key::A, KeyAction::Release)],
        );
        assert!(!state.is_key_down(Key::A));
        assert!(frame.keys_released.contains(&Key::A));
    }

    #[test]
    fn repeat_keeps_the_key_held() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        apply(
            &mut state,
            &mut frame,
            &[
                (Key::D, KeyAction::Press),
                (Key::D, KeyAction::Repeat),
                (Key::D, KeyAction::Repeat),
            ],
        );
        assert!(state.is_key_down(Key::D));
        // Only the initial transition counts as "pressed this frame".
        assert_eq!(frame.keys_pressed.len(), 1);
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        apply(&mut state, &mut frame, &[(Key::S, KeyAction::Release)]);
        assert!(!state.is_key_down(Key::S));
        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn keys_are_tracked_independently() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        apply(
            &mut state,
            &mut frame,
            &[
                (Key::W, KeyAction::Press),
                (Key::ArrowLeft, KeyAction::Press),
                (Key::W, KeyAction::Release),
            ],
        );
        assert!(!state.is_key_down(Key::W));
        assert!(state.is_key_down(Key::ArrowLeft));
    }
}
