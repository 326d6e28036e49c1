//! Keyboard input.
//!
//! The public API is platform-agnostic; the runtime translates winit events
//! into engine key events via [`platform::winit`]. Unrecognized platform
//! codes are logged and dropped before they reach the state table.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use platform::winit::translate_key_event;
pub use state::InputState;
pub use types::{Key, KeyAction};
