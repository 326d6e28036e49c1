//! Window + event-loop runtime.
//!
//! Owns winit event dispatch and the GL bootstrap, and drives the
//! poll → clear → app frame → swap cycle until close.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
