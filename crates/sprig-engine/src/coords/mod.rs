//! Coordinate and math types shared across the renderer and app code.
//!
//! Canonical world space:
//! - World units equal logical pixels at the default projection
//! - Origin bottom-left, +X right, +Y up (GL clip-space convention)
//!
//! The renderer converts to NDC with a fixed orthographic projection.

mod color;
mod mat4;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use mat4::Mat4;
pub use vec2::Vec2;
pub use viewport::Viewport;
