//! Sprite rendering.
//!
//! One shared unit-quad mesh, one shader program, one draw call per sprite.
//! Sprites are drawn in caller-supplied order; there is no batching, depth
//! sorting, or bind deduplication.

mod renderer;
mod sprite;

pub use renderer::Renderer2D;
pub use sprite::Sprite;
