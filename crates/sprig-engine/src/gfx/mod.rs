//! Graphics resource layer.
//!
//! Everything here wraps a native GL object behind an explicit
//! create / bind / dispose lifecycle with single-owner discipline. Handles
//! are only reachable while their owner is in the `Ready` state.

mod assets;
mod context;
mod error;
mod lifecycle;
mod shader;
mod texture;

pub use assets::{load_rgba, load_shader_source};
pub use context::GlContext;
pub use error::GfxError;
pub use lifecycle::{NativeResource, ResourceState};
pub use shader::{Shader, ShaderProgram, ShaderStage};
pub use texture::Texture;
