use std::path::PathBuf;

use thiserror::Error;

use super::lifecycle::ResourceState;

/// Errors produced by the graphics layer.
///
/// `Init`, `CompileOrLink`, and `AssetLoad` are startup-fatal: callers surface
/// them immediately and never retry. `Usage` indicates a caller-discipline bug
/// (an operation in the wrong lifecycle state) and must be propagated, never
/// absorbed.
#[derive(Debug, Error)]
pub enum GfxError {
    /// Window, GL context, surface, or native object creation failed.
    #[error("graphics initialization failed: {0}")]
    Init(String),

    /// Shader compilation or program linking failed; carries the driver log.
    #[error("failed to {what}: {log}")]
    CompileOrLink { what: &'static str, log: String },

    /// An asset file could not be read or decoded.
    #[error("failed to load asset {path}: {reason}", path = .path.display())]
    AssetLoad { path: PathBuf, reason: String },

    /// An operation was called in the wrong lifecycle state.
    #[error("{op} called on {resource} in state {state:?}")]
    Usage {
        resource: &'static str,
        op: &'static str,
        state: ResourceState,
    },
}
