use super::error::GfxError;

/// Lifecycle of a native-handle-backed resource.
///
/// Transitions are one-way: `Uninitialized` → `Ready` → `Disposed`.
/// `Disposed` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ResourceState {
    Uninitialized,
    Ready,
    Disposed,
}

/// Implemented by entities owning exactly one native GL object.
pub trait NativeResource {
    fn state(&self) -> ResourceState;

    /// Releases the native handle. Valid exactly once, from `Ready`.
    fn dispose(&mut self, gl: &glow::Context) -> Result<(), GfxError>;
}

/// Tagged lifecycle state checked on every entity entry point.
///
/// All Shader/ShaderProgram/Texture operations route their state checks
/// through this one type, so an illegal transition is rejected in exactly one
/// place.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    state: ResourceState,
    resource: &'static str,
}

impl Lifecycle {
    pub(crate) fn new(resource: &'static str) -> Self {
        Self {
            state: ResourceState::Uninitialized,
            resource,
        }
    }

    pub(crate) fn state(&self) -> ResourceState {
        self.state
    }

    /// Gate for `create`-class operations.
    pub(crate) fn require_uninitialized(&self, op: &'static str) -> Result<(), GfxError> {
        match self.state {
            ResourceState::Uninitialized => Ok(()),
            state => Err(GfxError::Usage {
                resource: self.resource,
                op,
                state,
            }),
        }
    }

    /// Gate for bind/query/dispose-class operations.
    pub(crate) fn require_ready(&self, op: &'static str) -> Result<(), GfxError> {
        match self.state {
            ResourceState::Ready => Ok(()),
            state => Err(GfxError::Usage {
                resource: self.resource,
                op,
                state,
            }),
        }
    }

    pub(crate) fn mark_ready(&mut self) {
        debug_assert_eq!(self.state, ResourceState::Uninitialized);
        self.state = ResourceState::Ready;
    }

    pub(crate) fn mark_disposed(&mut self) {
        debug_assert_eq!(self.state, ResourceState::Ready);
        self.state = ResourceState::Disposed;
    }
}
