use glow::HasContext;

use super::error::GfxError;
use super::lifecycle::{Lifecycle, NativeResource, ResourceState};
use crate::coords::Mat4;

/// Shader translation stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    fn compile_op(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "compile vertex shader",
            ShaderStage::Fragment => "compile fragment shader",
        }
    }
}

/// A single compiled GL shader object.
///
/// Exists only as input to [`ShaderProgram::create`], which consumes and
/// disposes it after linking.
pub struct Shader {
    stage: ShaderStage,
    raw: Option<glow::Shader>,
    lifecycle: Lifecycle,
}

impl Shader {
    pub fn new(stage: ShaderStage) -> Self {
        Self {
            stage,
            raw: None,
            lifecycle: Lifecycle::new("shader"),
        }
    }

    /// Compiles `source` for this shader's stage.
    ///
    /// On compile failure the shader stays `Uninitialized` and the error
    /// carries the driver's info log.
    pub fn create(&mut self, gl: &glow::Context, source: &str) -> Result<(), GfxError> {
        self.lifecycle.require_uninitialized("create")?;

        let raw = unsafe { gl.create_shader(self.stage.gl_enum()) }.map_err(GfxError::Init)?;

        let compiled = unsafe {
            gl.shader_source(raw, source);
            gl.compile_shader(raw);
            gl.get_shader_compile_status(raw)
        };
        if !compiled {
            let log = unsafe { gl.get_shader_info_log(raw) };
            unsafe { gl.delete_shader(raw) };
            return Err(GfxError::CompileOrLink {
                what: self.stage.compile_op(),
                log,
            });
        }

        self.raw = Some(raw);
        self.lifecycle.mark_ready();
        Ok(())
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    fn raw_handle(&self, op: &'static str) -> Result<glow::Shader, GfxError> {
        self.lifecycle.require_ready(op)?;
        Ok(self.raw.expect("Ready state implies a live handle"))
    }
}

impl NativeResource for Shader {
    fn state(&self) -> ResourceState {
        self.lifecycle.state()
    }

    fn dispose(&mut self, gl: &glow::Context) -> Result<(), GfxError> {
        let raw = self.raw_handle("dispose")?;
        unsafe { gl.delete_shader(raw) };
        self.raw = None;
        self.lifecycle.mark_disposed();
        Ok(())
    }
}

/// A linked GL shader program.
pub struct ShaderProgram {
    raw: Option<glow::Program>,
    lifecycle: Lifecycle,
}

impl ShaderProgram {
    pub fn new() -> Self {
        Self {
            raw: None,
            lifecycle: Lifecycle::new("shader program"),
        }
    }

    /// Links `vertex` and `fragment` into a program.
    ///
    /// Consumes both shaders: after linking (successful or not) they are
    /// detached and disposed, the program owning the linked result. On link
    /// failure the program object is deleted, this entity stays
    /// `Uninitialized`, and the error carries the linker log.
    pub fn create(
        &mut self,
        gl: &glow::Context,
        mut vertex: Shader,
        mut fragment: Shader,
    ) -> Result<(), GfxError> {
        self.lifecycle.require_uninitialized("create")?;

        let vs = vertex.raw_handle("link")?;
        let fs = fragment.raw_handle("link")?;

        let raw = unsafe { gl.create_program() }.map_err(GfxError::Init)?;
        let linked = unsafe {
            gl.attach_shader(raw, vs);
            gl.attach_shader(raw, fs);
            gl.link_program(raw);
            gl.get_program_link_status(raw)
        };

        unsafe {
            gl.detach_shader(raw, vs);
            gl.detach_shader(raw, fs);
        }
        vertex.dispose(gl)?;
        fragment.dispose(gl)?;

        if !linked {
            let log = unsafe { gl.get_program_info_log(raw) };
            unsafe { gl.delete_program(raw) };
            return Err(GfxError::CompileOrLink {
                what: "link shader program",
                log,
            });
        }

        self.raw = Some(raw);
        self.lifecycle.mark_ready();
        Ok(())
    }

    /// Makes this program the active GL program.
    ///
    /// Idempotent; no side effect beyond the global program binding.
    pub fn bind(&self, gl: &glow::Context) -> Result<(), GfxError> {
        let raw = self.raw_handle("bind")?;
        unsafe { gl.use_program(Some(raw)) };
        Ok(())
    }

    /// Uploads `matrix` to the named `mat4` uniform.
    ///
    /// The program must be bound for the upload to take effect. A name the
    /// linker optimized out (or a typo) resolves to no location; GL ignores
    /// the upload, so it is reported at debug level.
    pub fn set_mat4(&self, gl: &glow::Context, name: &str, matrix: &Mat4) -> Result<(), GfxError> {
        let raw = self.raw_handle("set_mat4")?;
        unsafe {
            let location = gl.get_uniform_location(raw, name);
            if location.is_none() {
                log::debug!("uniform {name:?} has no location in program");
            }
            gl.uniform_matrix_4_f32_slice(location.as_ref(), false, matrix.as_slice());
        }
        Ok(())
    }

    fn raw_handle(&self, op: &'static str) -> Result<glow::Program, GfxError> {
        self.lifecycle.require_ready(op)?;
        Ok(self.raw.expect("Ready state implies a live handle"))
    }
}

impl Default for ShaderProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeResource for ShaderProgram {
    fn state(&self) -> ResourceState {
        self.lifecycle.state()
    }

    fn dispose(&mut self, gl: &glow::Context) -> Result<(), GfxError> {
        let raw = self.raw_handle("dispose")?;
        unsafe { gl.delete_program(raw) };
        self.raw = None;
        self.lifecycle.mark_disposed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Paths that touch the GL server need a live context and are exercised by
    // the sandbox; these cover the lifecycle gates on the client side.

    #[test]
    fn new_shader_is_uninitialized() {
        let shader = Shader::new(ShaderStage::Vertex);
        assert_eq!(shader.state(), ResourceState::Uninitialized);
        assert_eq!(shader.stage(), ShaderStage::Vertex);
    }

    #[test]
    fn uncompiled_shader_has_no_reachable_handle() {
        let shader = Shader::new(ShaderStage::Fragment);
        let err = shader.raw_handle("link").unwrap_err();
        assert!(matches!(
            err,
            GfxError::Usage {
                state: ResourceState::Uninitialized,
                ..
            }
        ));
    }

    #[test]
    fn unlinked_program_rejects_bind_and_uniforms() {
        let program = ShaderProgram::new();
        assert_eq!(program.state(), ResourceState::Uninitialized);
        assert!(matches!(
            program.raw_handle("bind").unwrap_err(),
            GfxError::Usage { op: "bind", .. }
        ));
        assert!(matches!(
            program.raw_handle("set_mat4").unwrap_err(),
            GfxError::Usage { op: "set_mat4", .. }
        ));
    }
}
