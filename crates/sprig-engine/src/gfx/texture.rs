use std::path::Path;

use glow::HasContext;

use super::assets::load_rgba;
use super::error::GfxError;
use super::lifecycle::{Lifecycle, NativeResource, ResourceState};

/// A GL 2D texture with straight-alpha RGBA8 content.
///
/// Sampling state is fixed: REPEAT wrap, LINEAR filtering, mipmapped.
pub struct Texture {
    raw: Option<glow::Texture>,
    width: u32,
    height: u32,
    lifecycle: Lifecycle,
}

impl Texture {
    pub fn new() -> Self {
        Self {
            raw: None,
            width: 0,
            height: 0,
            lifecycle: Lifecycle::new("texture"),
        }
    }

    /// Decodes the image at `path` and uploads it.
    ///
    /// A missing or undecodable file carries the path in the error and leaves
    /// the texture `Uninitialized`.
    pub fn create_from_path(&mut self, gl: &glow::Context, path: &Path) -> Result<(), GfxError> {
        self.lifecycle.require_uninitialized("create_from_path")?;
        let image = load_rgba(path)?;
        let (width, height) = image.dimensions();
        self.upload(gl, width, height, image.as_raw())
    }

    /// Uploads raw straight-alpha RGBA8 pixels, row-major, bottom row first.
    pub fn create_from_rgba(
        &mut self,
        gl: &glow::Context,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<(), GfxError> {
        self.lifecycle.require_uninitialized("create_from_rgba")?;
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(GfxError::Init(format!(
                "texture pixel buffer is {} bytes, expected {expected} for {width}x{height} RGBA",
                pixels.len()
            )));
        }
        self.upload(gl, width, height, pixels)
    }

    fn upload(
        &mut self,
        gl: &glow::Context,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<(), GfxError> {
        let raw = unsafe { gl.create_texture() }.map_err(GfxError::Init)?;

        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(raw));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(pixels)),
            );
            gl.generate_mipmap(glow::TEXTURE_2D);

            gl.bind_texture(glow::TEXTURE_2D, None);
        }

        self.raw = Some(raw);
        self.width = width;
        self.height = height;
        self.lifecycle.mark_ready();
        Ok(())
    }

    /// Binds this texture to the active texture unit.
    ///
    /// Idempotent; no side effect beyond the global texture binding.
    pub fn bind(&self, gl: &glow::Context) -> Result<(), GfxError> {
        let raw = self.raw_handle("bind")?;
        unsafe { gl.bind_texture(glow::TEXTURE_2D, Some(raw)) };
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn raw_handle(&self, op: &'static str) -> Result<glow::Texture, GfxError> {
        self.lifecycle.require_ready(op)?;
        Ok(self.raw.expect("Ready state implies a live handle"))
    }
}

impl Default for Texture {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeResource for Texture {
    fn state(&self) -> ResourceState {
        self.lifecycle.state()
    }

    fn dispose(&mut self, gl: &glow::Context) -> Result<(), GfxError> {
        let raw = self.raw_handle("dispose")?;
        unsafe { gl.delete_texture(raw) };
        self.raw = None;
        self.lifecycle.mark_disposed();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_texture_is_uninitialized_with_zero_size() {
        let texture = Texture::new();
        assert_eq!(texture.state(), ResourceState::Uninitialized);
        assert_eq!((texture.width(), texture.height()), (0, 0));
    }

    #[test]
    fn bind_before_create_is_a_usage_error() {
        let texture = Texture::new();
        assert!(matches!(
            texture.raw_handle("bind").unwrap_err(),
            GfxError::Usage {
                resource: "texture",
                state: ResourceState::Uninitialized,
                ..
            }
        ));
    }
}
