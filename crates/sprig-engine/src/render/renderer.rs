use std::path::Path;

use glow::HasContext;

use super::sprite::Sprite;
use crate::coords::{ColorRgba, Mat4, Vec2, Viewport};
use crate::gfx::{
    GfxError, NativeResource, Shader, ShaderProgram, ShaderStage, load_shader_source,
};

// Unit quad shared by every sprite draw: interleaved position + texcoord.
const QUAD_VERTICES: [f32; 16] = [
    -1.0, -1.0, 0.0, 0.0, // bottom left
    1.0, -1.0, 1.0, 0.0, // bottom right
    1.0, 1.0, 1.0, 1.0, // top right
    -1.0, 1.0, 0.0, 1.0, // top left
];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

const VERT_FILE: &str = "sprite.vert";
const FRAG_FILE: &str = "sprite.frag";

/// Sprite renderer.
///
/// Construction performs the one-time GPU state setup: alpha blending, the
/// background clear color, the shared quad mesh, and the shader program with
/// its fixed orthographic projection. Afterwards each sprite costs one
/// indexed draw of 6 indices.
pub struct Renderer2D {
    program: ShaderProgram,
    quad_vao: glow::VertexArray,
    quad_vbo: glow::Buffer,
    quad_ebo: glow::Buffer,
    clear_color: ColorRgba,
}

impl Renderer2D {
    /// Sets up GPU state and compiles the sprite pipeline.
    ///
    /// Shader sources are read from `shader_dir` (`sprite.vert` and
    /// `sprite.frag`); a missing file or a compile/link failure aborts
    /// construction. The orthographic projection is built from `viewport`
    /// and pushed once; it does not change afterwards.
    pub fn new(
        gl: &glow::Context,
        viewport: Viewport,
        shader_dir: &Path,
    ) -> Result<Self, GfxError> {
        if !viewport.is_valid() {
            return Err(GfxError::Init(format!(
                "viewport {}x{} is not drawable",
                viewport.width, viewport.height
            )));
        }

        let clear_color = ColorRgba::CORNFLOWER;
        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
            gl.clear_color(clear_color.r, clear_color.g, clear_color.b, clear_color.a);
        }

        let quad_vao = unsafe { gl.create_vertex_array() }.map_err(GfxError::Init)?;
        let quad_vbo = unsafe { gl.create_buffer() }.map_err(GfxError::Init)?;
        let quad_ebo = unsafe { gl.create_buffer() }.map_err(GfxError::Init)?;
        unsafe {
            gl.bind_vertex_array(Some(quad_vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(quad_vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_VERTICES),
                glow::STATIC_DRAW,
            );

            // Index binding is recorded in the VAO.
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(quad_ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(&QUAD_INDICES),
                glow::STATIC_DRAW,
            );

            // One attribute: vec4 of (position.xy, texcoord.uv).
            gl.vertex_attrib_pointer_f32(0, 4, glow::FLOAT, false, 4 * 4, 0);
            gl.enable_vertex_attrib_array(0);

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }

        let vert_src = load_shader_source(&shader_dir.join(VERT_FILE))?;
        let frag_src = load_shader_source(&shader_dir.join(FRAG_FILE))?;

        let mut vertex = Shader::new(ShaderStage::Vertex);
        vertex.create(gl, &vert_src)?;
        let mut fragment = Shader::new(ShaderStage::Fragment);
        fragment.create(gl, &frag_src)?;

        let mut program = ShaderProgram::new();
        program.create(gl, vertex, fragment)?;

        program.bind(gl)?;
        let projection = Mat4::ortho(0.0, viewport.width, 0.0, viewport.height, -1.0, 1.0);
        program.set_mat4(gl, "projection", &projection)?;

        Ok(Self {
            program,
            quad_vao,
            quad_vbo,
            quad_ebo,
            clear_color,
        })
    }

    /// Clears the color buffer to the background color.
    pub fn clear(&self, gl: &glow::Context) {
        unsafe { gl.clear(glow::COLOR_BUFFER_BIT) };
    }

    pub fn clear_color(&self) -> ColorRgba {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, gl: &glow::Context, color: ColorRgba) {
        self.clear_color = color;
        unsafe { gl.clear_color(color.r, color.g, color.b, color.a) };
    }

    /// Draws one sprite: bind program and texture, push the model transform,
    /// one indexed draw, unbind the texture.
    pub fn draw_sprite(&self, gl: &glow::Context, sprite: &Sprite<'_>) -> Result<(), GfxError> {
        self.program.bind(gl)?;
        sprite.texture.bind(gl)?;

        let model = sprite_model_matrix(sprite.position, sprite.angle, sprite.scale);
        self.program.set_mat4(gl, "model", &model)?;

        unsafe {
            gl.bind_vertex_array(Some(self.quad_vao));
            gl.draw_elements(
                glow::TRIANGLES,
                QUAD_INDICES.len() as i32,
                glow::UNSIGNED_INT,
                0,
            );
            gl.bind_vertex_array(None);
            gl.bind_texture(glow::TEXTURE_2D, None);
        }
        Ok(())
    }

    /// Releases the program and the quad mesh.
    pub fn dispose(mut self, gl: &glow::Context) -> Result<(), GfxError> {
        self.program.dispose(gl)?;
        unsafe {
            gl.delete_vertex_array(self.quad_vao);
            gl.delete_buffer(self.quad_vbo);
            gl.delete_buffer(self.quad_ebo);
        }
        Ok(())
    }
}

/// Model transform: translate(position) ∘ rotate(angle about −Z) ∘
/// scale(scale · 0.5).
///
/// The half scale maps the quad's ±1 extent to `scale` world units total;
/// rotating about −Z makes positive angles turn clockwise on screen.
fn sprite_model_matrix(position: Vec2, angle: f32, scale: Vec2) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_z(-angle)
        * Mat4::from_scale(Vec2::new(scale.x * 0.5, scale.y * 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec2_eq(actual: Vec2, expected: Vec2) {
        assert!(
            (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn unrotated_sprite_covers_its_scale_around_position() {
        // angle=0, scale=(2,2), position=(10,5): the quad's corners land at
        // exactly (9,4)–(11,6) before projection.
        let model = sprite_model_matrix(Vec2::new(10.0, 5.0), 0.0, Vec2::splat(2.0));

        assert_vec2_eq(model.transform_point(Vec2::new(-1.0, -1.0)), Vec2::new(9.0, 4.0));
        assert_vec2_eq(model.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(11.0, 6.0));
        assert_vec2_eq(model.transform_point(Vec2::new(1.0, -1.0)), Vec2::new(11.0, 4.0));
        assert_vec2_eq(model.transform_point(Vec2::new(-1.0, 1.0)), Vec2::new(9.0, 6.0));
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        // Quarter turn clockwise: the quad's +Y corner direction lands on +X.
        let model = sprite_model_matrix(
            Vec2::new(100.0, 100.0),
            core::f32::consts::FRAC_PI_2,
            Vec2::splat(2.0),
        );
        assert_vec2_eq(
            model.transform_point(Vec2::new(0.0, 1.0)),
            Vec2::new(101.0, 100.0),
        );
    }

    #[test]
    fn quad_mesh_is_two_triangles_over_four_vertices() {
        assert_eq!(QUAD_VERTICES.len(), 4 * 4);
        assert_eq!(QUAD_INDICES, [0, 1, 2, 0, 2, 3]);
        // Every index addresses a real vertex.
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < 4));
    }
}
