use crate::coords::Vec2;
use crate::gfx::Texture;

/// A drawable 2D entity: a texture plus position, rotation, and scale.
///
/// Borrows its texture, so it cannot outlive it and owns no native resource
/// itself. Drawing requires the texture to still be `Ready`.
pub struct Sprite<'t> {
    pub texture: &'t Texture,

    /// Center position in world units.
    pub position: Vec2,

    /// Rotation in radians; positive turns clockwise on screen.
    pub angle: f32,

    /// Extent in world units.
    pub scale: Vec2,
}

impl<'t> Sprite<'t> {
    /// Creates a sprite at the origin, unrotated, scaled to the texture's
    /// pixel size.
    pub fn new(texture: &'t Texture) -> Self {
        Self {
            texture,
            position: Vec2::zero(),
            angle: 0.0,
            scale: Vec2::new(texture.width() as f32, texture.height() as f32),
        }
    }
}
