//! Sandbox binary: one checkerboard sprite steered with WASD / arrow keys,
//! spinning slowly. Escape or closing the window exits.

use std::path::PathBuf;

use anyhow::Result;
use sprig_engine::coords::Vec2;
use sprig_engine::core::{App, AppControl, FrameCtx};
use sprig_engine::gfx::{GfxError, NativeResource, Texture};
use sprig_engine::input::Key;
use sprig_engine::logging;
use sprig_engine::render::Sprite;
use sprig_engine::window::{Runtime, RuntimeConfig};

const MOVE_SPEED: f32 = 240.0; // world units per second
const SPIN_SPEED: f32 = 0.8; // radians per second
const SPRITE_SIZE: f32 = 128.0;

struct Demo {
    texture: Option<Texture>,
    position: Vec2,
    angle: f32,
}

impl Demo {
    fn new() -> Self {
        Self {
            texture: None,
            position: Vec2::new(400.0, 300.0),
            angle: 0.0,
        }
    }
}

impl App for Demo {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        // Textures need a live GL context, so the demo texture is created on
        // the first frame rather than in main.
        if self.texture.is_none() {
            match build_checker_texture(ctx.gl) {
                Ok(texture) => self.texture = Some(texture),
                Err(err) => {
                    log::error!("failed to create demo texture: {err}");
                    return AppControl::Exit;
                }
            }
        }
        let Some(texture) = self.texture.as_ref() else {
            return AppControl::Exit;
        };

        if ctx.input.is_key_down(Key::Escape) {
            return AppControl::Exit;
        }

        let step = MOVE_SPEED * ctx.time.dt;
        if ctx.input.is_key_down(Key::W) || ctx.input.is_key_down(Key::ArrowUp) {
            self.position.y += step;
        }
        if ctx.input.is_key_down(Key::S) || ctx.input.is_key_down(Key::ArrowDown) {
            self.position.y -= step;
        }
        if ctx.input.is_key_down(Key::A) || ctx.input.is_key_down(Key::ArrowLeft) {
            self.position.x -= step;
        }
        if ctx.input.is_key_down(Key::D) || ctx.input.is_key_down(Key::ArrowRight) {
            self.position.x += step;
        }
        self.angle += SPIN_SPEED * ctx.time.dt;

        let mut sprite = Sprite::new(texture);
        sprite.position = self.position;
        sprite.angle = self.angle;
        sprite.scale = Vec2::splat(SPRITE_SIZE);

        if let Err(err) = ctx.renderer.draw_sprite(ctx.gl, &sprite) {
            log::error!("sprite draw failed: {err}");
            return AppControl::Exit;
        }

        AppControl::Continue
    }

    fn on_exit(&mut self, gl: &sprig_engine::glow::Context) {
        if let Some(mut texture) = self.texture.take() {
            if let Err(err) = texture.dispose(gl) {
                log::error!("failed to release demo texture: {err}");
            }
        }
    }
}

/// Builds a 128×128 two-tone checkerboard, 16px cells.
fn build_checker_texture(gl: &sprig_engine::glow::Context) -> Result<Texture, GfxError> {
    const SIZE: u32 = 128;
    const CELL: u32 = 16;

    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let light = ((x / CELL) + (y / CELL)) % 2 == 0;
            if light {
                pixels.extend_from_slice(&[235, 235, 235, 255]);
            } else {
                pixels.extend_from_slice(&[40, 44, 52, 255]);
            }
        }
    }

    let mut texture = Texture::new();
    texture.create_from_rgba(gl, SIZE, SIZE, &pixels)?;
    Ok(texture)
}

fn main() -> Result<()> {
    logging::init_logging(None);

    let config = RuntimeConfig {
        title: "sprig sandbox".to_string(),
        // Resolve assets next to this crate so `cargo run` works from the
        // workspace root too.
        asset_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..RuntimeConfig::default()
    };

    Runtime::run(config, Demo::new())
}
