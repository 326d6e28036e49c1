use winit::window::Window;

use crate::input::{InputFrame, InputState};
use crate::render::Renderer2D;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// The runtime has already cleared the frame; the app draws through
/// `renderer` and the runtime swaps buffers afterwards.
pub struct FrameCtx<'a> {
    pub gl: &'a glow::Context,
    pub renderer: &'a mut Renderer2D,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub window: &'a Window,
}
