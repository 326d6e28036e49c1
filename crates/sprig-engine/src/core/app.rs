use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the binary crate.
pub trait App {
    /// Called once per rendered frame, between clear and buffer swap.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once when the runtime shuts down, while the GL context is
    /// still current. Release any resources the app created here.
    fn on_exit(&mut self, gl: &glow::Context) {
        let _ = gl;
    }
}
