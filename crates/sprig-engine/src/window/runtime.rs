use std::path::PathBuf;

use anyhow::{Context as _, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::gfx::GlContext;
use crate::input::{InputFrame, InputState, translate_key_event};
use crate::render::Renderer2D;
use crate::time::FrameClock;

/// Window/runtime configuration.
///
/// One profile is recognized: 800×600 logical, non-resizable, vsync on. The
/// fields make the profile explicit; they are not a runtime-reconfiguration
/// surface.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub logical_size: LogicalSize<f64>,
    pub vsync: bool,

    /// Directory holding `shaders/sprite.vert` and `shaders/sprite.frag`,
    /// resolved relative to the working directory at startup.
    pub asset_dir: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "sprig".to_string(),
            logical_size: LogicalSize::new(800.0, 600.0),
            vsync: true,
            asset_dir: PathBuf::from("assets"),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until it exits or the window is closed.
    ///
    /// Window, GL context, or renderer failures during startup abort the run
    /// and are surfaced as the returned error; nothing is retried.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit event loop")?;
        let mut state = RuntimeState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("event loop terminated with error")?;

        if let Some(err) = state.fatal.take() {
            return Err(err);
        }

        // Orderly teardown while the GL context is still current.
        if let Some(gl) = state.gl.take() {
            state.app.on_exit(gl.context.gl());
            gl.renderer
                .dispose(gl.context.gl())
                .context("failed to release renderer resources")?;
        }

        Ok(())
    }
}

/// Live GL-side state, created on `resumed`.
struct GlState {
    context: GlContext,
    renderer: Renderer2D,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,

    gl: Option<GlState>,
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,

    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            gl: None,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            fatal: None,
            exit_requested: false,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.logical_size)
            .with_resizable(false);

        let context = GlContext::new(event_loop, attrs, self.config.vsync)
            .context("failed to create window and GL context")?;

        let viewport = Viewport::new(
            self.config.logical_size.width as f32,
            self.config.logical_size.height as f32,
        );
        let shader_dir = self.config.asset_dir.join("shaders");
        let renderer = Renderer2D::new(context.gl(), viewport, &shader_dir)
            .context("failed to initialize sprite renderer")?;

        log::info!(
            "window up: {}x{} logical, vsync {}",
            self.config.logical_size.width,
            self.config.logical_size.height,
            if self.config.vsync { "on" } else { "off" }
        );

        self.gl = Some(GlState { context, renderer });
        self.clock.reset();
        Ok(())
    }

    fn abort(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gl) = self.gl.as_mut() else {
            return;
        };

        let time = self.clock.tick();
        gl.renderer.clear(gl.context.gl());

        let control = {
            let mut ctx = FrameCtx {
                gl: gl.context.gl(),
                renderer: &mut gl.renderer,
                input: &self.input_state,
                input_frame: &self.input_frame,
                time,
                window: gl.context.window(),
            };
            self.app.on_frame(&mut ctx)
        };

        // Per-frame transitions are consumed; held-key state persists.
        self.input_frame.clear();

        let swapped = gl.context.swap_buffers();
        if let Err(err) = swapped {
            self.abort(
                event_loop,
                anyhow::Error::new(err).context("failed to present frame"),
            );
            return;
        }

        if control == AppControl::Exit {
            self.exit_requested = true;
            event_loop.exit();
        }
    }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() {
            return;
        }

        if let Err(err) = self.init_window(event_loop) {
            self.abort(event_loop, err);
            return;
        }

        if let Some(gl) = &self.gl {
            gl.context.window().request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; vsync paces the loop.
        if let Some(gl) = &self.gl {
            gl.context.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.exit_requested = true;
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Unrecognized keys are dropped (and logged) in translation.
                if let Some((key, action)) = translate_key_event(&event) {
                    self.input_state
                        .apply_key_event(&mut self.input_frame, key, action);
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }
}
