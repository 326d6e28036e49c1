use std::num::NonZeroU32;

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::error::GfxError;

/// Owns the window's GL plumbing: display config, context, surface, and the
/// glow function-pointer table.
///
/// Creation runs the full bootstrap in one shot; any failure is an
/// initialization error surfaced to the caller, never retried. The window
/// itself is owned here so the GL surface can never outlive it.
pub struct GlContext {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    gl: glow::Context,
}

impl GlContext {
    /// Creates the window, GL context, and surface, and makes the context
    /// current on the calling thread.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        vsync: bool,
    ) -> Result<Self, GfxError> {
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs))
            .build(event_loop, ConfigTemplateBuilder::new(), |mut configs| {
                configs.next().expect("display offered no GL configs")
            })
            .map_err(|e| GfxError::Init(format!("create window and GL display: {e}")))?;
        let window = window
            .ok_or_else(|| GfxError::Init("display builder produced no window".to_string()))?;

        let window_handle = window
            .window_handle()
            .map_err(|e| GfxError::Init(format!("query window handle: {e}")))?
            .as_raw();

        let context_attrs = ContextAttributesBuilder::new().build(Some(window_handle));
        let not_current = unsafe {
            gl_config
                .display()
                .create_context(&gl_config, &context_attrs)
        }
        .map_err(|e| GfxError::Init(format!("create GL context: {e}")))?;

        let size = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window_handle,
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
        );
        let surface = unsafe {
            gl_config
                .display()
                .create_window_surface(&gl_config, &surface_attrs)
        }
        .map_err(|e| GfxError::Init(format!("create window surface: {e}")))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|e| GfxError::Init(format!("make GL context current: {e}")))?;

        if vsync {
            // A refused swap interval is a platform quirk, not a failure.
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                log::warn!("could not enable vsync: {e}");
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|s| {
                gl_config.display().get_proc_address(s).cast()
            })
        };

        Ok(Self {
            window,
            surface,
            context,
            gl,
        })
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), GfxError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| GfxError::Init(format!("present frame: {e}")))
    }
}
