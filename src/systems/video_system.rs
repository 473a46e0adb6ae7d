use crate::engine_builder::EngineAttributes;
use crate::error::RenderError;
use crate::utils::tools::log_gl_config;
use gl::types::GLsizei;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use std::ffi::CString;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// holds the window and the gl context
pub struct VideoSystem {
    pub(crate) config_template: ConfigTemplateBuilder,
    pub(crate) display_builder: DisplayBuilder,
    pub(crate) not_current_gl_context: Option<NotCurrentContext>,
    pub(crate) gl_context: Option<PossiblyCurrentContext>,
    pub(crate) gl_surface: Option<Surface<WindowSurface>>,
    pub(crate) window: Option<Window>,
    last_draw_time: Instant,
    fps_cap: Option<f64>,
    stored_config: EngineAttributes,
    skipped_first_resize: bool,
}

impl VideoSystem {
    /// creates a new video state
    pub(crate) fn new(config: EngineAttributes) -> Self {
        let window_attributes = config.generate_win_attrs();

        let config_template = ConfigTemplateBuilder::new().with_alpha_size(8);

        let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        Self {
            config_template,
            display_builder,
            not_current_gl_context: None,
            gl_context: None,
            gl_surface: None,
            window: None,
            last_draw_time: Instant::now(),
            fps_cap: config.fps_cap,
            stored_config: config,
            skipped_first_resize: false,
        }
    }

    /// the attributes the engine was built with
    pub fn config(&self) -> &EngineAttributes {
        &self.stored_config
    }

    /// creates window, surface and context, then loads the gl functions
    pub(crate) fn on_resumed(&mut self, event_loop: &ActiveEventLoop) -> Result<(), RenderError> {
        let (mut window, gl_config) = self
            .display_builder
            .clone()
            .build(event_loop, self.config_template.clone(), gl_config_picker)
            .map_err(|e| RenderError::Context(e.to_string()))?;

        log::info!("Picked a config with {} samples", gl_config.num_samples());

        let raw_window_handle = window
            .as_ref()
            .and_then(|window| window.window_handle().ok())
            .map(|handle| handle.as_raw());

        let gl_display = gl_config.display();

        // explicit uniform locations need at least GLSL 4.30
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 5))))
            .build(raw_window_handle);

        let fallback_context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(None))
            .build(raw_window_handle);

        let not_current_gl_context = match self.not_current_gl_context.take() {
            Some(context) => context,
            None => unsafe {
                gl_display
                    .create_context(&gl_config, &context_attributes)
                    .or_else(|_| gl_display.create_context(&gl_config, &fallback_context_attributes))
                    .map_err(|e| RenderError::Context(e.to_string()))?
            },
        };

        let window = match window.take() {
            Some(window) => window,
            None => glutin_winit::finalize_window(
                event_loop,
                self.stored_config.generate_win_attrs(),
                &gl_config,
            )
            .map_err(|e| RenderError::Context(e.to_string()))?,
        };

        let attrs = window
            .build_surface_attributes(Default::default())
            .map_err(|e| RenderError::Context(e.to_string()))?;

        let gl_surface = unsafe {
            gl_display
                .create_window_surface(&gl_config, &attrs)
                .map_err(|e| RenderError::Context(e.to_string()))?
        };

        let gl_context = not_current_gl_context
            .make_current(&gl_surface)
            .map_err(|e| RenderError::Context(e.to_string()))?;
        // the context has to be current before the text renderer compiles its shaders

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()).cast(),
            Err(_) => std::ptr::null(),
        });
        log_gl_config();

        self.gl_context = Some(gl_context);
        self.gl_surface = Some(gl_surface);
        self.window = Some(window);

        let vsync = if self.stored_config.use_vsync {
            self.enable_vsync()
        } else {
            self.disable_vsync()
        };
        if let Err(res) = vsync {
            log::warn!("Error setting vsync: {res:?}");
        }

        Ok(())
    }

    /// called when the application is suspended
    pub(crate) fn on_suspended(&mut self) {
        // only raised on Android, where the backing NativeWindow for a GL Surface can disappear at any moment
        log::info!("Android window removed");

        self.gl_surface = None;
        self.window = None;
        if let Some(gl_context) = self.gl_context.take() {
            match gl_context.make_not_current() {
                Ok(context) => self.not_current_gl_context = Some(context),
                Err(e) => log::error!("failed to release the gl context: {e}"),
            }
        }
    }

    /// enables vsync for opengl
    pub fn enable_vsync(&mut self) -> Result<(), String> {
        log::debug!("enabled vsync");
        self.set_swap_interval(SwapInterval::Wait(NonZeroU32::MIN))
    }

    /// disables vsync for opengl
    pub fn disable_vsync(&mut self) -> Result<(), String> {
        log::debug!("disabled vsync");
        self.set_swap_interval(SwapInterval::DontWait)
    }

    fn set_swap_interval(&self, interval: SwapInterval) -> Result<(), String> {
        if let (Some(gl_surface), Some(gl_context)) =
            (self.gl_surface.as_ref(), self.gl_context.as_ref())
        {
            return gl_surface
                .set_swap_interval(gl_context, interval)
                .map_err(|err| err.to_string());
        }
        Err(String::from("no gl surface to set the swap interval on"))
    }

    /// call the opengl window swap
    pub(crate) fn swap_window(&self) -> Result<(), RenderError> {
        if let (Some(gl_surface), Some(gl_context)) =
            (self.gl_surface.as_ref(), self.gl_context.as_ref())
        {
            gl_surface
                .swap_buffers(gl_context)
                .map_err(|e| RenderError::Context(e.to_string()))?;
        }
        Ok(())
    }

    /// requests a redraw of the winit window
    pub(crate) fn request_redraw(&self) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    /// resets the internal timer for the update loop
    pub(crate) fn update_draw_timer(&mut self) {
        self.last_draw_time = Instant::now();
    }

    /// checks wether or not a new frame is due
    pub(crate) fn should_redraw(&self) -> bool {
        frame_due(self.last_draw_time.elapsed(), self.fps_cap)
    }

    /// resizes surface and viewport, keeping the enforced side ratio if there is one
    pub(crate) fn on_resize(&mut self, width: u32, height: u32) {
        // Some platforms like EGL require resizing GL surface to update the size.
        // Notable platforms here are Wayland and macOS, others don't require it.
        let (Some(gl_surface), Some(gl_context), Some(window)) = (
            self.gl_surface.as_ref(),
            self.gl_context.as_ref(),
            self.window.as_ref(),
        ) else {
            return;
        };
        let (Some(nz_width), Some(nz_height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            return;
        };

        let mut size_to_use = (nz_width, nz_height);
        if self.skipped_first_resize {
            if let Some(enforced_ratio) = self.stored_config.enforced_ratio {
                let corrected_height = ratio_corrected_height(width, enforced_ratio);
                if corrected_height != height {
                    if let Some(rs) =
                        window.request_inner_size(PhysicalSize::new(width, corrected_height))
                    {
                        if let (Some(w), Some(h)) =
                            (NonZeroU32::new(rs.width), NonZeroU32::new(rs.height))
                        {
                            size_to_use = (w, h);
                        }
                    }
                }
            }
        } else {
            self.skipped_first_resize = true;
        }

        gl_surface.resize(gl_context, size_to_use.0, size_to_use.1);
        unsafe {
            gl::Viewport(
                0,
                0,
                size_to_use.0.get() as GLsizei,
                size_to_use.1.get() as GLsizei,
            );
        }
    }
}

/// height belonging to ``width`` at the given width/height ratio
fn ratio_corrected_height(width: u32, ratio: f32) -> u32 {
    (width as f32 / ratio).round() as u32
}

/// checks if enough time passed since the last frame for the given fps cap
fn frame_due(elapsed: Duration, fps_cap: Option<f64>) -> bool {
    fps_cap.map_or(true, |fps| elapsed >= Duration::from_secs_f64(1.0 / fps))
}

/// find the config with the maximum number of samples
fn gl_config_picker(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            if config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .expect("the display offered no gl configs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_follows_four_by_three() {
        assert_eq!(ratio_corrected_height(800, 4.0 / 3.0), 600);
        assert_eq!(ratio_corrected_height(1024, 4.0 / 3.0), 768);
    }

    #[test]
    fn uncapped_frames_are_always_due() {
        assert!(frame_due(Duration::ZERO, None));
        assert!(!frame_due(Duration::from_millis(1), Some(60.0)));
        assert!(frame_due(Duration::from_millis(20), Some(60.0)));
    }
}
