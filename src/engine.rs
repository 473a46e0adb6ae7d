use crate::engine_builder::EngineAttributes;
use crate::error::TextError;
use crate::rendering::font_renderer::TextRenderer;
use crate::systems::rendering_system::RenderingSystem;
use crate::systems::video_system::VideoSystem;
use std::error::Error;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// main engine: owns the window, the gl context and the text renderer
pub struct Engine {
    app: Option<Box<dyn TextApp>>,
    exit_state: Option<Result<(), Box<dyn Error>>>,
    rendering_system: Option<RenderingSystem>,
    video_system: VideoSystem,
}

impl Engine {
    /// engine setup on startup
    pub(crate) fn new(config: EngineAttributes) -> Self {
        Self {
            app: None,
            exit_state: Some(Ok(())),
            rendering_system: None,
            video_system: VideoSystem::new(config),
        }
    }

    /// runs the main loop until the window is closed or a fatal error occurs
    pub fn run(&mut self, app: impl TextApp) -> Result<(), Box<dyn Error>> {
        self.app = Some(Box::new(app));
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(self)?;
        self.exit_state.take().unwrap_or(Ok(()))
    }

    /// stores the first fatal error and stops the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Box<dyn Error>) {
        if matches!(self.exit_state, Some(Err(_))) {
            log::debug!("ignoring follow-up error: {error}");
        } else {
            self.exit_state = Some(Err(error));
        }
        event_loop.exit();
    }

    /// gets called every frame: clear, let the app draw its text, present
    fn on_frame_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(rendering_system), Some(app)) =
            (self.rendering_system.as_ref(), self.app.as_mut())
        else {
            return;
        };

        rendering_system.begin_frame();
        if let Err(e) = app.on_frame_update(rendering_system.text_renderer()) {
            self.fail(event_loop, e.into());
            return;
        }

        if let Err(e) = self.video_system.swap_window() {
            self.fail(event_loop, e.into());
            return;
        }
        self.video_system.update_draw_timer();
    }

    /// releases all gl objects while the context is still current
    fn release_gl(&mut self) {
        if self.rendering_system.take().is_some() {
            log::debug!("released text renderer");
        }
    }
}

impl ApplicationHandler for Engine {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(e) = self.video_system.on_resumed(event_loop) {
            self.fail(event_loop, e.into());
            return;
        }
        match RenderingSystem::new(self.video_system.config()) {
            Ok(rendering_system) => self.rendering_system = Some(rendering_system),
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        }
        if let Some(app) = self.app.as_mut() {
            app.init(&mut self.video_system);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => self.on_frame_redraw(event_loop),
            WindowEvent::Resized(size) => self.video_system.on_resize(size.width, size.height),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.video_system.should_redraw() {
            self.video_system.request_redraw();
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.release_gl();
        self.video_system.on_suspended();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release_gl();
    }
}

/// everything an app needs to draw text with the engine
pub trait TextApp: 'static {
    /// called once the window and gl context exist
    fn init(&mut self, _video: &mut VideoSystem) {}
    /// draws this frame's text, an error ends the main loop
    fn on_frame_update(&mut self, text: &TextRenderer) -> Result<(), TextError>;
}
