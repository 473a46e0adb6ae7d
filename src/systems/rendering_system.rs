use crate::engine_builder::EngineAttributes;
use crate::error::RenderError;
use crate::glm;
use crate::rendering::font_renderer::TextRenderer;

/// owns the renderers and the per frame gl state
pub struct RenderingSystem {
    text_renderer: TextRenderer,
    clear_color: glm::Vec4,
}

impl RenderingSystem {
    /// creates a new rendering system, needs a current gl context
    pub(crate) fn new(config: &EngineAttributes) -> Result<Self, RenderError> {
        let text_renderer = TextRenderer::new(&config.atlas_path)?;
        Ok(Self {
            text_renderer,
            clear_color: config.clear_color,
        })
    }

    /// clears the screen for a new frame
    pub(crate) fn begin_frame(&self) {
        clear_gl_screen(&self.clear_color);
    }

    /// the text renderer the app draws with
    pub fn text_renderer(&self) -> &TextRenderer {
        &self.text_renderer
    }
}

/// clears the opengl viewport
fn clear_gl_screen(color: &glm::Vec4) {
    unsafe {
        gl::ClearColor(color.x, color.y, color.z, color.w);
        gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
    }
}
