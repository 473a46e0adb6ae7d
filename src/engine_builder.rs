use crate::engine::Engine;
use crate::error::RenderError;
use crate::glm;
use crate::utils::constants::*;
use crate::utils::file::default_atlas_path;
use std::path::PathBuf;
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

/// Window and renderer settings the engine is built from.
#[derive(Debug, Clone)]
pub struct EngineAttributes {
    pub(crate) title: String,
    pub(crate) size: (u32, u32),
    pub(crate) resizable: bool,
    pub(crate) use_vsync: bool,
    pub(crate) fps_cap: Option<f64>,
    pub(crate) enforced_ratio: Option<f32>,
    pub(crate) clear_color: glm::Vec4,
    pub(crate) atlas_path: PathBuf,
}

impl EngineAttributes {
    /// default attributes: an 800x600 window keeping the 4:3 ratio the text shader expects
    pub fn new() -> Self {
        Self {
            title: WIN_TITLE.to_string(),
            size: (DEFAULT_WIN_WIDTH, DEFAULT_WIN_HEIGHT),
            resizable: true,
            use_vsync: true,
            fps_cap: None,
            enforced_ratio: Some(TARGET_ASPECT_RATIO),
            clear_color: DEFAULT_CLEAR_COLOR,
            atlas_path: default_atlas_path(),
        }
    }

    /// sets the window title
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// sets the inner window size in logical pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// enables/disables window resizing
    pub fn with_resizable(mut self, flag: bool) -> Self {
        self.resizable = flag;
        self
    }

    /// enables/disables vsync
    pub fn with_vsync(mut self, flag: bool) -> Self {
        self.use_vsync = flag;
        self
    }

    /// caps the frame rate (``None`` renders as fast as possible)
    pub fn with_fps_cap(mut self, cap: Option<f64>) -> Self {
        self.fps_cap = cap;
        self
    }

    /// keeps width/height at this ratio when the window is resized (``None`` allows any ratio)
    pub fn with_enforced_ratio(mut self, ratio: Option<f32>) -> Self {
        self.enforced_ratio = ratio;
        self
    }

    /// sets the color the screen is cleared to every frame
    pub fn with_clear_color(mut self, color: glm::Vec4) -> Self {
        self.clear_color = color;
        self
    }

    /// loads the glyph atlas from this file instead of the bundled asset location
    pub fn with_atlas_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.atlas_path = path.into();
        self
    }

    /// checks the attributes and creates the engine
    pub fn build_engine(self) -> Result<Engine, RenderError> {
        self.validate()?;
        Ok(Engine::new(self))
    }

    fn validate(&self) -> Result<(), RenderError> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "window size {}x{} has a zero side",
                self.size.0, self.size.1
            )));
        }
        if let Some(cap) = self.fps_cap {
            if !(cap > 0.0) {
                return Err(RenderError::InvalidConfig(format!(
                    "fps cap must be positive, got {cap}"
                )));
            }
        }
        if let Some(ratio) = self.enforced_ratio {
            if !(ratio > 0.0) {
                return Err(RenderError::InvalidConfig(format!(
                    "enforced ratio must be positive, got {ratio}"
                )));
            }
        }
        Ok(())
    }

    /// generates the winit window attributes
    pub(crate) fn generate_win_attrs(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.size.0, self.size.1))
            .with_resizable(self.resizable)
            .with_transparent(false)
    }
}

impl Default for EngineAttributes {
    fn default() -> Self {
        Self::new()
    }
}
