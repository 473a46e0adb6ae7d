//! Text rendering without vertex or index buffers.
//!
//! Every glyph is a triangle strip of 4 vertices synthesized in the vertex shader from
//! ``gl_VertexID`` (quad corner) and ``gl_InstanceID`` (character position). The host only
//! uploads a model matrix and one integer per character.

pub mod engine;
pub mod engine_builder;
pub mod error;
pub mod rendering;
pub mod systems;
pub mod utils;

pub use env_logger;
pub use log;
pub use nalgebra_glm as glm;
pub use stb_image;
pub use winit;

/// All features that are very common to use.
pub mod prelude {
    pub use crate::engine::{Engine, TextApp};
    pub use crate::engine_builder::EngineAttributes;
    pub use crate::error::{RenderError, TextError};
    pub use crate::glm;
    pub use crate::glm::vec3;
    pub use crate::glm::Mat4;
    pub use crate::glm::Vec2;
    pub use crate::glm::Vec3;
    pub use crate::glm::Vec4;
    pub use crate::log;
    pub use crate::rendering::font_renderer::TextRenderer;
    pub use crate::rendering::text_encoder::TextDrawRequest;
    pub use crate::systems::video_system::VideoSystem;
    pub use crate::utils::constants::*;
    pub use gl::types::*;
}
