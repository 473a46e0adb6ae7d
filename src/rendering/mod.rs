pub mod data;
pub mod font_renderer;
pub mod glyph;
pub mod shader;
pub mod text_encoder;
