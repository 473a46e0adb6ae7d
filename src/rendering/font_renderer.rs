use crate::error::{RenderError, TextError};
use crate::glm;
use crate::rendering::data::{AtlasImage, GlyphAtlas};
use crate::rendering::glyph::vertex_shader_source;
use crate::rendering::shader::ShaderProgram;
use crate::rendering::text_encoder::{encode, submit, TextDrawRequest, UniformTarget};
use crate::utils::constants::*;
use crate::utils::file::TEXT_FRAG;
use gl::types::*;
use std::path::Path;

/// Renders lines of text without any vertex or index buffer.
///
/// Owns everything the text pass needs for the lifetime of the GL context: the program,
/// the atlas and an empty vertex array (core profiles refuse to draw with none bound).
pub struct TextRenderer {
    program: ShaderProgram,
    atlas: GlyphAtlas,
    vao: GLuint,
}

impl TextRenderer {
    /// compiles the text shaders and uploads the atlas, requires a current GL context
    pub fn new(atlas_path: &Path) -> Result<Self, RenderError> {
        let program = ShaderProgram::new(&vertex_shader_source(), TEXT_FRAG)?;
        program.expect_uniform("tex_atlas", SAMPLER_LOCATION)?;
        program.expect_uniform("model", MODEL_LOCATION)?;
        program.expect_uniform("text", TEXT_LOCATION)?;

        let image = AtlasImage::load(atlas_path)?;
        let atlas = GlyphAtlas::upload(&image);

        let mut vao = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
        }

        Ok(Self {
            program,
            atlas,
            vao,
        })
    }

    /// Draws one line of text: one instanced draw call with a glyph instance per character.
    ///
    /// Rejects messages longer than [`MAX_MESSAGE_LEN`] characters, empty messages draw nothing.
    pub fn draw_text(
        &self,
        message: &str,
        origin: &glm::Vec3,
        scale: &glm::Vec3,
    ) -> Result<(), TextError> {
        self.draw(&TextDrawRequest::new(message, *origin, *scale))
    }

    /// draws an already assembled request
    pub fn draw(&self, request: &TextDrawRequest) -> Result<(), TextError> {
        let encoded = encode(request)?;
        if encoded.is_empty() {
            return Ok(());
        }
        self.program.bind();
        self.atlas.bind(ATLAS_TEXTURE_UNIT);
        unsafe {
            gl::BindVertexArray(self.vao);
        }
        submit(&encoded, ATLAS_TEXTURE_UNIT, &mut GlUniforms);
        unsafe {
            gl::BindVertexArray(0);
        }
        Ok(())
    }
}

impl Drop for TextRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

/// writes the text protocol to the currently bound program
struct GlUniforms;

impl UniformTarget for GlUniforms {
    fn set_sampler(&mut self, location: GLint, unit: GLint) {
        unsafe {
            gl::Uniform1i(location, unit);
        }
    }

    fn set_mat4(&mut self, location: GLint, matrix: &glm::Mat4) {
        unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, matrix.as_ptr());
        }
    }

    fn set_int(&mut self, location: GLint, value: GLint) {
        unsafe {
            gl::Uniform1i(location, value);
        }
    }

    fn draw_strip_instanced(&mut self, vertices: GLsizei, instances: GLsizei) {
        unsafe {
            gl::DrawArraysInstanced(gl::TRIANGLE_STRIP, 0, vertices, instances);
        }
    }
}
