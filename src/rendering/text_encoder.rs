//! Host side of the text shader protocol.
//!
//! A message is turned into one integer per glyph instance plus a model matrix. Nothing about
//! geometry or texture coordinates is uploaded, the vertex stage derives both.
//!
//! | location    | content                                   |
//! |-------------|-------------------------------------------|
//! | 0           | atlas sampler (texture unit)              |
//! | 1           | model matrix                              |
//! | 2 ..= 101   | character code of instance ``location - 2`` |

use crate::error::TextError;
use crate::glm;
use crate::utils::constants::*;
use gl::types::{GLint, GLsizei};

/// one call to draw a single line of text
#[derive(Debug, Clone, Copy)]
pub struct TextDrawRequest<'a> {
    pub message: &'a str,
    pub origin: glm::Vec3,
    pub scale: glm::Vec3,
}

impl<'a> TextDrawRequest<'a> {
    /// creates a new draw request
    pub fn new(message: &'a str, origin: glm::Vec3, scale: glm::Vec3) -> Self {
        Self {
            message,
            origin,
            scale,
        }
    }

    /// scales the text by the same factor along every axis
    pub fn uniform(message: &'a str, origin: glm::Vec3, scale: f32) -> Self {
        Self::new(message, origin, glm::vec3(scale, scale, scale))
    }
}

/// the uniform payload of a single instanced draw
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedText {
    pub model: glm::Mat4,
    pub codes: Vec<GLint>,
}

impl EncodedText {
    /// number of glyph instances the draw call issues
    #[inline]
    pub fn instance_count(&self) -> GLsizei {
        self.codes.len() as GLsizei
    }

    /// empty messages are never submitted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Receives the uniform writes and the draw call of one encoded message.
///
/// The OpenGL implementation lives in the font renderer, anything else (e.g. a recorder in tests)
/// can verify the protocol without a context.
pub trait UniformTarget {
    /// binds the sampler at ``location`` to texture ``unit``
    fn set_sampler(&mut self, location: GLint, unit: GLint);
    /// uploads a 4x4 matrix (column major)
    fn set_mat4(&mut self, location: GLint, matrix: &glm::Mat4);
    /// uploads a single integer
    fn set_int(&mut self, location: GLint, value: GLint);
    /// draws ``instances`` triangle strips of ``vertices`` vertices each without any bound vertex data
    fn draw_strip_instanced(&mut self, vertices: GLsizei, instances: GLsizei);
}

/// composes ``translate(origin) * scale(scale)``, so scaling happens in local space
pub fn model_matrix(origin: &glm::Vec3, scale: &glm::Vec3) -> glm::Mat4 {
    glm::scale(&glm::translate(&glm::Mat4::identity(), origin), scale)
}

/// maps a character to the code uploaded for it, characters without a glyph become the placeholder
pub fn encode_char(c: char) -> GLint {
    let code = c as u32;
    if (FIRST_GLYPH_CODE as u32..=LAST_GLYPH_CODE as u32).contains(&code) {
        code as GLint
    } else {
        PLACEHOLDER_CHAR as GLint
    }
}

/// Encodes a draw request into its uniform payload.
///
/// Messages longer than the uniform array are rejected before anything is computed.
pub fn encode(request: &TextDrawRequest) -> Result<EncodedText, TextError> {
    let len = request.message.chars().count();
    if len > MAX_MESSAGE_LEN {
        return Err(TextError::MessageTooLong {
            len,
            capacity: MAX_MESSAGE_LEN,
        });
    }

    let codes: Vec<GLint> = request.message.chars().map(encode_char).collect();
    let replaced = request
        .message
        .chars()
        .zip(codes.iter())
        .filter(|(c, code)| *c as u32 != **code as u32)
        .count();
    if replaced > 0 {
        log::warn!(
            "{replaced} character(s) of {:?} are not in the atlas and render as '{PLACEHOLDER_CHAR}'",
            request.message
        );
    }

    Ok(EncodedText {
        model: model_matrix(&request.origin, &request.scale),
        codes,
    })
}

/// Writes the payload to the target and issues the draw. Empty payloads touch nothing.
pub fn submit(encoded: &EncodedText, sampler_unit: GLint, target: &mut impl UniformTarget) {
    if encoded.is_empty() {
        return;
    }
    target.set_sampler(SAMPLER_LOCATION, sampler_unit);
    target.set_mat4(MODEL_LOCATION, &encoded.model);
    for (instance, code) in encoded.codes.iter().enumerate() {
        target.set_int(TEXT_LOCATION + instance as GLint, *code);
    }
    target.draw_strip_instanced(VERTICES_PER_GLYPH, encoded.instance_count());
}
