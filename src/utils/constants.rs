use crate::glm;
use gl::types::{GLenum, GLint};

pub(crate) const WIN_TITLE: &str = "Look Ma! No vertex buffer!";
pub(crate) const DEFAULT_WIN_WIDTH: u32 = 800;
pub(crate) const DEFAULT_WIN_HEIGHT: u32 = 600;

/// the vertex shader compensates for exactly this side ratio
pub const TARGET_ASPECT_RATIO: f32 = 4.0 / 3.0;

/// neutral grey the screen is cleared to every frame
pub const DEFAULT_CLEAR_COLOR: glm::Vec4 = glm::Vec4::new(0.5, 0.5, 0.5, 0.0);

/// capacity of the ``int text[100]`` uniform array (one slot per glyph instance)
pub const MAX_MESSAGE_LEN: usize = 100;

/// code point of the first glyph in the atlas (space)
pub const FIRST_GLYPH_CODE: i32 = 32;
/// glyphs per atlas row and rows per atlas
pub const ATLAS_GRID_SIZE: i32 = 10;
/// number of glyph cells in the atlas
pub const GLYPH_COUNT: i32 = ATLAS_GRID_SIZE * ATLAS_GRID_SIZE;
/// code point of the last glyph in the atlas
pub const LAST_GLYPH_CODE: i32 = FIRST_GLYPH_CODE + GLYPH_COUNT - 1;
/// glyph drawn in place of characters the atlas does not contain
pub const PLACEHOLDER_CHAR: char = '?';

/// one triangle-strip quad per character
pub const VERTICES_PER_GLYPH: i32 = 4;

/// uniform locations of the shader protocol
pub const SAMPLER_LOCATION: GLint = 0;
pub const MODEL_LOCATION: GLint = 1;
pub const TEXT_LOCATION: GLint = 2;

/// texture unit the atlas is bound to
pub const ATLAS_TEXTURE_UNIT: GLint = 0;

/// shrinks the unit quad so glyphs are not huge in clip space
pub const GLYPH_BASE_SCALE: f32 = 0.4;
/// inverse of the 4:3 target aspect ratio
pub const ASPECT_CORRECTION: glm::Vec2 = glm::Vec2::new(3.0, 4.0);
/// turns square cells into tall rectangles
pub const GLYPH_WIDTH_FACTOR: f32 = 0.5;

/// size of one atlas cell in texture coordinates
pub const ATLAS_CELL_UV: f32 = 0.1;
/// horizontal fraction of a cell that is sampled
pub const GLYPH_UV_WIDTH: f32 = 0.6;

pub const ORIGIN: glm::Vec3 = glm::Vec3::new(0.0, 0.0, 0.0);

// EXT_texture_filter_anisotropic (core since 4.6)
pub(crate) const TEXTURE_MAX_ANISOTROPY: GLenum = 0x84FE;
pub(crate) const MAX_TEXTURE_MAX_ANISOTROPY: GLenum = 0x84FF;
