//! CPU mirror of the vertex stage in ``assets/shaders/text/bufferless.vert``.
//!
//! The shader only ever sees a vertex id (0..4), an instance id and one character code per
//! instance. Everything here computes the exact same values from the exact same constants,
//! so the geometry can be checked without a GPU. The shader's constant block is generated
//! from the tables below ([`vertex_shader_source`]), the shader file only holds the body.

use crate::glm;
use crate::utils::constants::*;
use crate::utils::file::TEXT_VERT;
use crate::utils::tools::to_vec4;

/// unit-square corner for every vertex id, in triangle-strip order
pub const CORNERS: [glm::Vec2; 4] = [
    glm::Vec2::new(1.0, 0.0),
    glm::Vec2::new(0.0, 0.0),
    glm::Vec2::new(1.0, 1.0),
    glm::Vec2::new(0.0, 1.0),
];

/// offset inside the atlas cell for every vertex id (in cell units)
pub const UV_FRACTIONS: [glm::Vec2; 4] = [
    glm::Vec2::new(GLYPH_UV_WIDTH, 1.0),
    glm::Vec2::new(0.0, 1.0),
    glm::Vec2::new(GLYPH_UV_WIDTH, 0.0),
    glm::Vec2::new(0.0, 0.0),
];

/// position of a glyph in the atlas grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub column: i32,
    pub row: i32,
}

impl GlyphCell {
    /// the cell of a character code, ``None`` if the atlas has no glyph for it
    pub fn from_code(code: i32) -> Option<Self> {
        (FIRST_GLYPH_CODE..=LAST_GLYPH_CODE)
            .contains(&code)
            .then(|| Self::from_index(code - FIRST_GLYPH_CODE))
    }

    /// the cell the shader samples for a code, out of range codes are clamped to the first or last glyph
    pub fn from_code_clamped(code: i32) -> Self {
        Self::from_index((code - FIRST_GLYPH_CODE).clamp(0, GLYPH_COUNT - 1))
    }

    fn from_index(index: i32) -> Self {
        Self {
            column: index % ATLAS_GRID_SIZE,
            row: index / ATLAS_GRID_SIZE,
        }
    }

    /// linear index of the cell (row major)
    pub fn index(&self) -> i32 {
        self.row * ATLAS_GRID_SIZE + self.column
    }

    /// texture coordinate of one quad corner inside this cell
    ///
    /// # Panics
    /// if ``vertex_id`` is not in ``0..4``
    pub fn uv(&self, vertex_id: usize) -> glm::Vec2 {
        (glm::vec2(self.column as f32, self.row as f32) + UV_FRACTIONS[vertex_id]) * ATLAS_CELL_UV
    }
}

/// output of one vertex shader invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphVertex {
    pub position: glm::Vec4,
    pub uv: glm::Vec2,
}

/// size of one glyph quad in local space, the aspect corrected and narrowed base scale
pub fn glyph_scale() -> glm::Vec2 {
    let mut scale = glm::vec2(GLYPH_BASE_SCALE, GLYPH_BASE_SCALE).component_mul(&ASPECT_CORRECTION);
    scale.x *= GLYPH_WIDTH_FACTOR;
    scale
}

/// local-space position of one corner of one glyph quad
///
/// # Panics
/// if ``vertex_id`` is not in ``0..4``
pub fn local_position(vertex_id: usize, instance_id: u32) -> glm::Vec2 {
    let scale = glyph_scale();
    let mut pos = CORNERS[vertex_id].component_mul(&scale);
    pos.x += instance_id as f32 * scale.x;
    pos
}

/// Runs the vertex stage for one (vertex id, instance id) pair.
///
/// ``code`` is the value the shader reads from ``text[instance_id]``.
pub fn synthesize_vertex(
    vertex_id: usize,
    instance_id: u32,
    code: i32,
    model: &glm::Mat4,
) -> GlyphVertex {
    let pos = local_position(vertex_id, instance_id);
    GlyphVertex {
        position: model * to_vec4(&glm::vec3(pos.x, pos.y, 0.0)),
        uv: GlyphCell::from_code_clamped(code).uv(vertex_id),
    }
}

/// all four strip vertices of one glyph instance
pub fn instance_vertices(instance_id: u32, code: i32, model: &glm::Mat4) -> [GlyphVertex; 4] {
    std::array::from_fn(|vertex_id| synthesize_vertex(vertex_id, instance_id, code, model))
}

fn glsl_vec2_array(name: &str, values: &[glm::Vec2; 4]) -> String {
    let entries: Vec<String> = values
        .iter()
        .map(|v| format!("vec2({:?}, {:?})", v.x, v.y))
        .collect();
    format!(
        "const vec2 {name}[4] = vec2[4]({});\n",
        entries.join(", ")
    )
}

/// the GLSL constant block shared by host and vertex shader
pub fn shader_constants() -> String {
    let mut block = String::new();
    block += &format!("#define TEXT_CAPACITY {MAX_MESSAGE_LEN}\n");
    block += &glsl_vec2_array("CORNERS", &CORNERS);
    block += &glsl_vec2_array("UV_FRACTIONS", &UV_FRACTIONS);
    block += &format!("const float BASE_SCALE = {GLYPH_BASE_SCALE:?};\n");
    block += &format!(
        "const vec2 ASPECT_CORRECTION = vec2({:?}, {:?});\n",
        ASPECT_CORRECTION.x, ASPECT_CORRECTION.y
    );
    block += &format!("const float WIDTH_FACTOR = {GLYPH_WIDTH_FACTOR:?};\n");
    block += &format!("const int FIRST_GLYPH = {FIRST_GLYPH_CODE};\n");
    block += &format!("const int GRID_SIZE = {ATLAS_GRID_SIZE};\n");
    block += &format!("const int GLYPH_COUNT = {GLYPH_COUNT};\n");
    block += &format!("const float CELL_UV = {ATLAS_CELL_UV:?};\n");
    block
}

/// complete vertex shader: version line, generated constants, then the shader body
pub fn vertex_shader_source() -> String {
    format!("#version 450 core\n\n{}\n{}", shader_constants(), TEXT_VERT)
}
