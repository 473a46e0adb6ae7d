use std::path::PathBuf;

// directory paths
macro_rules! text_shader_path {
    ($file:literal) => {
        concat!(
            concat!(env!("CARGO_MANIFEST_DIR"), "/assets/shaders/text/"),
            $file
        )
    };
}

// shader files
pub(crate) const TEXT_VERT: &str = include_str!(text_shader_path!("bufferless.vert"));
pub(crate) const TEXT_FRAG: &str = include_str!(text_shader_path!("bufferless.frag"));

/// file name of the glyph atlas in the texture asset directory
pub(crate) const ATLAS_FILE_NAME: &str = "font_atlas.png";

/// yields the path of a file in the texture asset directory
pub fn get_texture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("textures")
        .join(file_name)
}

/// the atlas location used when none is configured
pub fn default_atlas_path() -> PathBuf {
    get_texture_path(ATLAS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_shader_matches_uniform_protocol() {
        assert!(TEXT_VERT.contains("layout(location = 1) uniform mat4 model;"));
        assert!(TEXT_VERT.contains("layout(location = 2) uniform int text[TEXT_CAPACITY];"));
        assert!(!TEXT_VERT.contains(" in vec"));
    }

    #[test]
    fn fragment_shader_samples_slot_zero() {
        assert!(TEXT_FRAG.contains("layout(location = 0) uniform sampler2D tex_atlas;"));
    }

    #[test]
    fn atlas_path_points_into_assets() {
        let path = default_atlas_path();
        assert!(path.ends_with("assets/textures/font_atlas.png"));
    }
}
