use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors while setting up the window, the GL context or the text renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    /// window or context creation failed
    #[error("graphics context error: {0}")]
    Context(String),

    /// a shader stage did not compile, carries the driver info log
    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    /// the program did not link, carries the driver info log
    #[error("shader program failed to link: {0}")]
    ShaderLink(String),

    /// the driver placed a uniform somewhere else than the text protocol expects
    #[error("uniform '{name}' is at location {found}, expected {expected}")]
    UniformLayout {
        name: &'static str,
        expected: i32,
        found: i32,
    },

    /// the atlas image could not be read or decoded
    #[error(
        "failed to load glyph atlas {path:?}: {reason} \
         (the atlas is not bundled, place a 10x10 glyph grid image there \
         or point EngineAttributes::with_atlas_path at one)"
    )]
    AtlasLoad { path: PathBuf, reason: String },

    /// the atlas decoded to something unusable
    #[error("glyph atlas has invalid dimensions {width}x{height}")]
    AtlasFormat { width: usize, height: usize },

    /// rejected engine attributes
    #[error("invalid engine attributes: {0}")]
    InvalidConfig(String),
}

/// Errors of a single text draw call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// more characters than the per-instance uniform array holds
    #[error("message has {len} characters, at most {capacity} fit into one draw call")]
    MessageTooLong { len: usize, capacity: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = TextError::MessageTooLong {
            len: 101,
            capacity: 100,
        };
        assert_eq!(
            err.to_string(),
            "message has 101 characters, at most 100 fit into one draw call"
        );

        let err = RenderError::ShaderCompile {
            stage: "vertex",
            log: "0:1: syntax error".to_string(),
        };
        assert!(err.to_string().starts_with("vertex shader failed to compile"));
    }

    #[test]
    fn missing_atlas_tells_how_to_supply_one() {
        let err = RenderError::AtlasLoad {
            path: PathBuf::from("assets/textures/font_atlas.png"),
            reason: "can't fopen".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with(
            "failed to load glyph atlas \"assets/textures/font_atlas.png\": can't fopen"
        ));
        assert!(message.contains("the atlas is not bundled"));
        assert!(message.contains("with_atlas_path"));
    }
}
