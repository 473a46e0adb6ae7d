use crate::error::RenderError;
use crate::utils::constants::*;
use gl::types::*;
use stb_image::image::{Image, LoadResult};
use std::path::Path;

/// decoded RGBA pixels of the glyph atlas
pub struct AtlasImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl AtlasImage {
    /// loads and decodes an atlas image file, always as 4 channels
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let texture: Image<u8> = match stb_image::image::load_with_depth(path, 4, false) {
            LoadResult::ImageU8(im) => im,
            LoadResult::ImageF32(_) => {
                return Err(RenderError::AtlasLoad {
                    path: path.to_path_buf(),
                    reason: "expected an 8 bit image, got HDR data".to_string(),
                })
            }
            LoadResult::Error(reason) => {
                return Err(RenderError::AtlasLoad {
                    path: path.to_path_buf(),
                    reason,
                })
            }
        };
        let image = Self::from_rgba(texture.width, texture.height, texture.data)?;
        log::info!(
            "loaded glyph atlas {:?} ({}x{})",
            path,
            image.width,
            image.height
        );
        Ok(image)
    }

    /// wraps already decoded RGBA pixels, checking that the buffer matches the dimensions
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || data.len() != width * height * 4 {
            return Err(RenderError::AtlasFormat { width, height });
        }
        let grid = ATLAS_GRID_SIZE as usize;
        if width != height || width % grid != 0 {
            log::warn!(
                "glyph atlas is {width}x{height}, glyph cells will not line up with a {grid}x{grid} grid"
            );
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// pixel size of one glyph cell
    pub fn cell_size(&self) -> (usize, usize) {
        let grid = ATLAS_GRID_SIZE as usize;
        (self.width / grid, self.height / grid)
    }
}

/// the atlas texture plus the sampler object that filters it
pub struct GlyphAtlas {
    texture_id: GLuint,
    sampler_id: GLuint,
}

impl GlyphAtlas {
    /// uploads the atlas image and generates its mipmaps
    pub fn upload(image: &AtlasImage) -> Self {
        let mut texture_id = 0;
        let mut sampler_id = 0;
        unsafe {
            gl::GenTextures(1, &mut texture_id);
            gl::ActiveTexture(gl::TEXTURE0 + ATLAS_TEXTURE_UNIT as GLuint);
            gl::BindTexture(gl::TEXTURE_2D, texture_id);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as GLint,
                image.width as GLint,
                image.height as GLint,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                image.data.as_ptr() as *const GLvoid,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);

            // trilinear filtering with as much anisotropy as the driver offers
            let mut max_anisotropy: GLfloat = 0.0;
            gl::GetFloatv(MAX_TEXTURE_MAX_ANISOTROPY, &mut max_anisotropy);
            gl::GenSamplers(1, &mut sampler_id);
            gl::SamplerParameteri(sampler_id, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
            gl::SamplerParameteri(
                sampler_id,
                gl::TEXTURE_MIN_FILTER,
                gl::LINEAR_MIPMAP_LINEAR as GLint,
            );
            gl::SamplerParameteri(sampler_id, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
            gl::SamplerParameteri(sampler_id, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
            if max_anisotropy >= 1.0 {
                gl::SamplerParameterf(sampler_id, TEXTURE_MAX_ANISOTROPY, max_anisotropy);
            }
            log::debug!("atlas sampler uses {max_anisotropy}x anisotropic filtering");
        }

        Self {
            texture_id,
            sampler_id,
        }
    }

    /// binds texture and sampler to a texture unit
    pub fn bind(&self, unit: GLint) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit as GLuint);
            gl::BindTexture(gl::TEXTURE_2D, self.texture_id);
            gl::BindSampler(unit as GLuint, self.sampler_id);
        }
    }
}

impl Drop for GlyphAtlas {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteSamplers(1, &self.sampler_id);
            gl::DeleteTextures(1, &self.texture_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn reference_atlas_has_25px_cells() {
        let image = AtlasImage::from_rgba(250, 250, vec![0; 250 * 250 * 4]).unwrap();
        assert_eq!(image.cell_size(), (25, 25));
    }

    #[test]
    fn mismatched_pixel_buffer_is_rejected() {
        assert!(matches!(
            AtlasImage::from_rgba(250, 250, vec![0; 250 * 250 * 3]),
            Err(RenderError::AtlasFormat {
                width: 250,
                height: 250
            })
        ));
        assert!(AtlasImage::from_rgba(0, 10, Vec::new()).is_err());
    }

    #[test]
    fn missing_atlas_file_fails_fast() {
        let path = PathBuf::from("does/not/exist/font_atlas.png");
        match AtlasImage::load(&path) {
            Err(RenderError::AtlasLoad { path: p, .. }) => assert_eq!(p, path),
            _ => panic!("loading a missing atlas must fail"),
        }
    }
}
