use crate::error::{Error, Result};
use gl::{self, types as gl_t};
use image::GenericImageView;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn gl(self) -> gl_t::GLenum {
        match self {
            Self::Rgb => gl::RGB,
            Self::Rgba => gl::RGBA,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Decoded image data ready to be uploaded, rows go from bottom to top
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::TextureNotFound(path.to_path_buf()));
        }
        // OpenGL expects the first row to be the bottom one
        let image = image::open(path)?.flipv();
        let (width, height) = image.dimensions();
        let (format, pixels) = if image.color().has_alpha() {
            (PixelFormat::Rgba, image.into_rgba8().into_raw())
        } else {
            (PixelFormat::Rgb, image.into_rgb8().into_raw())
        };
        log::debug!(
            "loaded {} ({}x{}, {:?})",
            path.display(),
            width,
            height,
            format
        );
        Ok(Self {
            width,
            height,
            format,
            pixels,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl Wrap {
    fn gl(self) -> gl_t::GLint {
        (match self {
            Self::Repeat => gl::REPEAT,
            Self::MirroredRepeat => gl::MIRRORED_REPEAT,
            Self::ClampToEdge => gl::CLAMP_TO_EDGE,
        }) as gl_t::GLint
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub mipmaps: bool,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            mipmaps: true,
        }
    }
}

impl TextureOptions {
    pub fn wrap(wrap: Wrap) -> Self {
        Self {
            wrap_s: wrap,
            wrap_t: wrap,
            ..Self::default()
        }
    }
}

pub struct Texture {
    id: u32,
}

impl Texture {
    pub unsafe fn load(path: &Path, options: &TextureOptions) -> Result<Self> {
        let image = TextureImage::load(path)?;
        Ok(Self::from_image(&image, options))
    }

    /// NOTE: the texture binding and the unpack alignment in place before
    /// this call are restored after it
    pub unsafe fn from_image(image: &TextureImage, options: &TextureOptions) -> Self {
        debug_assert_eq!(
            image.pixels.len(),
            image.width as usize * image.height as usize * image.format.channels()
        );
        let mut previous = 0;
        gl::GetIntegerv(gl::TEXTURE_BINDING_2D, &mut previous);
        let mut alignment = 4;
        gl::GetIntegerv(gl::UNPACK_ALIGNMENT, &mut alignment);

        let mut id: gl_t::GLuint = 0;
        // Genereate a new texture
        gl::GenTextures(1, &mut id);
        gl::BindTexture(gl::TEXTURE_2D, id);

        // RGB rows are not always 4-byte aligned
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            image.format.gl() as i32,
            image.width as i32,
            image.height as i32,
            0,
            image.format.gl(),
            gl::UNSIGNED_BYTE,
            image.pixels.as_ptr() as *const _,
        );
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, alignment);

        let min_filter = if options.mipmaps {
            gl::GenerateMipmap(gl::TEXTURE_2D);
            gl::LINEAR_MIPMAP_LINEAR
        } else {
            gl::LINEAR
        };
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, options.wrap_s.gl());
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, options.wrap_t.gl());
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, min_filter as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as i32);

        gl::BindTexture(gl::TEXTURE_2D, previous as u32);
        Self { id }
    }

    pub unsafe fn bind(tex: &Self) {
        gl::BindTexture(gl::TEXTURE_2D, tex.id);
    }

    /// Binds the texture to the texture unit `unit`, leaving it active
    pub unsafe fn bind_to_unit(tex: &Self, unit: u32) {
        Self::set_active_unit(unit);
        Self::bind(tex);
    }

    pub unsafe fn set_active_unit(unit: u32) {
        gl::ActiveTexture(gl::TEXTURE0 + unit);
    }

    pub unsafe fn unbind() {
        gl::BindTexture(gl::TEXTURE_2D, 0);
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    #[test]
    fn missing_file() {
        let path = assets::texture("missing.png");
        assert!(matches!(
            TextureImage::load(&path),
            Err(Error::TextureNotFound(p)) if p == path
        ));
    }

    #[test]
    fn alpha_decides_the_format() {
        let container = TextureImage::load(&assets::texture("container.png")).unwrap();
        assert_eq!(container.format, PixelFormat::Rgb);
        assert_eq!(
            container.pixels.len(),
            (container.width * container.height) as usize * 3
        );

        let face = TextureImage::load(&assets::texture("awesomeface.png")).unwrap();
        assert_eq!(face.format, PixelFormat::Rgba);
        assert_eq!(face.pixels.len(), (face.width * face.height) as usize * 4);
    }

    fn load_saved(name: &str, save: impl FnOnce(&Path)) -> TextureImage {
        let path = std::env::temp_dir().join(format!(
            "learn-opengl-{}-{}.png",
            name,
            std::process::id()
        ));
        save(&path);
        let image = TextureImage::load(&path);
        let _ = std::fs::remove_file(&path);
        image.unwrap()
    }

    #[test]
    fn grey_is_expanded_to_rgb() {
        let image = load_saved("grey", |path| {
            image::GrayImage::from_raw(2, 1, vec![10, 200])
                .unwrap()
                .save(path)
                .unwrap()
        });
        assert_eq!(image.format, PixelFormat::Rgb);
        assert_eq!(image.pixels, vec![10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn grey_alpha_is_expanded_to_rgba() {
        let image = load_saved("grey-alpha", |path| {
            image::GrayAlphaImage::from_raw(2, 1, vec![10, 255, 200, 0])
                .unwrap()
                .save(path)
                .unwrap()
        });
        assert_eq!(image.format, PixelFormat::Rgba);
        assert_eq!(image.pixels.len(), 2 * 4);
        assert_eq!(image.pixels, vec![10, 10, 10, 255, 200, 200, 200, 0]);
    }

    #[test]
    fn rows_are_flipped() {
        let path = std::env::temp_dir().join(format!("learn-opengl-flip-{}.png", std::process::id()));
        // top row red, bottom row blue
        image::RgbImage::from_raw(1, 2, vec![255, 0, 0, 0, 0, 255])
            .unwrap()
            .save(&path)
            .unwrap();

        let image = TextureImage::load(&path);
        let _ = std::fs::remove_file(&path);
        let image = image.unwrap();

        assert_eq!((image.width, image.height), (1, 2));
        assert_eq!(image.pixels, vec![0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn options_default_to_repeat() {
        let options = TextureOptions::default();
        assert_eq!(options.wrap_s, Wrap::Repeat);
        assert!(options.mipmaps);
        assert_eq!(Wrap::ClampToEdge.gl(), gl::CLAMP_TO_EDGE as i32);
        assert_eq!(TextureOptions::wrap(Wrap::ClampToEdge).wrap_t, Wrap::ClampToEdge);
    }
}
