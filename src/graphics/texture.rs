use std::{fmt::Debug, io::Cursor, path::Path, sync::Arc};

use image::{DynamicImage, ImageFormat, ImageReader, Rgba, RgbaImage};

use crate::{colour::Colour, math::Vec2, Error, Result};

#[derive(Clone)]
/// An immutable RGBA image that can be drawn as a sprite, cheap to clone
pub struct Texture(pub(crate) Arc<RgbaImage>);

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.0.width())
            .field("height", &self.0.height())
            .finish_non_exhaustive()
    }
}

impl Texture {
    /// Create a new texture by loading an image from the filesystem
    pub fn new(filename: impl AsRef<Path>) -> Result<Self> {
        let filename = filename.as_ref();
        let image = ImageReader::open(filename)
            .map_err(|source| Error::Io {
                path: filename.to_path_buf(),
                source,
            })?
            .decode()?;
        log::debug!(
            "loaded texture {} ({}x{})",
            filename.display(),
            image.width(),
            image.height()
        );
        Ok(Self::new_from_image(image))
    }
    /// Creates a new texture from encoded image data of an optionally specified format.
    pub fn new_from_file_format(file_data: &[u8], format_hint: Option<ImageFormat>) -> Result<Self> {
        let mut reader = ImageReader::new(Cursor::new(file_data));
        match format_hint {
            Some(fmt) => reader.set_format(fmt),
            None => {
                reader = reader.with_guessed_format().map_err(|source| Error::Io {
                    path: "<memory>".into(),
                    source,
                })?
            }
        }
        Ok(Self::new_from_image(reader.decode()?))
    }
    /// Create a new texture by filling it up in a single colour
    pub fn new_fill(width: u32, height: u32, colour: impl Into<Colour>) -> Self {
        let c = colour.into().to_rgba8();
        Texture(Arc::new(RgbaImage::from_pixel(width, height, Rgba(c))))
    }
    /// Create a new texture out of an image from the image crate
    pub fn new_from_image(img: DynamicImage) -> Self {
        Texture(Arc::new(img.to_rgba8()))
    }
    /// Create a new texture out of a size and raw RGBA data
    pub fn new_from_data(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        RgbaImage::from_raw(width, height, data.to_vec())
            .map(|img| Texture(Arc::new(img)))
            .ok_or(Error::InvalidTextureData {
                width,
                height,
                len: data.len(),
            })
    }
    /// Size of the texture, in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.0.width(), self.0.height())
    }
    /// The colour of a pixel, clamping out of range coordinates to the nearest edge
    pub fn sample(&self, x: i64, y: i64) -> Colour {
        let (w, h) = self.0.dimensions();
        if w == 0 || h == 0 {
            return Colour::TRANSPARENT;
        }
        let x = x.clamp(0, w as i64 - 1) as u32;
        let y = y.clamp(0, h as i64 - 1) as u32;
        Colour::from_rgba8(self.0.get_pixel(x, y).0)
    }
    /// The underlying image
    pub fn image(&self) -> &RgbaImage {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_identity() {
        let a = Texture::new_fill(2, 2, Colour::RED);
        let b = Texture::new_fill(2, 2, Colour::RED);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn raw_data_must_match_the_size() {
        let tex = Texture::new_from_data(1, 2, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        assert_eq!(tex.size(), Vec2::new(1, 2));
        assert_eq!(tex.sample(0, 1), Colour::BLUE);
        assert_eq!(tex.sample(-4, -4), Colour::RED);
        assert!(matches!(
            Texture::new_from_data(2, 2, &[0; 3]),
            Err(Error::InvalidTextureData { len: 3, .. })
        ));
    }

    #[test]
    fn missing_files_report_their_path() {
        let err = Texture::new("does/not/exist.png").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
