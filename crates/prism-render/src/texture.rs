//! Decoded images ready for upload.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has no pixels")]
    Empty,
}

/// Tightly packed RGBA8 pixels, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty);
        }
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    pub fn solid(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: rgba.to_vec(),
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }
}
