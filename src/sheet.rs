use crate::{BoxDanceError, Result};
use image::{imageops, io::Reader, RgbaImage};
use std::path::Path;

/// Number of poses stacked in a sprite sheet.
pub const NUM_BANDS: u32 = 3;

/// A validated sprite sheet: three square-ish poses stacked top to bottom.
///
/// The image is always exactly [NUM_BANDS] times as tall as it is wide.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: RgbaImage,
}

impl SpriteSheet {
    /// Decode the image at `path` and validate its size.
    ///
    /// The format is detected from the file content, so the extension does
    /// not matter. Any pixel format the decoder understands is converted to
    /// RGBA with 8 bits per channel.
    pub fn open(path: &Path) -> Result<Self> {
        let image = Reader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgba8();
        SpriteSheet::new(image)
    }

    /// Wrap an already decoded image.
    ///
    /// Fails with [BoxDanceError::InvalidSize] unless the height is exactly
    /// three times the width. Empty images are rejected too.
    pub fn new(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || width.checked_mul(NUM_BANDS) != Some(height) {
            return Err(BoxDanceError::InvalidSize { width, height });
        }
        Ok(SpriteSheet { image })
    }

    /// Width in pixels. Same for the sheet and every band.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height of the whole sheet in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Height of a single band in pixels.
    pub fn band_height(&self) -> u32 {
        self.height() / NUM_BANDS
    }

    /// Copy out one band. Index `0` is the top pose.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [NUM_BANDS].
    pub fn band(&self, index: u32) -> RgbaImage {
        assert!(index < NUM_BANDS);
        let band_height = self.band_height();
        imageops::crop_imm(&self.image, 0, index * band_height, self.width(), band_height)
            .to_image()
    }

    /// All bands, top to bottom.
    pub fn bands(&self) -> [RgbaImage; NUM_BANDS as usize] {
        [self.band(0), self.band(1), self.band(2)]
    }

    /// The decoded sheet.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
