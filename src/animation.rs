use crate::{gif_anim, png_anim, sheet::NUM_BANDS, OutputFormat, Result};
use image::RgbaImage;
use log::debug;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Band indices making up the bounce: top, middle, bottom, middle.
pub const BOUNCE_SEQUENCE: [usize; 4] = [0, 1, 2, 1];

/// A looping animation built from the bands of a sprite sheet.
///
/// The middle pose is shown twice per loop so the box moves down and back
/// up again without a jump at the loop point.
#[derive(Debug, Clone, Copy)]
pub struct Animation<'a> {
    frames: [&'a RgbaImage; BOUNCE_SEQUENCE.len()],
}

impl<'a> Animation<'a> {
    /// Arrange the bands of a sheet into the bounce sequence.
    ///
    /// # Panics
    ///
    /// Panics if the bands do not all have the same dimensions.
    pub fn bounce(bands: &'a [RgbaImage; NUM_BANDS as usize]) -> Animation<'a> {
        let size = bands[0].dimensions();
        assert!(bands.iter().all(|band| band.dimensions() == size));
        Animation {
            frames: BOUNCE_SEQUENCE.map(|index| &bands[index]),
        }
    }

    /// Number of frames in one loop.
    pub fn num_frames(&self) -> u32 {
        self.frames.len() as u32
    }

    /// Width and height of every frame in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.frames[0].dimensions()
    }

    /// A single frame.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `num_frames`.
    pub fn frame(&self, index: u32) -> &'a RgbaImage {
        self.frames[index as usize]
    }

    /// Frames in playback order.
    pub fn frames(&self) -> impl Iterator<Item = &'a RgbaImage> + '_ {
        self.frames.iter().copied()
    }

    /// Encode the animation into `output`.
    pub fn write<W: Write>(&self, format: OutputFormat, output: W) -> Result<()> {
        match format {
            OutputFormat::Png => png_anim::encode(self, output),
            OutputFormat::Gif => gif_anim::encode(self, output),
        }
    }

    /// Encode the animation into the file at `path`. An existing file is
    /// overwritten.
    pub fn save(&self, format: OutputFormat, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(format, &mut writer)?;
        writer.flush()?;
        debug!("Wrote {} animation to {}", format, path.display());
        Ok(())
    }
}
