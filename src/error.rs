use std::{error::Error, fmt, io};

/// An error occured while converting a sprite sheet.
#[derive(Debug)]
pub enum BoxDanceError {
    /// The command line or the input path was not usable. String contains
    /// detailed message.
    Usage(String),
    /// The sprite sheet is not exactly three times as tall as it is wide.
    /// Only the offending file is skipped.
    InvalidSize {
        /// Width of the rejected image in pixels.
        width: u32,
        /// Height of the rejected image in pixels.
        height: u32,
    },
    /// A frame is too large to be stored in a GIF (65535 pixels per side).
    TooLarge {
        /// Width of the frame in pixels.
        width: u32,
        /// Height of the frame in pixels.
        height: u32,
    },
    /// The source image could not be decoded.
    Decode(image::ImageError),
    /// Writing the animated PNG failed.
    PngEncode(png::EncodingError),
    /// Writing the GIF failed.
    GifEncode(gif::EncodingError),
    /// An IO error occured while reading a folder or writing an output file.
    Io(io::Error),
}

impl BoxDanceError {
    /// Returns `true` for errors that only affect a single source file. The
    /// batch run logs them and moves on to the next file.
    pub fn is_skippable(&self) -> bool {
        matches!(self, BoxDanceError::InvalidSize { .. })
    }
}

impl From<io::Error> for BoxDanceError {
    fn from(err: io::Error) -> Self {
        BoxDanceError::Io(err)
    }
}

impl From<image::ImageError> for BoxDanceError {
    fn from(err: image::ImageError) -> Self {
        BoxDanceError::Decode(err)
    }
}

impl From<png::EncodingError> for BoxDanceError {
    fn from(err: png::EncodingError) -> Self {
        BoxDanceError::PngEncode(err)
    }
}

impl From<gif::EncodingError> for BoxDanceError {
    fn from(err: gif::EncodingError) -> Self {
        BoxDanceError::GifEncode(err)
    }
}

impl fmt::Display for BoxDanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxDanceError::Usage(msg) => write!(f, "{}", msg),
            BoxDanceError::InvalidSize { width, height } => write!(
                f,
                "Invalid sprite sheet size {}x{}: height must be exactly three times the width",
                width, height
            ),
            BoxDanceError::TooLarge { width, height } => {
                write!(f, "Frame size {}x{} is too large for GIF", width, height)
            }
            BoxDanceError::Decode(err) => write!(f, "Could not decode image: {}", err),
            BoxDanceError::PngEncode(err) => write!(f, "Could not encode PNG: {}", err),
            BoxDanceError::GifEncode(err) => write!(f, "Could not encode GIF: {}", err),
            BoxDanceError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for BoxDanceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoxDanceError::Decode(err) => Some(err),
            BoxDanceError::PngEncode(err) => Some(err),
            BoxDanceError::GifEncode(err) => Some(err),
            BoxDanceError::Io(err) => Some(err),
            _ => None,
        }
    }
}
