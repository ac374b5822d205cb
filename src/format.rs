use crate::{BoxDanceError, Result};
use bitflags::bitflags;
use std::{fmt, str::FromStr};

/// A single animated output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Animated PNG (APNG).
    Png,
    /// Animated GIF.
    Gif,
}

impl OutputFormat {
    /// Every supported format, in the order outputs are written.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Png, OutputFormat::Gif];

    /// Name of the subfolder that collects outputs of this format.
    pub fn folder_name(&self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Gif => "GIF",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Gif => "gif",
        }
    }

    /// The flag representing this format in an [OutputFormats] set.
    pub fn flag(&self) -> OutputFormats {
        match self {
            OutputFormat::Png => OutputFormats::PNG,
            OutputFormat::Gif => OutputFormats::GIF,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder_name())
    }
}

bitflags! {
    /// Set of formats selected on the command line.
    pub struct OutputFormats: u8 {
        /// Write animated PNGs.
        const PNG = 0b01;
        /// Write GIFs.
        const GIF = 0b10;
        /// Both formats. Selected by `all`.
        const ALL = Self::PNG.bits | Self::GIF.bits;
    }
}

impl OutputFormats {
    /// Iterate the selected formats.
    pub fn iter(&self) -> impl Iterator<Item = OutputFormat> + '_ {
        OutputFormat::ALL
            .into_iter()
            .filter(move |format| self.contains(format.flag()))
    }
}

impl Default for OutputFormats {
    fn default() -> Self {
        OutputFormats::ALL
    }
}

impl FromStr for OutputFormats {
    type Err = BoxDanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(OutputFormats::ALL),
            "png" => Ok(OutputFormats::PNG),
            "gif" => Ok(OutputFormats::GIF),
            _ => Err(BoxDanceError::Usage(
                "Format is invalid. Specify [all|png|gif].".into(),
            )),
        }
    }
}
