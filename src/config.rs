use crate::OutputFormats;
use log::Level;
use std::path::PathBuf;

/// Everything a conversion run needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// A sprite sheet or a folder of sprite sheets.
    pub input: PathBuf,
    /// Folder receiving the `PNG/` and `GIF/` subfolders. Defaults to the
    /// folder of the input.
    pub output: Option<PathBuf>,
    /// Formats to write.
    pub formats: OutputFormats,
    /// Maximum level the command line logger prints.
    pub log_level: Level,
}

impl Config {
    /// Convert `input` into all formats, writing next to the input.
    pub fn new(input: impl Into<PathBuf>) -> Config {
        Config {
            input: input.into(),
            output: None,
            formats: OutputFormats::default(),
            log_level: Level::Info,
        }
    }

    /// Write into `output` instead of the input folder.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Config {
        self.output = Some(output.into());
        self
    }

    /// Only write the given formats.
    pub fn with_formats(mut self, formats: OutputFormats) -> Config {
        self.formats = formats;
        self
    }
}
