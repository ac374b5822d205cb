#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Turns "dancing box" sprite sheets into looping animations.

A sprite sheet holds three poses stacked on top of each other, so the image
is exactly three times as tall as it is wide. This crate cuts the sheet into
its three bands and plays them top, middle, bottom, middle, over and over.
The result is written as an animated PNG (APNG) and as a GIF.

# Basic Usage

## Convert a folder

[run] does what the `boxdance` binary does: every `.png` file in the folder
is converted and the results are written to `PNG/` and `GIF/` subfolders.

```no_run
use boxdance::{Config, OutputFormats};

let config = Config::new("sprites").with_formats(OutputFormats::ALL);
let summary = boxdance::run(&config)?;
println!("{} converted, {} skipped", summary.converted, summary.skipped);
# Ok::<(), boxdance::BoxDanceError>(())
```

Sheets with the wrong size are skipped with a warning. Decoding and encoding
errors stop the run.

## Work with a single sheet

```no_run
use boxdance::{Animation, OutputFormat, SpriteSheet};
use std::path::Path;

let sheet = SpriteSheet::open(Path::new("box.png"))?;
let bands = sheet.bands();
let anim = Animation::bounce(&bands);
assert_eq!(anim.num_frames(), 4);
anim.save(OutputFormat::Gif, Path::new("box.gif"))?;
# Ok::<(), boxdance::BoxDanceError>(())
```

## Timing

An APNG frame is shown for [APNG_FRAME_DELAY] (one sixth of a second). GIF
counts in hundredths of a second and cannot store that, so GIF frames are
shown for [GIF_FRAME_DELAY] centiseconds instead. Both loop forever.

*/

pub(crate) mod animation;
pub mod cli;
pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod gif_anim;
pub(crate) mod input;
pub(crate) mod png_anim;
pub(crate) mod sheet;
#[cfg(test)]
mod tests;

/// A specialized `Result` type for sprite sheet conversion.
pub type Result<T> = std::result::Result<T, BoxDanceError>;

pub use animation::{Animation, BOUNCE_SEQUENCE};
pub use config::Config;
pub use convert::{convert_file, run, Summary};
pub use error::BoxDanceError;
pub use format::{OutputFormat, OutputFormats};
pub use gif_anim::{GIF_FRAME_DELAY, GIF_QUANTIZE_SPEED};
pub use input::{InputSet, OutputDirs, SOURCE_EXTENSION};
pub use png_anim::{APNG_FRAME_DELAY, APNG_NUM_PLAYS};
pub use sheet::{SpriteSheet, NUM_BANDS};
