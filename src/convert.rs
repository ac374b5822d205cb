use crate::{
    input::{InputSet, OutputDirs},
    Animation, Config, Result, SpriteSheet,
};
use log::{info, warn};
use std::path::Path;

/// Counts of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Sprite sheets written in every selected format.
    pub converted: usize,
    /// Sprite sheets skipped because of their size.
    pub skipped: usize,
}

/// Convert every sprite sheet named by `config`.
///
/// Files are processed one after another. A sheet with the wrong size is
/// skipped with a warning. Any other error stops the run; outputs written
/// up to that point are kept.
pub fn run(config: &Config) -> Result<Summary> {
    let inputs = InputSet::resolve(&config.input, config.output.as_deref())?;
    let dirs = OutputDirs::create(inputs.output_dir(), config.formats)?;

    let mut summary = Summary::default();
    for file in inputs.files() {
        match convert_file(file, &dirs) {
            Ok(()) => summary.converted += 1,
            Err(err) if err.is_skippable() => {
                warn!("Invalid size for image: {}. Skipping.", display_name(file));
                summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        "Converted {} sprite sheet(s), skipped {}",
        summary.converted, summary.skipped
    );
    Ok(summary)
}

/// Convert a single sprite sheet into the formats that have a folder in
/// `dirs`.
pub fn convert_file(file: &Path, dirs: &OutputDirs) -> Result<()> {
    let sheet = SpriteSheet::open(file)?;
    info!("Processing {}", display_name(file));

    let bands = sheet.bands();
    let anim = Animation::bounce(&bands);
    let stem = file.file_stem().unwrap_or_else(|| file.as_os_str());
    for (format, target) in dirs.targets(stem) {
        anim.save(format, &target)?;
    }
    Ok(())
}

fn display_name(file: &Path) -> String {
    file.file_stem()
        .unwrap_or_else(|| file.as_os_str())
        .to_string_lossy()
        .into_owned()
}
