use crate::{BoxDanceError, OutputFormat, OutputFormats, Result};
use log::debug;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// Extension of the source files picked up from a folder.
pub const SOURCE_EXTENSION: &str = "png";

/// The files to convert and the folder receiving the results.
#[derive(Debug, Clone)]
pub struct InputSet {
    files: Vec<PathBuf>,
    output_dir: PathBuf,
}

impl InputSet {
    /// Expand `input` into a list of source files.
    ///
    /// A folder contributes every `.png` file directly inside it, sorted by
    /// path. Subfolders are not searched. A file is taken as is, whatever its
    /// extension.
    ///
    /// Without an explicit `output` folder results go next to the input: into
    /// the folder itself, or into the folder containing the file.
    pub fn resolve(input: &Path, output: Option<&Path>) -> Result<InputSet> {
        if input.as_os_str().is_empty() {
            return Err(BoxDanceError::Usage(
                "Input is empty. Needs a path to a file or folder.".into(),
            ));
        }

        let (files, default_output) = if input.is_dir() {
            (collect_sources(input)?, input.to_path_buf())
        } else if input.is_file() {
            let parent = match input.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            (vec![input.to_path_buf()], parent)
        } else {
            return Err(BoxDanceError::Usage(
                "Input is not a path to an existing file or folder.".into(),
            ));
        };

        let output_dir = output.map(Path::to_path_buf).unwrap_or(default_output);
        debug!(
            "Resolved {} source file(s), writing to {}",
            files.len(),
            output_dir.display()
        );
        Ok(InputSet { files, output_dir })
    }

    /// Source files in processing order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Folder below which the format subfolders are created.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn collect_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_source_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map_or(false, |ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// The per-format subfolders of an output folder.
#[derive(Debug, Clone)]
pub struct OutputDirs {
    png: Option<PathBuf>,
    gif: Option<PathBuf>,
}

impl OutputDirs {
    /// Create `PNG/` and/or `GIF/` below `root` for the selected formats.
    /// Existing folders are reused.
    pub fn create(root: &Path, formats: OutputFormats) -> Result<OutputDirs> {
        let mut dirs = OutputDirs {
            png: None,
            gif: None,
        };
        for format in formats.iter() {
            let dir = root.join(format.folder_name());
            if !dir.is_dir() {
                fs::create_dir_all(&dir)?;
                debug!("Created folder {}", dir.display());
            }
            match format {
                OutputFormat::Png => dirs.png = Some(dir),
                OutputFormat::Gif => dirs.gif = Some(dir),
            }
        }
        Ok(dirs)
    }

    /// The subfolder for `format`, if that format is selected.
    pub fn dir(&self, format: OutputFormat) -> Option<&Path> {
        match format {
            OutputFormat::Png => self.png.as_deref(),
            OutputFormat::Gif => self.gif.as_deref(),
        }
    }

    /// Selected formats with the path of the file to write for a source
    /// named `stem`.
    pub fn targets<'a>(
        &'a self,
        stem: &'a OsStr,
    ) -> impl Iterator<Item = (OutputFormat, PathBuf)> + 'a {
        OutputFormat::ALL.into_iter().filter_map(move |format| {
            let dir = self.dir(format)?;
            let mut name = stem.to_os_string();
            name.push(".");
            name.push(format.extension());
            Some((format, dir.join(name)))
        })
    }
}
