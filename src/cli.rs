//! Command line parsing for the `boxdance` binary.

use crate::{Config, OutputFormats};
use clap::{
    builder::{OsStringValueParser, TypedValueParser}, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches,
    Command,
};
use log::Level;
use std::{ffi::OsString, path::PathBuf};

static NOTES: &str = "Notes:
    The animation of GIFs will be ever so slightly slower than normal due to
    limitations of the GIF format.";

/// Build the command line definition.
pub fn command() -> Command {
    Command::new("boxdance")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns a dancing box sprite sheet (three poses stacked vertically) into looping animated PNG and GIF files.")
        .after_help(NOTES)
        .arg(
            Arg::new("input")
                .required(true)
                .value_parser(OsStringValueParser::new().try_map(parse_input))
                .help("Input file or folder."),
        )
        .arg(
            Arg::new("output")
                .value_parser(value_parser!(PathBuf))
                .help("Output folder. Defaults to the input folder."),
        )
        .arg(
            Arg::new("format")
                .default_value("all")
                .value_parser(parse_formats)
                .help("Formats to write: \"all\", \"png\" or \"gif\"."),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .action(ArgAction::SetTrue)
                .help("Log everything, including library internals"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log resolved paths and written files"),
        )
        .arg(
            Arg::new("warn")
                .long("warn")
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Only log errors"),
        )
}

/// Parse command line arguments, the first item being the program name.
pub fn parse_args<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut matches = command().try_get_matches_from(args)?;

    let input = match matches.remove_one::<PathBuf>("input") {
        Some(input) => input,
        None => {
            return Err(command().error(
                ErrorKind::MissingRequiredArgument,
                "Input is empty. Needs a path to a file or folder.",
            ))
        }
    };
    let formats = matches
        .remove_one::<OutputFormats>("format")
        .unwrap_or_default();

    Ok(Config {
        input,
        output: matches.remove_one::<PathBuf>("output"),
        formats,
        log_level: log_level(&matches),
    })
}

fn log_level(matches: &ArgMatches) -> Level {
    if matches.get_flag("trace") {
        Level::Trace
    } else if matches.get_flag("debug") {
        Level::Debug
    } else if matches.get_flag("warn") {
        Level::Warn
    } else if matches.get_flag("quiet") {
        Level::Error
    } else {
        Level::Info
    }
}

fn parse_input(value: OsString) -> Result<PathBuf, String> {
    if value.to_string_lossy().trim().is_empty() {
        return Err("Input is empty. Needs a path to a file or folder.".into());
    }
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err("Input is not a path to an existing file or folder.".into());
    }
    Ok(path)
}

fn parse_formats(value: &str) -> Result<OutputFormats, String> {
    value.parse::<OutputFormats>().map_err(|err| err.to_string())
}
