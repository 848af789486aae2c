// SPDX-License-Identifier: MPL-2.0
//! Command line parsing.

use crate::app::Flags;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub const HELP: &str = "\
IcedCompare - compare two images with a draggable divider

USAGE:
    iced_compare [OPTIONS] [BEFORE [AFTER]]

ARGS:
    BEFORE    Image shown left of the divider
    AFTER     Image shown right of the divider

OPTIONS:
    --lang <LOCALE>       Interface language (e.g. en-US, fr)
    --config-dir <DIR>    Directory holding settings.toml
    -h, --help            Print help
    -V, --version         Print version

ENVIRONMENT:
    ICED_COMPARE_CONFIG_DIR    Config directory when --config-dir is absent
    RUST_LOG                   Log filter (default: info)
";

/// What the process should do after parsing its arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(Flags),
    Help,
    Version,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parses process arguments, excluding the program name.
///
/// # Errors
///
/// Fails on malformed option values, unknown options or more than two
/// image paths.
pub fn parse(args: Vec<OsString>) -> Result<Command, CliError> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if args.contains(["-V", "--version"]) {
        return Ok(Command::Version);
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    let mut paths = Vec::new();
    for arg in args.finish() {
        let text = arg.to_string_lossy().into_owned();
        if text.starts_with('-') && text.len() > 1 {
            return Err(CliError::UnknownOption(text));
        }
        if paths.len() == 2 {
            return Err(CliError::UnexpectedArgument(text));
        }
        paths.push(PathBuf::from(arg));
    }

    let mut paths = paths.into_iter();
    Ok(Command::Run(Flags {
        lang,
        config_dir,
        before: paths.next(),
        after: paths.next(),
    }))
}
