//! Command line options.

use cell_fmt::ColorMode;
use cell_passes::Processor;
use std::fmt::Write;
use thiserror::Error;

/// What to do with the sources.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Evaluate.
    #[default]
    Execute,
    /// Print tokens.
    Lex,
    /// Print each statement as a tree.
    Parse,
    /// Print the program as compact source.
    Minimise,
}

impl Mode {
    fn from_command(command: &str) -> Option<Self> {
        match command {
            "lex" => Some(Mode::Lex),
            "parse" => Some(Mode::Parse),
            "minimise" => Some(Mode::Minimise),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Passes to run on each statement, in command line order.
    pub processors: Vec<Processor>,
    pub color: ColorMode,
    /// Source files; empty means read from standard input. A `-` entry
    /// reads standard input at that point.
    pub sources: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColor(String),
}

/// Parse the arguments after the program name.
///
/// The first non-option argument may name a mode (`lex`, `parse`,
/// `minimise`); every other non-option argument is a source.
pub fn parse_args(args: &[String]) -> Result<Action, OptionsError> {
    let mut options = Options::default();
    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(Action::Help);
        } else if arg == "-V" || arg == "--version" {
            return Ok(Action::Version);
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value)
                .ok_or_else(|| OptionsError::InvalidColor(value.to_string()))?;
        } else if let Some(name) = arg.strip_prefix("--") {
            let processor = Processor::from_name(name)
                .ok_or_else(|| OptionsError::UnknownOption(arg.clone()))?;
            if !options.processors.contains(&processor) {
                options.processors.push(processor);
            }
        } else if arg.starts_with('-') && arg != "-" {
            return Err(OptionsError::UnknownOption(arg.clone()));
        } else if options.sources.is_empty() && options.mode == Mode::Execute {
            match Mode::from_command(arg) {
                Some(mode) => options.mode = mode,
                None => options.sources.push(arg.clone()),
            }
        } else {
            options.sources.push(arg.clone());
        }
    }
    Ok(Action::Run(options))
}

pub fn usage() -> String {
    let mut text = String::from(
        "Usage: cell [options] [command] [sources...]\n\
         \n\
         Commands:\n  \
           (none)      Run the sources\n  \
           lex         Print the tokens of the sources\n  \
           parse       Print the syntax tree of each statement\n  \
           minimise    Print the sources as compact code\n\
         \n\
         With no sources, or a source named '-', reads standard input.\n\
         \n\
         Options:\n",
    );
    for processor in Processor::ALL {
        let about = match processor {
            Processor::Fold => "Fold arithmetic on number literals",
            Processor::Obfuscate => "Rename user-defined symbols",
        };
        let _ = writeln!(text, "  --{:<18}{about}", processor.name());
    }
    text.push_str(
        "  --color=<mode>      Colour output: auto, always, never\n  \
           -h, --help          Show this help\n  \
           -V, --version       Show the version\n",
    );
    text
}
