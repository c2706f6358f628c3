//! Mode drivers and the top-level `run` command.
//!
//! A [`Driver`] runs one [`Mode`] over any character source, so files and
//! standard input share the same code. Files are read whole; standard input
//! goes through the [`repl`](crate::repl).

use crate::report::{render_error, render_syntax_error};
use crate::{repl, Mode, Options, Session};
use cell_eval::Error;
use cell_fmt::{format_token, minimise, pretty_print};
use cell_lexer::Lexer;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing::debug;

/// Failure while running a mode.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Cell(#[from] Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// True when the input ended in the middle of a statement.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RunError::Cell(err) => err.is_recoverable(),
            RunError::Io(_) => false,
        }
    }
}

/// Runs a mode against a session.
#[derive(Clone, Copy)]
pub struct Driver<'s> {
    pub session: &'s Session,
    pub mode: Mode,
    /// Colour the printers' output.
    pub colors: bool,
    /// Print the value of each evaluated statement (unless it is none).
    pub echo_results: bool,
}

impl<'s> Driver<'s> {
    pub fn new(session: &'s Session, mode: Mode) -> Self {
        Driver {
            session,
            mode,
            colors: false,
            echo_results: false,
        }
    }

    /// Process `chars` until it runs out or an error occurs.
    ///
    /// `on_item` is called after each token (lex mode) or statement (every
    /// other mode) has been handled.
    pub fn run<S>(&self, chars: S, out: &mut dyn Write, mut on_item: impl FnMut()) -> Result<(), RunError>
    where
        S: Iterator<Item = char>,
    {
        if self.mode == Mode::Lex {
            for token in Lexer::new(chars) {
                let token = token.map_err(Error::Lexing)?;
                writeln!(out, "{}", format_token(&token, self.colors))?;
                on_item();
            }
            return Ok(());
        }

        let session = self.session;
        for statement in session.statements(chars) {
            let statement = statement?;
            match self.mode {
                Mode::Execute => {
                    let value = session.eval(&statement)?;
                    if self.echo_results && !value.is_none() {
                        session.print_handler().println(&value.to_string());
                    }
                }
                Mode::Parse => {
                    out.write_all(pretty_print(&statement, session.interner(), self.colors).as_bytes())?;
                }
                Mode::Minimise => {
                    write!(out, "{};", minimise(&statement, session.interner()))?;
                    out.flush()?;
                }
                Mode::Lex => {}
            }
            on_item();
        }
        if self.mode == Mode::Minimise {
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Run the command line: every source in order against one session.
pub fn run(options: &Options) -> ExitCode {
    let session = match Session::new(&options.processors) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            return ExitCode::FAILURE;
        }
    };
    let stdout = io::stdout();
    let driver = Driver {
        colors: options.color.should_use_colors(stdout.is_terminal()),
        ..Driver::new(&session, options.mode)
    };
    let stderr_colors = options.color.should_use_colors(io::stderr().is_terminal());
    let mut out = stdout.lock();

    let succeeded = if options.sources.is_empty() {
        run_stdin(&driver, &mut out)
    } else {
        options.sources.iter().all(|source| {
            if source == "-" {
                run_stdin(&driver, &mut out)
            } else {
                run_file(&driver, source, &mut out, stderr_colors)
            }
        })
    };
    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_stdin(driver: &Driver<'_>, out: &mut dyn Write) -> bool {
    let stdin = io::stdin();
    let prompts = stdin.is_terminal();
    let driver = Driver {
        echo_results: true,
        ..*driver
    };
    match repl::run_repl(&driver, stdin.lock(), prompts, out, &mut io::stderr()) {
        Ok(()) => true,
        Err(err) => {
            eprintln!("error: failed to read standard input: {err}");
            false
        }
    }
}

/// Run one file, reporting any error to stderr. Returns false on error.
///
/// Lexing and parsing errors are shown against the source.
pub fn run_file(driver: &Driver<'_>, path: &str, out: &mut dyn Write, stderr_colors: bool) -> bool {
    let Some(source) = read_file(path) else {
        return false;
    };
    debug!(path, mode = ?driver.mode, "running file");
    match driver.run(source.chars(), out, || {}) {
        Ok(()) => true,
        Err(RunError::Cell(err)) if err.span().is_some() => {
            let _ = out.flush();
            eprint!("{}", render_syntax_error(&err, path, &source, stderr_colors));
            false
        }
        Err(err) => {
            let _ = out.flush();
            eprintln!("{}", render_error(&err));
            false
        }
    }
}

/// Read a source file, printing the reason on failure.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            None
        }
    }
}
