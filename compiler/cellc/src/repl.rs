//! Interactive loop over standard input (or any buffered reader).
//!
//! Input is read one line at a time and fed through the same streaming
//! pipeline as files, so a statement runs as soon as its `;` is typed even
//! if more text follows on the line. After an error the rest of the line
//! is dropped and a fresh pipeline starts on the next line, keeping the
//! session's bindings. Input that ends in the middle of a statement ends
//! the session quietly.

use crate::commands::Driver;
use crate::report::render_error;
use crate::Mode;
use cell_lexer::ReaderSource;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::debug;

/// Prompt for the first line of a statement.
pub const PROMPT: &str = ">>> ";
/// Prompt for continuation lines.
pub const CONTINUATION_PROMPT: &str = "... ";

/// Run `driver` over `reader` until it is exhausted.
///
/// Prompts go to stdout when `prompts` is set; errors are written to
/// `errors`, one per line. Fails only if reading or writing fails.
pub fn run_repl<R: BufRead>(
    driver: &Driver<'_>,
    reader: R,
    prompts: bool,
    out: &mut dyn Write,
    errors: &mut dyn Write,
) -> io::Result<()> {
    // Set whenever the last statement (or token) has been handled.
    let at_statement_start = Rc::new(Cell::new(true));
    let mut source = ReaderSource::new(reader);
    if prompts {
        let flag = Rc::clone(&at_statement_start);
        source = source.with_line_hook(move || {
            let prompt = if flag.replace(false) {
                PROMPT
            } else {
                CONTINUATION_PROMPT
            };
            let mut stdout = io::stdout().lock();
            let _ = stdout.write_all(prompt.as_bytes());
            let _ = stdout.flush();
        });
    }

    loop {
        match driver.run(source.by_ref(), out, || at_statement_start.set(true)) {
            Ok(()) => break,
            Err(err) if err.is_recoverable() => {
                debug!(%err, "input ended inside a statement");
                break;
            }
            Err(err) => {
                writeln!(errors, "{}", render_error(&err))?;
                source.discard_line();
                at_statement_start.set(true);
                if source.is_finished() {
                    break;
                }
            }
        }
    }

    if prompts && driver.mode != Mode::Minimise {
        writeln!(out)?;
    }
    match source.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
