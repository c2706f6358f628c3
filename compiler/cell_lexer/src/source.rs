//! Line-at-a-time character source over a buffered reader.

use std::io::{self, BufRead};
use std::vec;

/// Hook run just before a line is read.
pub type LineHook = Box<dyn FnMut()>;

/// Yields the characters of a reader, reading one line at a time and only
/// once the previous line has been used up.
///
/// This makes a terminal usable as a lexer source: nothing is read until
/// the lexer asks for a character, so tokens (and whole statements) from
/// the first line are available before the second is typed.
///
/// An I/O error ends the stream; it can be retrieved with
/// [`take_error`](ReaderSource::take_error). Invalid UTF-8 is reported as
/// an error too.
pub struct ReaderSource<R> {
    reader: R,
    line: vec::IntoIter<char>,
    before_line: Option<LineHook>,
    error: Option<io::Error>,
    finished: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            line: Vec::new().into_iter(),
            before_line: None,
            error: None,
            finished: false,
        }
    }

    /// Run `hook` before each line is read, e.g. to print a prompt.
    #[must_use]
    pub fn with_line_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.before_line = Some(Box::new(hook));
        self
    }

    /// Drop whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.line = Vec::new().into_iter();
    }

    /// True once the reader is exhausted or failed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn read_line(&mut self) -> bool {
        if let Some(hook) = self.before_line.as_mut() {
            hook();
        }
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => false,
            Ok(_) => {
                self.line = buf.chars().collect::<Vec<_>>().into_iter();
                true
            }
            Err(err) => {
                self.error = Some(err);
                false
            }
        }
    }
}

impl<R: BufRead> Iterator for ReaderSource<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            if let Some(c) = self.line.next() {
                return Some(c);
            }
            if self.finished || !self.read_line() {
                self.finished = true;
                return None;
            }
        }
    }
}
