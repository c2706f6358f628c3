//! Destination for program output.
//!
//! `print` writes through a [`SharedPrintHandler`]: stdout when running
//! programs, an in-memory buffer in tests and when embedding.

use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout (default).
    Stdout,
    /// Captures to a buffer.
    Buffer(Mutex<String>),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout is not the program's error.
                let _ = writeln!(out, "{msg}").and_then(|()| out.flush());
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Captured output. Empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buf) => buf.lock().clone(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("a");
        handler.println("b");
        assert_eq!(handler.get_output(), "a\nb\n");
    }

    #[test]
    fn test_stdout_captures_nothing() {
        assert_eq!(stdout_handler().get_output(), "");
    }
}
