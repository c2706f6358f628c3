//! Cell interpreter front end.
//!
//! The `cell` binary is a thin wrapper: [`parse_args`] turns the command
//! line into [`Options`], and [`commands::run`] drives one of the modes
//! over files or an interactive [`repl`]. Everything runs inside a
//! [`Session`], which owns the interner, the top-level environment with
//! the library loaded, and the configured AST passes.

pub mod commands;
mod options;
pub mod repl;
mod report;
mod session;

pub use options::{parse_args, usage, Action, Mode, Options, OptionsError};
pub use report::{render_error, render_syntax_error};
pub use session::Session;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process and only when
/// `RUST_LOG` is set.
///
/// Events are written to stderr as an indented tree, so nested calls in the
/// interpreter read top to bottom.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
