//! Cell Fmt - printers for tokens and syntax trees.
//!
//! - [`pretty_print`]: indented tree view, one node per line
//! - [`minimise`]: the shortest source text that parses back to the same
//!   tree (without the statement's `;`)
//! - [`format_token`]: one-line token listing
//!
//! Colour output is opt-in via [`ColorMode`].

mod color;
mod minimise;
mod pretty;

pub use color::ColorMode;
pub use minimise::{minimise, minimise_program};
pub use pretty::pretty_print;

use cell_ir::Token;
use color::{colors, Painter};

/// ` [ kind, 'text' ]`, as listed by the `lex` mode.
pub fn format_token(token: &Token, use_colors: bool) -> String {
    let painter = Painter::new(use_colors);
    format!(
        " [ {}, '{}' ]",
        painter.paint(colors::KIND_TOKEN, token.kind.name()),
        painter.paint(colors::STRING, &token.text)
    )
}

#[cfg(test)]
mod tests;
