//! Error output.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use cell_eval::Error;

/// One-line form, used for execution errors and in the REPL.
pub fn render_error(err: &impl std::fmt::Display) -> String {
    format!("error: {err}")
}

/// Render a lexing or parsing error as a labelled source snippet.
///
/// Errors without a location fall back to [`render_error`].
pub fn render_syntax_error(err: &Error, path: &str, source: &str, colors: bool) -> String {
    let Some(span) = err.span() else {
        return format!("{}\n", render_error(err));
    };
    let title = match err {
        Error::Lexing(_) => "lexing error",
        Error::Parsing(_) | Error::Execution(_) => "parse error",
    };
    let range = span.to_range();
    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, path, range.start)
        .with_config(Config::default().with_color(colors))
        .with_message(title)
        .with_label(
            Label::new((path, range))
                .with_message(err.to_string())
                .with_color(Color::Red),
        )
        .finish()
        .write((path, Source::from(source.to_string())), &mut out);
    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("{}\n", render_error(err)),
    }
}
