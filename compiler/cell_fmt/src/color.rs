/// ANSI escape codes.
pub(crate) mod colors {
    pub const KIND: &str = "\x1b[3;33m"; // Italic yellow
    pub const KIND_TOKEN: &str = "\x1b[33m";
    pub const SYMBOL: &str = "\x1b[33m"; // Yellow
    pub const NUMBER: &str = "\x1b[36m"; // Cyan
    pub const STRING: &str = "\x1b[32m"; // Green
    pub const OPERATOR: &str = "\x1b[1;37m"; // Bold white
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for printers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of `--color=`.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Painter { enabled }
    }

    pub fn paint(self, style: &str, text: &str) -> String {
        if self.enabled {
            format!("{style}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }
}
