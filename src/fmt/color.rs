//! `{red}`, `{bg-blue}`, `^{green}` markup resolved to 16-color ANSI SGR escapes.
//!
//! The basic 8-color palette is the one every terminal agrees on, so names map straight to
//! SGR codes 30–37 / 40–47, with the `^` marker selecting the bright 90–97 / 100–107 range.

use std::fmt;

/// The eight base ANSI colors in SGR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// Offset within a 30/40/90/100 SGR block.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized bracket name: one reset, 8 foregrounds, 8 `bg-` backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Reset,
    Fg(Color),
    Bg(Color),
}

impl ColorToken {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[m";

    /// Matches a bracket's contents against the 17 known names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        if name == "reset" {
            return Some(Self::Reset);
        }
        match name.strip_prefix("bg-") {
            Some(bg) => Color::from_name(bg).map(Self::Bg),
            None => Color::from_name(name).map(Self::Fg),
        }
    }

    /// SGR number for the token; `bright` adds 60.
    #[must_use]
    pub const fn code(self, bright: bool) -> Option<u8> {
        let bump = if bright { 60 } else { 0 };
        match self {
            Self::Reset => None,
            Self::Fg(c) => Some(30 + c.offset() + bump),
            Self::Bg(c) => Some(40 + c.offset() + bump),
        }
    }

    /// Full escape sequence written in place of the token.
    #[must_use]
    pub fn escape(self, bright: bool) -> String {
        self.code(bright)
            .map_or_else(|| Self::RESET.to_string(), |code| format!("\x1b[{code}m"))
    }
}

/// Whether color markup turns into escapes at all for this build.
#[must_use]
pub const fn compiled_in() -> bool {
    cfg!(feature = "colors")
}

/// Replaces recognized color tokens with escapes, or removes them when `enabled` is false.
///
/// Unrecognized bracket contents, including positional `{n}` leftovers, pass through.
#[must_use]
pub fn resolve(text: &str, enabled: bool) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    let emit = enabled && compiled_in();
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else { break };

        if let Some(token) = ColorToken::parse(&after[..close]) {
            let before = &rest[..open];
            let (before, bright) = before
                .strip_suffix('^')
                .map_or((before, false), |b| (b, true));
            out.push_str(before);
            if emit {
                out.push_str(&token.escape(bright));
            }
            rest = &after[close + 1..];
        } else {
            out.push_str(&rest[..=open]);
            rest = after;
        }
    }

    out.push_str(rest);
    out
}
