//! `%`-prefixed word tokens: predefined level abbreviations, the current level, and
//! call-site context.
//!
//! All three passes share one scanner. `%%` is an escape and is skipped untouched so the
//! date/time pass can turn it into a literal `%`.

use crate::level::Level;
use std::path::Path;

/// Abbreviations resolved to a level's canonical word.
pub const PREDEFINED: &[(&str, Level)] = &[
    ("tr", Level::Trace),
    ("dbg", Level::Debug),
    ("inf", Level::Info),
    ("wn", Level::Warn),
    ("er", Level::Error),
    ("crt", Level::Critical),
];

/// Where a log call came from. Filled in by the call-site macros.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallSite {
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
}

impl CallSite {
    #[must_use]
    pub fn new(file: &str, line: u32, function: &str) -> Self {
        Self {
            file: Some(file.to_string()),
            line: Some(line),
            function: Some(function.to_string()),
        }
    }

    /// `%src` shows only the file name; `%fsrc` shows the path as captured.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        let file = self.file.as_deref()?;
        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .or(Some(file))
    }
}

/// Last path segment of a `type_name` function path, skipping closure frames.
///
/// `app::net::connect::{{closure}}` becomes `connect`.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(full: &str) -> &str {
    let mut path = full;
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

/// Walks `text`, offering the body after each `%` (and optional `^`) to `resolve`.
///
/// `resolve` returns how many bytes of the body it consumed and the replacement. A `None`
/// keeps the `%` literal and scanning resumes right after it.
pub(crate) fn replace_tokens<F>(text: &str, mut resolve: F) -> String
where
    F: FnMut(&str, bool) -> Option<(usize, String)>,
{
    if !text.contains('%') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(escaped) = after.strip_prefix('%') {
            out.push_str("%%");
            rest = escaped;
            continue;
        }

        let (body, upper) = after
            .strip_prefix('^')
            .map_or((after, false), |b| (b, true));

        if let Some((consumed, replacement)) = resolve(body, upper) {
            out.push_str(&replacement);
            rest = &body[consumed..];
        } else {
            out.push('%');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

const fn level_word(level: Level, upper: bool) -> &'static str {
    if upper {
        level.upper_name()
    } else {
        level.name()
    }
}

/// `%tr` → `Trace`, `%^er` → `ERROR`, and so on.
#[must_use]
pub fn resolve_predefined(text: &str) -> String {
    replace_tokens(text, |body, upper| {
        PREDEFINED
            .iter()
            .find(|(abbr, _)| body.starts_with(*abbr))
            .map(|(abbr, level)| (abbr.len(), level_word(*level, upper).to_string()))
    })
}

/// `%lvl` / `%^lvl` → name of `current`.
#[must_use]
pub fn resolve_level(text: &str, current: Level) -> String {
    replace_tokens(text, |body, upper| {
        body.starts_with("lvl")
            .then(|| (3, level_word(current, upper).to_string()))
    })
}

/// `%src`, `%fsrc`, `%ln`, `%func` → call-site values, empty when unknown.
#[must_use]
pub fn resolve_context(text: &str, site: Option<&CallSite>) -> String {
    replace_tokens(text, |body, upper| {
        if upper {
            return None;
        }
        let (len, value) = if body.starts_with("fsrc") {
            (4, site.and_then(|s| s.file.clone()))
        } else if body.starts_with("src") {
            (3, site.and_then(CallSite::file_name).map(ToString::to_string))
        } else if body.starts_with("ln") {
            (2, site.and_then(|s| s.line).map(|l| l.to_string()))
        } else if body.starts_with("func") {
            (4, site.and_then(|s| s.function.clone()))
        } else {
            return None;
        };
        Some((len, value.unwrap_or_default()))
    })
}
