//! The rendering pipeline: a message plus positional arguments in, one finished line out.
//!
//! Each pass is a pure `&str -> String` transform in its own module so it can be tested in
//! isolation. [`render`] applies them in a fixed order; later passes see the output of
//! earlier ones, which is why a padded `%lvl` still resolves and why an argument containing
//! `{red}` still gets colored.

pub mod color;
pub mod datetime;
mod format;
pub mod padding;
pub mod placeholder;
pub mod token;

pub use color::{Color, ColorToken};
pub use format::{FormatTemplate, MSG_MARKER, indent};
pub use token::CallSite;

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// Everything besides the message that a rendered line depends on.
///
/// Holding the threshold and the clock reading here keeps [`render`] deterministic: the
/// loggers read the process-wide values once per call and pass them in.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub indent: usize,
    pub colors: bool,
    pub level: Level,
    pub site: Option<&'a CallSite>,
    pub now: DateTime<Local>,
}

impl RenderContext<'_> {
    /// No indent, no colors, no call site.
    #[must_use]
    pub const fn plain(level: Level, now: DateTime<Local>) -> Self {
        RenderContext {
            indent: 0,
            colors: false,
            level,
            site: None,
            now,
        }
    }
}

/// Runs every pass over `message`:
///
/// 1. positional `{n}` substitution
/// 2. merge into `template` (`%msg` splice or append)
/// 3. indentation
/// 4. padding directives
/// 5. color tokens
/// 6. predefined level abbreviations
/// 7. current level
/// 8. call-site context
/// 9. date/time directives
#[must_use]
pub fn render(
    template: &FormatTemplate,
    message: &str,
    args: &[&dyn Display],
    ctx: &RenderContext<'_>,
) -> String {
    let text = placeholder::substitute(message, args);
    let text = template.merge(message, &text);
    let text = indent(&text, ctx.indent);
    let text = padding::apply(&text);
    let text = color::resolve(&text, ctx.colors);
    let text = token::resolve_predefined(&text);
    let text = token::resolve_level(&text, ctx.level);
    let text = token::resolve_context(&text, ctx.site);
    datetime::resolve(&text, &ctx.now)
}

/// Renders a file-name template: no message, no arguments, colors stripped.
#[must_use]
pub fn render_path(template: &str, level: Level, now: DateTime<Local>) -> String {
    render(
        &FormatTemplate::default(),
        template,
        &[],
        &RenderContext::plain(level, now),
    )
}
