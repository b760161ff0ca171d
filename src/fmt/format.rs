//! The per-logger line template and the two passes that wrap a message in it:
//! template merge and indentation.

use super::padding;

/// Marker the message is spliced into, optionally with a padding directive (`%8msg`).
/// Templates without it get the message appended.
pub const MSG_MARKER: &str = "%msg";

/// A user-authored line template such as `"[%F %T] [%^lvl] %msg"`.
///
/// Kept as the raw string: every pass is a permissive string transform, so there is nothing
/// to pre-parse that could fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatTemplate {
    raw: String,
}

impl FormatTemplate {
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            raw: template.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Wraps an already substituted message in the template.
    ///
    /// An empty template, or one identical to the raw message, leaves the message as is.
    #[must_use]
    pub fn merge(&self, raw_message: &str, message: &str) -> String {
        if self.raw.is_empty() || self.raw == raw_message {
            return message.to_string();
        }

        padding::splice_message(&self.raw, message)
            .unwrap_or_else(|| format!("{} {message}", self.raw))
    }
}

impl From<&str> for FormatTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for FormatTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

/// Prepends one tab per indent unit.
#[must_use]
pub fn indent(text: &str, depth: usize) -> String {
    let mut out = String::with_capacity(text.len() + depth);
    out.extend(std::iter::repeat_n('\t', depth));
    out.push_str(text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_splices_at_marker() {
        let template = FormatTemplate::new("[x] %msg (end)");
        assert_eq!(template.merge("m", "m"), "[x] m (end)");
    }

    #[test]
    fn merge_pads_directive_marker() {
        let template = FormatTemplate::new("[%^lvl] %3msg|");
        assert_eq!(template.merge("hello", "hello"), "[%^lvl]    hello|");
    }

    #[test]
    fn merge_appends_without_marker() {
        let template = FormatTemplate::new("[x]");
        assert_eq!(template.merge("m", "m"), "[x] m");
    }

    #[test]
    fn merge_skips_empty_and_identical_templates() {
        assert_eq!(FormatTemplate::default().merge("a {0}", "a 1"), "a 1");
        assert_eq!(FormatTemplate::new("a {0}").merge("a {0}", "a 1"), "a 1");
    }

    #[test]
    fn indent_zero_is_identity() {
        assert_eq!(indent("x", 0), "x");
        assert_eq!(indent("x", 3), "\t\t\tx");
    }
}
