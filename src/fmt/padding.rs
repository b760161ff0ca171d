//! Column alignment directives: `%<width>[.<trail>]<token>`.
//!
//! `width` spaces go in front of the token. `trail` spaces go in at the first delimiter after
//! the token, ahead of the delimiter itself, so `"%4.2lvl: x"` becomes `"    %lvl  : x"`.
//! The token is left for the later passes to resolve. A padded `%msg` marker in a template is
//! expanded earlier, by [`splice_message`], while the message is merged in.

use regex::Regex;
use std::sync::LazyLock;

/// Directives past this many spaces are treated as typos and left literal.
pub const MAX_PADDING: usize = 512;

/// Names a padding directive may precede.
pub const PADDABLE_TOKENS: &[&str] = &["msg", "lvl", "tr", "dbg", "inf", "wn", "er", "crt"];

static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(\d+)(?:\.(\d+))?(\^?)(msg|lvl|tr|dbg|inf|wn|er|crt)")
        .expect("Invalid padding regex")
});

static MSG_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:(\d+)(?:\.(\d+))?\^?)?msg").expect("Invalid message marker regex")
});

const fn is_delimiter(c: char) -> bool {
    c == ' ' || c.is_ascii_punctuation()
}

fn parse_amount(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().filter(|&n| n <= MAX_PADDING)
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

/// Replaces every `%msg` or `%<width>[.<trail>]msg` marker in `template` with `message`,
/// padded the way [`apply`] pads other tokens. Trail spaces are placed by the template text
/// after the marker, never by the message.
///
/// `None` when the template has no usable marker.
pub(crate) fn splice_message(template: &str, message: &str) -> Option<String> {
    let mut out = String::with_capacity(template.len() + message.len());
    let mut rest = template;
    let mut found = false;

    while let Some(caps) = MSG_MARKER_REGEX.captures(rest) {
        let Some(whole) = caps.get(0) else { break };
        let lead = caps.get(1).map_or(Some(0), |m| parse_amount(m.as_str()));
        let trail = caps.get(2).map_or(Some(0), |m| parse_amount(m.as_str()));

        out.push_str(&rest[..whole.start()]);
        rest = &rest[whole.end()..];

        let (Some(lead), Some(trail)) = (lead, trail) else {
            out.push_str(whole.as_str());
            continue;
        };

        found = true;
        push_spaces(&mut out, lead);
        out.push_str(message);

        if trail > 0 {
            let split = rest.find(is_delimiter).unwrap_or(rest.len());
            out.push_str(&rest[..split]);
            push_spaces(&mut out, trail);
            rest = &rest[split..];
        }
    }

    if !found {
        return None;
    }
    out.push_str(rest);
    Some(out)
}

/// Expands every padding directive in `text`. Malformed or oversized directives stay as written.
#[must_use]
pub fn apply(text: &str) -> String {
    if !text.contains('%') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(caps) = DIRECTIVE_REGEX.captures(rest) {
        let Some(whole) = caps.get(0) else { break };
        let lead = caps.get(1).and_then(|m| parse_amount(m.as_str()));
        let trail = match caps.get(2) {
            Some(m) => parse_amount(m.as_str()),
            None => Some(0),
        };

        let (Some(lead), Some(trail)) = (lead, trail) else {
            out.push_str(&rest[..whole.end()]);
            rest = &rest[whole.end()..];
            continue;
        };

        out.push_str(&rest[..whole.start()]);
        push_spaces(&mut out, lead);
        out.push('%');
        out.push_str(caps.get(3).map_or("", |m| m.as_str()));
        out.push_str(caps.get(4).map_or("", |m| m.as_str()));
        rest = &rest[whole.end()..];

        if trail > 0 {
            let split = rest.find(is_delimiter).unwrap_or(rest.len());
            out.push_str(&rest[..split]);
            push_spaces(&mut out, trail);
            rest = &rest[split..];
        }
    }

    out.push_str(rest);
    out
}
