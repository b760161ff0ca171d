//! Last pass: whatever `%` directives remain are strftime specifiers for the local time.
//!
//! Each directive is formatted on its own, so one bad specifier (or a stray `%` in user
//! text) stays literal instead of failing the whole line.

use chrono::{DateTime, Local};
use std::fmt::Write;

/// Length in bytes of the strftime directive at the start of `body` (the text after `%`).
fn directive_len(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'-' | b'_' | b'0')) {
        i += 1;
    }

    match *bytes.get(i)? {
        b'.' => {
            i += 1;
            if matches!(bytes.get(i), Some(b'3' | b'6' | b'9')) {
                i += 1;
            }
            (bytes.get(i) == Some(&b'f')).then_some(i + 1)
        }
        b'3' | b'6' | b'9' => (bytes.get(i + 1) == Some(&b'f')).then_some(i + 2),
        b':' => {
            let colons = bytes[i..].iter().take_while(|&&b| b == b':').count();
            (colons <= 3 && bytes.get(i + colons) == Some(&b'z')).then_some(i + colons + 1)
        }
        b'#' => (bytes.get(i + 1) == Some(&b'z')).then_some(i + 2),
        b if b.is_ascii_alphabetic() || b == b'%' || b == b'+' => Some(i + 1),
        _ => None,
    }
}

/// Formats a single directive, `None` when chrono rejects it.
fn format_one(now: &DateTime<Local>, directive: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(directive)).ok()?;
    Some(out)
}

/// Substitutes every valid strftime directive in `text` using `now`.
#[must_use]
pub fn resolve(text: &str, now: &DateTime<Local>) -> String {
    if !text.contains('%') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let formatted = directive_len(after).and_then(|len| {
            format_one(now, &rest[pos..=pos + len]).map(|text| (len, text))
        });

        if let Some((len, text)) = formatted {
            out.push_str(&text);
            rest = &after[len..];
        } else {
            out.push('%');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 3, 7, 9, 5, 2)
            .earliest()
            .expect("valid local time")
    }

    #[test]
    fn date_and_time_directives() {
        assert_eq!(resolve("%F %T", &fixed()), "2026-03-07 09:05:02");
        assert_eq!(resolve("%Y%m%d-%H%M%S", &fixed()), "20260307-090502");
    }

    #[test]
    fn padding_modifier() {
        assert_eq!(resolve("%-d/%-m", &fixed()), "7/3");
    }

    #[test]
    fn escaped_percent() {
        assert_eq!(resolve("100%%", &fixed()), "100%");
    }

    #[test]
    fn invalid_directives_stay_literal() {
        assert_eq!(resolve("50% done %", &fixed()), "50% done %");
        assert_eq!(resolve("%!x", &fixed()), "%!x");
    }

    #[test]
    fn directive_len_shapes() {
        assert_eq!(directive_len("Y"), Some(1));
        assert_eq!(directive_len("-d"), Some(2));
        assert_eq!(directive_len(".3f"), Some(3));
        assert_eq!(directive_len(":z"), Some(2));
        assert_eq!(directive_len(" "), None);
    }
}
