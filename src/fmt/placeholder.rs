//! Positional `{n}` substitution.
//!
//! Single left-to-right scan: an argument whose text happens to contain `{1}` is not
//! re-expanded by a later argument.

use std::fmt::{Display, Write};

/// Replaces every `{i}` with the `Display` text of `args[i]`.
///
/// Indices past the end of `args` stay verbatim, extra arguments are ignored.
#[must_use]
pub fn substitute(message: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() || !message.contains('{') {
        return message.to_string();
    }

    let mut rendered: Vec<Option<String>> = vec![None; args.len()];
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let index = if digits > 0 && after[digits..].starts_with('}') {
            after[..digits].parse::<usize>().ok()
        } else {
            None
        };

        match index.filter(|&i| i < args.len()) {
            Some(i) => {
                let text = rendered[i].get_or_insert_with(|| {
                    let mut s = String::new();
                    let _ = write!(s, "{}", args[i]);
                    s
                });
                out.push_str(text);
                rest = &after[digits + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_index_uses_same_value() {
        assert_eq!(substitute("{0}{0}", &[&"ab"]), "abab");
    }

    #[test]
    fn non_numeric_braces_are_left_alone() {
        assert_eq!(substitute("{red}{0}{x1}", &[&1]), "{red}1{x1}");
    }

    #[test]
    fn argument_text_is_not_rescanned() {
        assert_eq!(substitute("{0} {1}", &[&"{1}", &"b"]), "{1} b");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        assert_eq!(substitute("{0", &[&"a"]), "{0");
    }
}
