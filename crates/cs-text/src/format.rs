//! Formatting, templating, replacing, and masking.
//!
//! Two placeholder styles are supported:
//!
//! * **positional** – `{0}`, `{1}` … filled from an argument slice by
//!   [`TemplateExt::format_with`];
//! * **named** – `{Name}` filled from an explicit ordered list of
//!   `(name, value)` pairs by [`TemplateExt::transform_with`].
//!
//! Both also recognise placeholders whose braces were URL-encoded
//! (`%7B0%7D`, `%7BName%7D`), which is how they arrive when the template has
//! been embedded in a link.

use std::fmt::{Display, Write as _};
use std::sync::LazyLock;

use cs_core::errors::{Error, Result};
use regex::Regex;

use crate::trim::TrimExt;

static ENCODED_POSITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)%7B(\d+)%7D").expect("valid placeholder pattern"));

/// How two strings are compared when searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringComparison {
    /// Exact, case-sensitive comparison.
    #[default]
    Ordinal,
    /// Case-insensitive comparison using simple Unicode case folding.
    OrdinalIgnoreCase,
}

impl StringComparison {
    fn chars_eq(self, a: char, b: char) -> bool {
        match self {
            StringComparison::Ordinal => a == b,
            StringComparison::OrdinalIgnoreCase => {
                a == b || a.to_lowercase().eq(b.to_lowercase())
            }
        }
    }

    /// Find the first occurrence of `needle` in `haystack` at or after byte
    /// offset `from`, returning its byte range.
    fn find(self, haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
        let tail = haystack.get(from..)?;
        if let StringComparison::Ordinal = self {
            return tail.find(needle).map(|i| (from + i, from + i + needle.len()));
        }
        for (offset, _) in tail.char_indices() {
            let start = from + offset;
            let mut candidate = haystack[start..].char_indices();
            let mut end = start;
            let matched = needle.chars().all(|n| match candidate.next() {
                Some((j, h)) if self.chars_eq(h, n) => {
                    end = start + j + h.len_utf8();
                    true
                }
                _ => false,
            });
            if matched {
                return Some((start, end));
            }
        }
        None
    }
}

/// Render `format` with its single positional placeholder filled from
/// `value`, or return an empty string when `value` is `None`.
///
/// # Errors
/// Returns [`Error::Format`] if `format` is malformed.
pub fn format_if_some<T: Display>(format: &str, value: Option<T>) -> Result<String> {
    match value {
        Some(v) => format.format_with(&[&v]),
        None => Ok(String::new()),
    }
}

/// Templating and text-replacement helpers for any string-like type.
pub trait TemplateExt {
    /// Replace positional placeholders (`{0}`, `{1}`, …) with the matching
    /// argument.  `{{` and `}}` produce literal braces.
    ///
    /// # Errors
    /// Returns [`Error::Format`] for an unterminated or non-numeric
    /// placeholder, a stray `}`, or an index with no matching argument.
    fn format_with(&self, args: &[&dyn Display]) -> Result<String>;

    /// Replace each `{name}` (or `%7Bname%7D`) with its value from `pairs`,
    /// in the order given.  With `remove_unused`, any `{…}` span left
    /// afterwards is removed.
    fn transform_with<I, K, V>(&self, pairs: I, remove_unused: bool) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>;

    /// Replace every occurrence of `old` with `new` using `comparison`.
    ///
    /// An empty `old` matches nothing and the text is returned unchanged.
    fn replace_with(&self, old: &str, new: &str, comparison: StringComparison) -> String;

    /// Return `true` if `needle` occurs in the text under `comparison`.
    /// The empty needle is always found.
    fn contains_with(&self, needle: &str, comparison: StringComparison) -> bool;

    /// Replace every character that appears in `chars` with `replacement`.
    fn replace_any(&self, chars: &str, replacement: &str) -> String;

    /// Reverse the order of the words, normalising whitespace to single
    /// spaces.  Blank input is returned unchanged.
    fn reverse_words(&self) -> String;

    /// Replace characters with `mask_char`, from index `start_from` up to and
    /// including index `len - end_from - 1`.
    ///
    /// `"4111111111111111".mask('X', 0, 4)` → `"XXXXXXXXXXXX1111"`.
    fn mask(&self, mask_char: char, start_from: usize, end_from: usize) -> String;

    /// Lay the characters of the text out over `mask`: each `#` consumes the
    /// next input character (and is dropped once input runs out), every other
    /// mask character is copied verbatim.
    ///
    /// `"0412345678".format_with_mask("#### ### ###")` → `"0412 345 678"`.
    /// Empty input is returned unchanged.
    fn format_with_mask(&self, mask: &str) -> String;

    /// The text repeated `count` times; empty for a non-positive count.
    fn repeat_n(&self, count: i32) -> String;
}

impl<S: AsRef<str> + ?Sized> TemplateExt for S {
    fn format_with(&self, args: &[&dyn Display]) -> Result<String> {
        let template = ENCODED_POSITIONAL.replace_all(self.as_ref(), "{$1}");
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(d) if d.is_ascii_digit() => digits.push(d),
                            Some(other) => {
                                return Err(Error::Format(format!(
                                    "unexpected {other:?} in placeholder"
                                )))
                            }
                            None => return Err(Error::Format("unterminated placeholder".into())),
                        }
                    }
                    let index: usize = digits
                        .parse()
                        .map_err(|_| Error::Format("empty placeholder".into()))?;
                    let arg = args.get(index).ok_or_else(|| {
                        Error::Format(format!(
                            "placeholder {{{index}}} has no argument ({} supplied)",
                            args.len()
                        ))
                    })?;
                    write!(out, "{arg}").map_err(|e| Error::Format(e.to_string()))?;
                }
                '}' => return Err(Error::Format("unmatched '}'".into())),
                _ => out.push(c),
            }
        }
        Ok(out)
    }

    fn transform_with<I, K, V>(&self, pairs: I, remove_unused: bool) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut s = self.as_ref().to_string();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            s = s.replace(&format!("{{{key}}}"), value);
            s = s.replace(&format!("%7B{key}%7D"), value);
        }
        if remove_unused {
            s = s.trim_between('{', '}');
        }
        s
    }

    fn replace_with(&self, old: &str, new: &str, comparison: StringComparison) -> String {
        let s = self.as_ref();
        if old.is_empty() {
            return s.to_string();
        }
        let mut out = String::with_capacity(s.len());
        let mut previous = 0;
        while let Some((start, end)) = comparison.find(s, old, previous) {
            out.push_str(&s[previous..start]);
            out.push_str(new);
            previous = end;
        }
        out.push_str(&s[previous..]);
        out
    }

    fn contains_with(&self, needle: &str, comparison: StringComparison) -> bool {
        needle.is_empty() || comparison.find(self.as_ref(), needle, 0).is_some()
    }

    fn replace_any(&self, chars: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(self.as_ref().len());
        for c in self.as_ref().chars() {
            if chars.contains(c) {
                out.push_str(replacement);
            } else {
                out.push(c);
            }
        }
        out
    }

    fn reverse_words(&self) -> String {
        let s = self.as_ref();
        if s.trim().is_empty() {
            return s.to_string();
        }
        s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
    }

    fn mask(&self, mask_char: char, start_from: usize, end_from: usize) -> String {
        let s = self.as_ref();
        let len = s.chars().count();
        // Last masked index is len - end_from - 1; nothing is masked when
        // end_from covers the whole string.
        let stop = len.saturating_sub(end_from);
        s.chars()
            .enumerate()
            .map(|(i, c)| if i >= start_from && i < stop { mask_char } else { c })
            .collect()
    }

    fn format_with_mask(&self, mask: &str) -> String {
        let s = self.as_ref();
        if s.is_empty() {
            return String::new();
        }
        let mut input = s.chars();
        let mut out = String::with_capacity(mask.len());
        for m in mask.chars() {
            if m == '#' {
                if let Some(c) = input.next() {
                    out.push(c);
                }
            } else {
                out.push(m);
            }
        }
        out
    }

    fn repeat_n(&self, count: i32) -> String {
        usize::try_from(count).map_or_else(|_| String::new(), |n| self.as_ref().repeat(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_with_positional_arguments() {
        assert_eq!("{0}".format_with(&[&1234]), Ok("1234".to_string()));
        assert_eq!(
            "{1} before {0}".format_with(&[&"b", &'a']),
            Ok("a before b".to_string())
        );
        assert_eq!(
            "/items/%7B0%7D?page=%7b1%7D".format_with(&[&7, &2]),
            Ok("/items/7?page=2".to_string())
        );
        assert_eq!("{{literal}}".format_with(&[]), Ok("{literal}".to_string()));
    }

    #[test]
    fn format_with_rejects_bad_templates() {
        assert!(matches!("{1}".format_with(&[&0]), Err(Error::Format(_))));
        assert!(matches!("{name}".format_with(&[&0]), Err(Error::Format(_))));
        assert!(matches!("{0".format_with(&[&0]), Err(Error::Format(_))));
        assert!(matches!("0}".format_with(&[&0]), Err(Error::Format(_))));
        assert!(matches!("{}".format_with(&[&0]), Err(Error::Format(_))));
    }

    #[test]
    fn format_if_some_value() {
        assert_eq!(format_if_some("({0})", Some(5)), Ok("(5)".to_string()));
        assert_eq!(format_if_some::<i32>("({0})", None), Ok(String::new()));
    }

    #[test]
    fn transform_with_pairs() {
        let template = "Dear {Name}, your order %7BOrder%7D ships {When}.";
        assert_eq!(
            template.transform_with([("Name", "Jim"), ("Order", "42")], false),
            "Dear Jim, your order 42 ships {When}."
        );
        assert_eq!(
            template.transform_with([("Name", "Jim"), ("Order", "42")], true),
            "Dear Jim, your order 42 ships ."
        );
    }

    #[test]
    fn replace_ignoring_case() {
        assert_eq!(
            "Cat cat CAT".replace_with("cat", "dog", StringComparison::OrdinalIgnoreCase),
            "dog dog dog"
        );
        assert_eq!(
            "Cat cat CAT".replace_with("cat", "dog", StringComparison::Ordinal),
            "Cat dog CAT"
        );
        assert_eq!(
            "ÉCOLE école".replace_with("école", "school", StringComparison::OrdinalIgnoreCase),
            "school school"
        );
        assert_eq!("abc".replace_with("", "x", StringComparison::Ordinal), "abc");
    }

    #[test]
    fn contains_ignoring_case() {
        assert!("Hello World".contains_with("WORLD", StringComparison::OrdinalIgnoreCase));
        assert!(!"Hello World".contains_with("WORLD", StringComparison::Ordinal));
        assert!("".contains_with("", StringComparison::Ordinal));
    }

    #[test]
    fn replace_any_chars() {
        assert_eq!("a-b_c d".replace_any("-_ ", ""), "abcd");
        assert_eq!("a-b_c".replace_any("-_", "."), "a.b.c");
    }

    #[test]
    fn reverse_words() {
        assert_eq!("  one two\tthree ".reverse_words(), "three two one");
        assert_eq!(" ".reverse_words(), " ");
    }

    #[test]
    fn mask_card_number() {
        assert_eq!("4111111111111111".mask('X', 0, 4), "XXXXXXXXXXXX1111");
        assert_eq!("secret".mask('*', 2, 1), "se***t");
        assert_eq!("abc".mask('X', 0, 4), "abc");
        assert_eq!("".mask('X', 0, 4), "");
    }

    #[test]
    fn format_with_mask() {
        assert_eq!("0412345678".format_with_mask("#### ### ###"), "0412 345 678");
        assert_eq!("12".format_with_mask("(##) ####"), "(12) ");
        assert_eq!("".format_with_mask("###"), "");
        assert_eq!("123456".format_with_mask("###"), "123");
    }

    #[test]
    fn repeat_n() {
        assert_eq!("ab".repeat_n(3), "ababab");
        assert_eq!("ab".repeat_n(0), "");
        assert_eq!("ab".repeat_n(-2), "");
    }
}
