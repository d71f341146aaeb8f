//! Case conversion, hashing, and empty-value fallbacks.

use std::sync::LazyLock;

use regex::Regex;

static WORD_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{Nd}+)|(\P{Lu}+)|(\p{Lu}+\p{Ll}*)").expect("valid word-part pattern")
});

/// Case and conversion helpers for any string-like type.
pub trait ConvertExt {
    /// Insert a space between word parts: runs of digits, runs of
    /// non-uppercase characters, and an uppercase run with its trailing
    /// lowercase letters.  `"NotGoing"` → `"Not Going"`.
    fn split_by_uppercase(&self) -> String;

    /// Keep the first character as-is and lowercase the rest, optionally
    /// splitting camel-cased words first.
    ///
    /// `"NotGoing".to_sentence_case(true)` → `"Not going"`.
    fn to_sentence_case(&self, split_by_uppercase: bool) -> String;

    /// Uppercase the first character of the text, or of every
    /// space-separated word when `all_words` is set.
    fn capitalise(&self, all_words: bool) -> String;

    /// A hash code that is stable across processes, platforms, and releases.
    ///
    /// `h = 23; for each UTF-16 unit u: h = h * 31 + u`, with wrapping
    /// 32-bit arithmetic.  Suitable for bucketing, not for security.
    fn independent_hash_code(&self) -> i32;

    /// Return the text if non-empty, otherwise the first non-empty fallback,
    /// otherwise the (empty) text.
    fn default_to(&self, fallbacks: &[&str]) -> String;
}

impl<S: AsRef<str> + ?Sized> ConvertExt for S {
    fn split_by_uppercase(&self) -> String {
        WORD_PARTS
            .find_iter(self.as_ref())
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_sentence_case(&self, split_by_uppercase: bool) -> String {
        let input = if split_by_uppercase {
            self.split_by_uppercase()
        } else {
            self.as_ref().to_string()
        };
        let mut chars = input.chars();
        match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(input.len());
                out.push(first);
                out.push_str(&chars.as_str().to_lowercase());
                out
            }
            None => input,
        }
    }

    fn capitalise(&self, all_words: bool) -> String {
        let s = self.as_ref();
        if all_words {
            s.split(' ').map(capitalise_first).collect::<Vec<_>>().join(" ")
        } else {
            capitalise_first(s)
        }
    }

    fn independent_hash_code(&self) -> i32 {
        self.as_ref()
            .encode_utf16()
            .fold(23_i32, |hash, unit| {
                hash.wrapping_mul(31).wrapping_add(i32::from(unit))
            })
    }

    fn default_to(&self, fallbacks: &[&str]) -> String {
        let s = self.as_ref();
        if !s.is_empty() {
            return s.to_string();
        }
        fallbacks
            .iter()
            .find(|f| !f.is_empty())
            .map_or_else(|| s.to_string(), |f| f.to_string())
    }
}

fn capitalise_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fallbacks for optional text, where `None` and `""` both count as absent.
pub trait OptionStrExt {
    /// The value, or `""` when absent.
    fn value_or_empty(&self) -> &str;

    /// The value, or `replacement` when absent.
    fn value_or_replacement<'a>(&'a self, replacement: &'a str) -> &'a str;
}

impl<S: AsRef<str>> OptionStrExt for Option<S> {
    fn value_or_empty(&self) -> &str {
        self.value_or_replacement("")
    }

    fn value_or_replacement<'a>(&'a self, replacement: &'a str) -> &'a str {
        match self {
            Some(v) if !v.as_ref().is_empty() => v.as_ref(),
            _ => replacement,
        }
    }
}

/// Join the non-empty items with `separator`.
pub fn join_if_not_empty<I, S>(separator: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(item);
    }
    out
}

/// Return `true` if every item is empty (vacuously true for no items).
pub fn is_all_empty<I, S>(items: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().all(|s| s.as_ref().is_empty())
}
