//! Truncating and trimming.
//!
//! Lengths are counted in `char`s, never bytes, so truncation cannot split a
//! multi-byte character.

/// Truncation and trimming helpers for any string-like type.
pub trait TrimExt {
    /// Keep at most `max_chars` characters.
    fn truncate_chars(&self, max_chars: usize) -> String;

    /// Truncate to `max_chars` and append `suffix`, but only when the text is
    /// longer than `max_chars + buffer`.
    ///
    /// The buffer avoids replacing the last few characters with an ellipsis
    /// that is just as long.
    fn truncate_with(&self, max_chars: usize, suffix: &str, buffer: usize) -> String;

    /// Collapse every run of whitespace into a single space and trim both ends.
    /// Blank input is returned unchanged.
    fn trim_excess_white_spaces(&self) -> String;

    /// Remove every leading repetition of `prefix`.
    fn trim_start_str(&self, prefix: &str) -> String;

    /// Remove every trailing repetition of `suffix`.
    fn trim_end_str(&self, suffix: &str) -> String;

    /// Repeatedly remove the span from the first `start` to the first `end`
    /// (inclusive) while `end` follows `start`.
    fn trim_between(&self, start: char, end: char) -> String;

    /// Remove all `' '` characters.
    fn remove_spaces(&self) -> String;
}

impl<S: AsRef<str> + ?Sized> TrimExt for S {
    fn truncate_chars(&self, max_chars: usize) -> String {
        let s = self.as_ref();
        match s.char_indices().nth(max_chars) {
            Some((cut, _)) => s[..cut].to_string(),
            None => s.to_string(),
        }
    }

    fn truncate_with(&self, max_chars: usize, suffix: &str, buffer: usize) -> String {
        let s = self.as_ref();
        if s.chars().count() > max_chars.saturating_add(buffer) {
            let mut out = s.truncate_chars(max_chars);
            out.push_str(suffix);
            out
        } else {
            s.to_string()
        }
    }

    fn trim_excess_white_spaces(&self) -> String {
        let s = self.as_ref();
        if s.trim().is_empty() {
            return s.to_string();
        }
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn trim_start_str(&self, prefix: &str) -> String {
        let mut rest = self.as_ref();
        if !prefix.is_empty() {
            while let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
            }
        }
        rest.to_string()
    }

    fn trim_end_str(&self, suffix: &str) -> String {
        let mut rest = self.as_ref();
        if !suffix.is_empty() {
            while let Some(stripped) = rest.strip_suffix(suffix) {
                rest = stripped;
            }
        }
        rest.to_string()
    }

    fn trim_between(&self, start: char, end: char) -> String {
        let mut result = self.as_ref().to_string();
        while let (Some(open), Some(close)) = (result.find(start), result.find(end)) {
            if close <= open {
                break;
            }
            result.replace_range(open..close + end.len_utf8(), "");
        }
        result
    }

    fn remove_spaces(&self) -> String {
        self.as_ref().replace(' ', "")
    }
}
