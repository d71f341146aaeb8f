//! Builder-style helpers for `String`.

use std::fmt::Display;

use cs_core::errors::Result;

use crate::format::TemplateExt;

/// Line terminator written by [`StringBuilderExt::append_formatted_line`].
pub const LINE_ENDING: &str = "\r\n";

/// Chainable append helpers for `String`.
pub trait StringBuilderExt {
    /// Append `format` with its positional placeholders filled from `args`,
    /// followed by [`LINE_ENDING`].
    ///
    /// # Errors
    /// Returns [`cs_core::Error::Format`] if `format` is malformed; nothing is
    /// appended in that case.
    fn append_formatted_line(&mut self, format: &str, args: &[&dyn Display]) -> Result<&mut Self>;

    /// Run `append` only when `predicate` returns `true`.
    fn append_when<P, F>(&mut self, predicate: P, append: F) -> &mut Self
    where
        P: FnOnce() -> bool,
        F: FnOnce(&mut Self);

    /// Run `append` once per item of `sequence`.
    fn append_sequence<I, F>(&mut self, sequence: I, append: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item);
}

impl StringBuilderExt for String {
    fn append_formatted_line(&mut self, format: &str, args: &[&dyn Display]) -> Result<&mut Self> {
        let line = format.format_with(args)?;
        self.push_str(&line);
        self.push_str(LINE_ENDING);
        Ok(self)
    }

    fn append_when<P, F>(&mut self, predicate: P, append: F) -> &mut Self
    where
        P: FnOnce() -> bool,
        F: FnOnce(&mut Self),
    {
        if predicate() {
            append(self);
        }
        self
    }

    fn append_sequence<I, F>(&mut self, sequence: I, mut append: F) -> &mut Self
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item),
    {
        for item in sequence {
            append(self, item);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_formatted_line() {
        let mut sb = String::new();
        sb.append_formatted_line("{0}", &[&1234]).unwrap();
        assert_eq!(sb, "1234\r\n");
        assert!(sb.append_formatted_line("{1}", &[&0]).is_err());
        assert_eq!(sb, "1234\r\n");
    }

    #[test]
    fn append_when() {
        let mut sb = String::new();
        sb.append_when(|| true, |s| s.push_str("1234"))
            .append_when(|| false, |s| s.push_str("5678"));
        assert_eq!(sb, "1234");
    }

    #[test]
    fn append_sequence() {
        let mut sb = String::new();
        sb.append_sequence([1, 2, 3, 4], |s, n| s.push_str(&n.to_string()));
        assert_eq!(sb, "1234");
    }
}
