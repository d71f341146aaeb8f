//! Sanitising: reduce arbitrary text to a safe subset for file names, CSS
//! classes, SEO slugs, and character-class filters.

use std::sync::LazyLock;

use regex::Regex;

use crate::trim::TrimExt;

static PUNCTUATION_OR_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]").expect("valid punctuation pattern"));

/// Characters that may not appear in a file name on any common platform.
fn is_invalid_file_name_char(c: char) -> bool {
    matches!(c, '"' | '<' | '>' | '|' | ':' | '*' | '?' | '\\' | '/') || c.is_ascii_control()
}

/// Sanitising helpers for any string-like type.
pub trait SanitiseExt {
    /// Convert to a valid file name.
    ///
    /// Invalid file-name characters are removed, every `.` except the one
    /// introducing the extension is removed, and spaces become `_`.
    fn to_file_name(&self) -> String;

    /// Convert to a valid CSS class name.
    ///
    /// Spaces and underscores become `-`, anything outside `[_a-zA-Z0-9-]` is
    /// dropped, the result is left-padded with `_` to at least two characters,
    /// a leading digit is escaped with `_`, and the whole is lowercased.
    fn to_css_class(&self) -> String;

    /// Convert to a lowercase URL slug.
    ///
    /// `&` becomes `and`, spaces become `-`, other characters outside
    /// `[a-z0-9-]` are dropped and runs of dashes collapse to one.  With
    /// `strip_dashes` the dashes are removed altogether.
    fn to_seo_url(&self, strip_dashes: bool) -> String;

    /// Keep ASCII letters and digits only.
    fn to_alpha_numeric(&self) -> String;

    /// Keep ASCII letters only.
    fn to_alpha(&self) -> String;

    /// Keep ASCII digits only.
    fn to_numeric(&self) -> String;

    /// Remove Unicode punctuation and symbol characters, together with every
    /// space.  Blank input is returned unchanged.
    fn exclude_punctuations(&self) -> String;
}

impl<S: AsRef<str> + ?Sized> SanitiseExt for S {
    fn to_file_name(&self) -> String {
        let cleaned: String = self
            .as_ref()
            .chars()
            .filter(|&c| !is_invalid_file_name_char(c))
            .collect();
        let (stem, extension) = match cleaned.rfind('.') {
            Some(i) if i + 1 < cleaned.len() => cleaned.split_at(i),
            _ => (cleaned.as_str(), ""),
        };
        let mut name = stem.replace('.', "");
        name.push_str(extension);
        name.replace(' ', "_")
    }

    fn to_css_class(&self) -> String {
        let mut class: String = self
            .as_ref()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .filter(|&c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            .collect();
        while class.len() < 2 {
            class.insert(0, '_');
        }
        if class.starts_with(|c: char| c.is_ascii_digit()) {
            class.insert(0, '_');
        }
        class.to_lowercase()
    }

    fn to_seo_url(&self, strip_dashes: bool) -> String {
        let lowered = self
            .as_ref()
            .trim()
            .to_lowercase()
            .replace(' ', "-")
            .replace('&', "and");
        let mut slug = String::with_capacity(lowered.len());
        for c in lowered.chars() {
            match c {
                '-' if strip_dashes || slug.ends_with('-') => {}
                'a'..='z' | '0'..='9' | '-' => slug.push(c),
                _ => {}
            }
        }
        slug
    }

    fn to_alpha_numeric(&self) -> String {
        self.as_ref()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    }

    fn to_alpha(&self) -> String {
        self.as_ref()
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect()
    }

    fn to_numeric(&self) -> String {
        self.as_ref().chars().filter(char::is_ascii_digit).collect()
    }

    fn exclude_punctuations(&self) -> String {
        let s = self.as_ref();
        if s.trim().is_empty() {
            return s.to_string();
        }
        PUNCTUATION_OR_SYMBOL.replace_all(s, " ").remove_spaces()
    }
}
