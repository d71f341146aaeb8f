//! Phone number validation and formatting.

use std::sync::LazyLock;

use regex::Regex;

static AUSTRALIAN_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\+?61|0)4\)?(?:[ -]?[0-9]){7}[0-9]$").expect("valid mobile pattern")
});

/// Phone number helpers for any string-like type.
pub trait PhoneNumberExt {
    /// Return `true` for an Australian mobile number: `04…`, `614…` or
    /// `+614…` followed by eight digits, optionally grouped with spaces or
    /// dashes.
    fn is_valid_australian_mobile_number(&self) -> bool;

    /// Prefix a `+` unless the number is blank or already international.
    fn format_as_international_mobile(&self) -> String;
}

impl<S: AsRef<str> + ?Sized> PhoneNumberExt for S {
    fn is_valid_australian_mobile_number(&self) -> bool {
        AUSTRALIAN_MOBILE.is_match(self.as_ref())
    }

    fn format_as_international_mobile(&self) -> String {
        let s = self.as_ref();
        if s.trim().is_empty() || s.starts_with('+') {
            s.to_string()
        } else {
            format!("+{s}")
        }
    }
}
