//! Optional value parsing.
//!
//! Loosely typed sources (form fields, CSV cells, query strings) often use an
//! empty string where a value is absent.  [`ToNullable`] folds "absent" and
//! "unparsable" into `None` and everything else into `Some(T)`; use
//! [`ToNullable::try_to_nullable`] when the parse failure must be reported.

use std::str::FromStr;

use crate::errors::{Error, Result};

/// Parse a string into `Option<T>`.
pub trait ToNullable {
    /// Parse into `Some(T)`, or `None` when the trimmed input is empty or
    /// does not parse.
    fn to_nullable<T: FromStr>(&self) -> Option<T>;

    /// Parse into `Some(T)`, `None` for blank input, and an error for input
    /// that does not parse.
    fn try_to_nullable<T: FromStr>(&self) -> Result<Option<T>>;
}

impl<S: AsRef<str> + ?Sized> ToNullable for S {
    fn to_nullable<T: FromStr>(&self) -> Option<T> {
        self.try_to_nullable().ok().flatten()
    }

    fn try_to_nullable<T: FromStr>(&self) -> Result<Option<T>> {
        let s = self.as_ref().trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse::<T>().map(Some).map_err(|_| Error::Parse {
            value: s.to_string(),
            target: std::any::type_name::<T>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_present_values() {
        assert_eq!("32".to_nullable::<i32>(), Some(32));
        assert_eq!(" 128.0 ".to_nullable::<f64>(), Some(128.0));
        assert_eq!(String::from("true").to_nullable::<bool>(), Some(true));
    }

    #[test]
    fn blank_is_none() {
        assert_eq!("".to_nullable::<i32>(), None);
        assert_eq!("   ".try_to_nullable::<i32>(), Ok(None));
    }

    #[test]
    fn unparsable_is_none_or_error() {
        assert_eq!("abc".to_nullable::<i32>(), None);
        assert!(matches!(
            "abc".try_to_nullable::<i32>(),
            Err(Error::Parse { target: "i32", .. })
        ));
    }
}
