//! Boolean helpers.

/// Extension methods for `bool`.
pub trait BoolExt {
    /// Convert to the equivalent integer: `1` for `true`, `0` for `false`.
    fn to_int(self) -> i32;

    /// Return the negated value.
    fn toggle(self) -> bool;
}

impl BoolExt for bool {
    fn to_int(self) -> i32 {
        i32::from(self)
    }

    fn toggle(self) -> bool {
        !self
    }
}
