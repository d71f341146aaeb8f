//! Bit sets over flag enums.
//!
//! A flag enum is an [`EnumMetadata`] type whose variant values are bit
//! masks.  [`Flags`] stores the union of such masks and answers membership
//! queries against the variant table.

use std::fmt;
use std::marker::PhantomData;
use std::ops::BitOr;

use cs_core::ensure;
use cs_core::errors::Result;

use crate::metadata::EnumMetadata;

/// A set of flags drawn from the enum `E`.
pub struct Flags<E> {
    bits: u64,
    _marker: PhantomData<E>,
}

fn mask<E: EnumMetadata>(flag: E) -> u64 {
    // Values are stored signed; flag masks use the raw bit pattern.
    flag.info().map_or(0, |info| info.value as u64)
}

impl<E: EnumMetadata> Flags<E> {
    /// The empty set.
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    /// A set from raw bits, keeping bits no variant defines.
    pub const fn from_bits_retain(bits: u64) -> Self {
        Self {
            bits,
            _marker: PhantomData,
        }
    }

    /// A set from raw bits.
    ///
    /// # Errors
    /// [`Error::Precondition`](cs_core::Error::Precondition) if `bits` has a
    /// bit that no variant defines.
    pub fn from_bits(bits: u64) -> Result<Self> {
        let known = E::values().fold(0, |acc, flag| acc | mask(flag));
        ensure!(
            bits & !known == 0,
            "bits {:#x} are not defined by {}",
            bits & !known,
            std::any::type_name::<E>()
        );
        Ok(Self::from_bits_retain(bits))
    }

    /// The raw bits.
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// Return `true` if no bit is set.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// The set with `flag` added.
    #[must_use]
    pub fn add_flag(self, flag: E) -> Self {
        Self::from_bits_retain(self.bits | mask(flag))
    }

    /// The set with `flag` removed.
    #[must_use]
    pub fn remove_flag(self, flag: E) -> Self {
        Self::from_bits_retain(self.bits & !mask(flag))
    }

    /// Return `true` if every bit of `flag` is set.  A zero-valued flag is
    /// always contained.
    pub fn has_flag(&self, flag: E) -> bool {
        let m = mask(flag);
        self.bits & m == m
    }

    /// The non-zero variants fully contained in the set, in declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        E::values().filter(move |flag| mask(*flag) != 0 && self.has_flag(*flag))
    }
}

impl<E> Clone for Flags<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Flags<E> {}

impl<E> PartialEq for Flags<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E> Eq for Flags<E> {}

impl<E: EnumMetadata> Default for Flags<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E: EnumMetadata> fmt::Debug for Flags<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(EnumMetadata::name))
            .finish()
    }
}

impl<E: EnumMetadata> From<E> for Flags<E> {
    fn from(flag: E) -> Self {
        Self::empty().add_flag(flag)
    }
}

impl<E: EnumMetadata> FromIterator<E> for Flags<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::add_flag)
    }
}

impl<E: EnumMetadata> BitOr<E> for Flags<E> {
    type Output = Self;

    fn bitor(self, flag: E) -> Self {
        self.add_flag(flag)
    }
}

impl<E: EnumMetadata> BitOr for Flags<E> {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self::from_bits_retain(self.bits | other.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::VariantInfo;
    use cs_core::Error;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Access {
        NoAccess,
        Read,
        Write,
        ReadWrite,
    }

    impl EnumMetadata for Access {
        const VARIANTS: &'static [(Self, VariantInfo)] = &[
            (Access::NoAccess, VariantInfo::new("NoAccess", 0)),
            (Access::Read, VariantInfo::new("Read", 1)),
            (Access::Write, VariantInfo::new("Write", 2)),
            (Access::ReadWrite, VariantInfo::new("ReadWrite", 3)),
        ];
    }

    #[test]
    fn add_and_remove() {
        let flags = Flags::from(Access::Read).add_flag(Access::Write);
        assert_eq!(flags.bits(), 3);
        assert!(flags.has_flag(Access::ReadWrite));
        let flags = flags.remove_flag(Access::Read);
        assert!(!flags.has_flag(Access::Read));
        assert!(flags.has_flag(Access::Write));
        assert!(flags.has_flag(Access::NoAccess));
    }

    #[test]
    fn iteration_skips_zero_and_partial_masks() {
        let flags: Flags<Access> = [Access::Write].into_iter().collect();
        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![Access::Write]);
        let all = flags | Access::Read;
        assert_eq!(
            all.iter().collect::<Vec<_>>(),
            vec![Access::Read, Access::Write, Access::ReadWrite]
        );
    }

    #[test]
    fn from_bits_rejects_unknown_bits() {
        assert_eq!(Flags::<Access>::from_bits(3).map(|f| f.bits()), Ok(3));
        assert!(matches!(Flags::<Access>::from_bits(8), Err(Error::Precondition(_))));
        assert_eq!(Flags::<Access>::from_bits_retain(8).bits(), 8);
    }

    #[test]
    fn debug_lists_names() {
        let flags = Flags::from(Access::Read);
        assert_eq!(format!("{flags:?}"), "{\"Read\"}");
    }
}
