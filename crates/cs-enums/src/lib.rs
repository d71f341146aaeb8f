//! # cs-enums
//!
//! Metadata for fieldless enums, declared once in a static table.
//!
//! Each enum lists its variants in [`EnumMetadata::VARIANTS`] together with a
//! [`VariantInfo`] record (name, numeric value, display order, description,
//! alias, and free-form data).  Lookups index that table; nothing is
//! discovered at run time.
//!
//! ```
//! use cs_enums::{EnumMetadata, VariantInfo};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Response { Going, NotGoing, Maybe }
//!
//! impl EnumMetadata for Response {
//!     const VARIANTS: &'static [(Self, VariantInfo)] = &[
//!         (Response::Going, VariantInfo::new("Going", 0).with_order(1)),
//!         (Response::NotGoing, VariantInfo::new("NotGoing", 1).with_order(3)),
//!         (Response::Maybe, VariantInfo::new("Maybe", 2).with_order(2)),
//!     ];
//! }
//!
//! assert_eq!(Response::NotGoing.description(), "Not going");
//! assert_eq!(Response::parse_name("Maybe"), Ok(Response::Maybe));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bit sets over flag enums.
pub mod flags;

/// Variant records and the `EnumMetadata` trait.
pub mod metadata;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use flags::Flags;
pub use metadata::{sort_by_order, DataValue, EnumMetadata, VariantInfo};
