//! # cs-collections
//!
//! Helpers for `Vec`, `HashMap`, and `BTreeMap`, plus left and right outer
//! joins over any pair of iterables.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Outer joins keyed by selector functions.
pub mod join;

/// Insert-if-absent, merge, and value checks on maps.
pub mod map_ext;

/// Keyed upsert on vectors.
pub mod vec_ext;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use join::{left_outer_join, right_outer_join};
pub use map_ext::MapExt;
pub use vec_ext::VecExt;
