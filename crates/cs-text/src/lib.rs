//! # cs-text
//!
//! String helpers: sanitising, trimming, templating, case conversion,
//! builder-style appends, phone numbers, and integer rendering (ordinals and
//! English words).
//!
//! Every helper is an extension trait with a blanket implementation over
//! `AsRef<str>`, so the same calls work on `&str`, `String`, `Cow<str>`, …

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Case conversion, stable hashing, and empty-value fallbacks.
pub mod convert;

/// Positional / named templates, comparison-aware replace, masking.
pub mod format;

/// Integer ordinals and English words.
pub mod numbers;

/// Phone number validation and formatting.
pub mod phone;

/// File-name, CSS-class, and slug sanitising.
pub mod sanitise;

/// Builder-style appends on `String`.
pub mod string_builder;

/// Truncation and trimming.
pub mod trim;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use convert::{is_all_empty, join_if_not_empty, ConvertExt, OptionStrExt};
pub use format::{format_if_some, StringComparison, TemplateExt};
pub use numbers::{number_to_words, IntegerExt};
pub use phone::PhoneNumberExt;
pub use sanitise::SanitiseExt;
pub use string_builder::StringBuilderExt;
pub use trim::TrimExt;
