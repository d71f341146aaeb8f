//! # cs-net
//!
//! Helpers on [`url::Url`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Friendly names, roots, and bases of URLs.
pub mod uri;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use uri::UriExt;
pub use url::Url;
