//! # cs-io
//!
//! Conversions between bytes and text (hex, UTF-8, URL-safe base64) and
//! whole-stream reads for blocking and tokio readers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Hex, UTF-8, and URL-safe base64 conversions.
pub mod encoding;

/// Reading whole streams into memory.
pub mod stream;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use encoding::{BytesExt, EncodedStrExt};
pub use stream::{AsyncStreamExt, StreamExt};
