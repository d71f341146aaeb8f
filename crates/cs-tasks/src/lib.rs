//! # cs-tasks
//!
//! Fire-and-forget execution of fallible futures on the ambient tokio
//! runtime.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Spawning futures whose errors are logged rather than returned.
pub mod forget;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use forget::ForgetExt;
