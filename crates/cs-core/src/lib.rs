//! # cs-core
//!
//! Core types, traits, and error definitions for chillisource.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – the error hierarchy, the process-wide
//! `Settings` (reference date), and the helpers for the smallest primitive
//! types (`bool`, floating-point angles, optional parsing).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Degree / radian conversions.
pub mod angle;

/// `bool` helpers.
pub mod bool_ext;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Parsing strings into `Option<T>`.
pub mod nullable;

/// Global library settings (reference date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use angle::AngleExt;
pub use bool_ext::BoolExt;
pub use errors::{Error, Result};
pub use nullable::ToNullable;
pub use settings::{ScopedToday, Settings};
