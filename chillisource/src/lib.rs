//! # chillisource
//!
//! Extension traits for primitive, collection, date/time and I/O types.
//!
//! This crate is a **façade** that re-exports the `cs-*` workspace crates.
//! Application code should depend on this crate and bring the extension
//! traits into scope through [`prelude`].
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! chillisource = "0.1"
//! ```
//!
//! ```rust
//! use chillisource::prelude::*;
//!
//! assert_eq!(999_i32.to_words(), "nine hundred and ninety-nine");
//! assert_eq!(22_i32.ordinal(), "22nd");
//! assert_eq!("Hello World".to_seo_url(false), "hello-world");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, and primitive helpers.
pub use cs_core as core;

/// String helpers and number words.
pub use cs_text as text;

/// Date helpers and working days.
pub use cs_time as time;

/// Enum metadata tables and flag sets.
pub use cs_enums as enums;

/// Vector, map, and join helpers.
pub use cs_collections as collections;

/// Bytes, encodings, and streams.
pub use cs_io as io;

/// URI helpers.
pub use cs_net as net;

/// Fire-and-forget futures.
pub use cs_tasks as tasks;

pub use cs_core::{Error, Result};

/// Every extension trait, for glob import.
pub mod prelude {
    pub use cs_collections::{left_outer_join, right_outer_join, MapExt, VecExt};
    pub use cs_core::{AngleExt, BoolExt, ToNullable};
    pub use cs_enums::{EnumMetadata, Flags, VariantInfo};
    pub use cs_io::{AsyncStreamExt, BytesExt, EncodedStrExt, StreamExt};
    pub use cs_net::UriExt;
    pub use cs_tasks::ForgetExt;
    pub use cs_text::{
        ConvertExt, IntegerExt, OptionStrExt, PhoneNumberExt, SanitiseExt, StringBuilderExt,
        TemplateExt, TrimExt,
    };
    pub use cs_time::{DateExt, DateTimeExt, WorkingDayExt, ZonedExt};
}
