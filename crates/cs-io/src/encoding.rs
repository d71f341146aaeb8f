//! Hex, UTF-8, and URL-safe base64 conversions.
//!
//! URL-safe encoding is base64 with the `-_` alphabet and no `=` padding, so
//! the output can be placed in a path segment or query string unescaped.

use std::io::Cursor;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use cs_core::errors::{Error, Result};

/// Helpers on byte slices.
pub trait BytesExt {
    /// Uppercase hex, two digits per byte.
    fn to_hex_string(&self) -> String;

    /// Decode as UTF-8.
    ///
    /// # Errors
    /// [`Error::Format`] if the bytes are not valid UTF-8.
    fn to_utf8_string(&self) -> Result<String>;

    /// URL-safe base64 without padding.
    fn url_safe_encode(&self) -> String;
}

impl<B: AsRef<[u8]> + ?Sized> BytesExt for B {
    fn to_hex_string(&self) -> String {
        hex::encode_upper(self)
    }

    fn to_utf8_string(&self) -> Result<String> {
        String::from_utf8(self.as_ref().to_vec()).map_err(|e| Error::Format(e.to_string()))
    }

    fn url_safe_encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self)
    }
}

/// Helpers on text that holds, or becomes, bytes.
pub trait EncodedStrExt {
    /// Parse a hex string (either case) into bytes.  Empty input gives an
    /// empty vector.
    ///
    /// # Errors
    /// [`Error::Format`] on an odd length or a non-hex character.
    fn from_hex(&self) -> Result<Vec<u8>>;

    /// The UTF-8 bytes of the text.
    fn to_utf8_bytes(&self) -> Vec<u8>;

    /// Decode URL-safe base64, with or without trailing `=` padding.
    /// Empty or malformed input gives `None`.
    fn url_safe_decode(&self) -> Option<Vec<u8>>;

    /// [`url_safe_decode`](Self::url_safe_decode) followed by UTF-8 decoding.
    fn url_safe_decode_string(&self) -> Option<String>;

    /// An in-memory readable stream over the UTF-8 bytes.
    fn to_stream(&self) -> Cursor<Vec<u8>>;
}

impl<S: AsRef<str> + ?Sized> EncodedStrExt for S {
    fn from_hex(&self) -> Result<Vec<u8>> {
        hex::decode(self.as_ref()).map_err(|e| Error::Format(e.to_string()))
    }

    fn to_utf8_bytes(&self) -> Vec<u8> {
        self.as_ref().as_bytes().to_vec()
    }

    fn url_safe_decode(&self) -> Option<Vec<u8>> {
        let s = self.as_ref().trim_end_matches('=');
        if s.is_empty() {
            return None;
        }
        URL_SAFE_NO_PAD.decode(s).ok()
    }

    fn url_safe_decode_string(&self) -> Option<String> {
        String::from_utf8(self.url_safe_decode()?).ok()
    }

    fn to_stream(&self) -> Cursor<Vec<u8>> {
        Cursor::new(self.to_utf8_bytes())
    }
}
