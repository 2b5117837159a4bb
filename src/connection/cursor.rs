//! Opaque cursor encoding.
//!
//! A cursor is what external callers see; a continuation key is what the
//! store resumes from. The transform between them is plain standard base64:
//! byte reversible, kind independent, and with no information loss. The empty
//! string round-trips to itself, which callers use as the "no cursor"
//! sentinel.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

/// A cursor that this core did not produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The cursor is not valid standard base64.
    #[error("malformed cursor: {0}")]
    Malformed(String),

    /// The cursor decoded, but not to UTF-8 text.
    #[error("cursor does not decode to a text key")]
    NotText,
}

/// Reversible transform between external cursors and internal continuation
/// keys.
///
/// `decode(encode(k)) == k` for every key; decoding anything else fails with
/// [`DecodeError`] rather than silently producing a wrong key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorEncoder;

impl CursorEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode an internal continuation key as an opaque cursor. Total; never
    /// fails.
    pub fn encode(&self, key: &str) -> String {
        BASE64.encode(key.as_bytes())
    }

    /// Decode a cursor back to the continuation key it was produced from.
    pub fn decode(&self, cursor: &str) -> Result<String, DecodeError> {
        let bytes = BASE64
            .decode(cursor.as_bytes())
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;
        String::from_utf8(bytes).map_err(|_| DecodeError::NotText)
    }
}
