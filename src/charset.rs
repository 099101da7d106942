//! Character set resolution and strict line decoding.
//!
//! Names are resolved through the WHATWG label registry provided by
//! `encoding_rs`, so aliases such as `"utf8"`, `"latin1"` or `"sjis"` work.
//! Only ASCII-compatible encodings are accepted: line boundaries are found
//! by scanning for the `\n` byte before any decoding happens, which is not
//! sound for UTF-16 or ISO-2022-JP.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{LineSourceError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A resolved, ASCII-compatible character encoding.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    encoding: &'static Encoding,
}

impl Charset {
    /// UTF-8.
    pub fn utf8() -> Self {
        Self { encoding: UTF_8 }
    }

    /// Resolve an encoding name.
    ///
    /// Fails with `UnsupportedEncoding` when the name is not a known label
    /// or names an encoding that is not ASCII-compatible.
    pub fn for_name(name: &str) -> Result<Self> {
        let unsupported = || LineSourceError::UnsupportedEncoding {
            name: name.to_string(),
        };
        let encoding = Encoding::for_label(name.trim().as_bytes()).ok_or_else(unsupported)?;
        if !encoding.is_ascii_compatible() {
            return Err(unsupported());
        }
        Ok(Self { encoding })
    }

    /// Canonical name of the encoding, e.g. `"UTF-8"` or `"windows-1252"`.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn is_utf8(&self) -> bool {
        self.encoding == UTF_8
    }

    /// Decode one terminator-free line.
    ///
    /// Returns `None` if `bytes` is malformed for this encoding; nothing is
    /// ever replaced with U+FFFD.
    pub fn decode<'b>(&self, bytes: &'b [u8]) -> Option<Cow<'b, str>> {
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
    }

    /// Length of a byte-order mark at the start of `head` that this charset
    /// strips before the first line.
    pub(crate) fn bom_len(&self, head: &[u8]) -> usize {
        if self.is_utf8() && head.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        }
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl std::str::FromStr for Charset {
    type Err = LineSourceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::for_name(s)
    }
}
