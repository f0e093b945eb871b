//! ISO-8859-1 byte conversion.
//!
//! The wire encoding maps bytes one-to-one onto the first 256 Unicode
//! code points, so both directions are exact. Width arithmetic elsewhere
//! in the codec relies on one character per byte.

use crate::{Error, Result};

/// Decode raw telegram bytes to text.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode text to raw telegram bytes. Characters above U+00FF have no
/// wire representation and fail the whole line.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|ch| {
            u8::try_from(u32::from(ch)).map_err(|_| Error::unencodable_char(ch))
        })
        .collect()
}
