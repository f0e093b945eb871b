#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-codec
//!
//! Byte-level codec for WAMAS fixed-width telegrams.
//!
//! Decoding walks a raw ISO-8859-1 stream line by line: the 49-byte
//! header selects the grammar, known-bad producers get their length
//! repairs, and each body becomes an ordered string record. Encoding
//! runs the other way, resolving each grammar field from a document
//! tree or flat record and formatting it into its exact byte slot.

/// Fixed-width body decoding against a grammar table.
pub mod decoder;
/// Stream splitting, header decoding and telegram-type routing.
pub mod dispatch;
/// Line authoring: value resolution, defaults and field formatting.
pub mod encoder;
/// ISO-8859-1 byte conversion.
pub mod encoding;
/// Length repair heuristics for malformed lines.
pub mod repair;
/// Lenient timestamp parsing.
pub mod time;

pub use decoder::decode_body;
pub use dispatch::{decode_stream, split_record_type_code, DecodedStream};
pub use encoder::{
    encode_line, format_value, remap_unit_code, resolve_default_fn, resolve_value, EncodeContext,
    Repeat, SystemIds,
};
pub use encoding::{decode_latin1, encode_latin1};
pub use repair::repair_body;
pub use time::{parse_date_lenient, parse_datetime_lenient};

use thiserror::Error;

/// Errors that can occur while decoding or authoring telegrams
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid telegram type: {telegram_type}")]
    UnsupportedTelegramType { telegram_type: String },

    #[error("Record type code '{code}' has no sequence digits")]
    InvalidRecordTypeCode { code: String },

    #[error("{telegram_type} body is {actual} bytes, grammar needs {expected}")]
    LineTooShort {
        telegram_type: String,
        expected: usize,
        actual: usize,
    },

    #[error("Field {field}: value '{value}' is not a number")]
    NotANumber { field: String, value: String },

    #[error("Field {field}: value '{value}' is not a date")]
    NotADate { field: String, value: String },

    #[error("Character {ch:?} has no ISO-8859-1 encoding")]
    UnencodableChar { ch: char },

    #[error(transparent)]
    Grammar(#[from] wamas_grammar::Error),
}

impl Error {
    /// Build an unsupported-telegram-type error.
    pub fn unsupported_telegram_type(telegram_type: impl Into<String>) -> Self {
        Self::UnsupportedTelegramType {
            telegram_type: telegram_type.into(),
        }
    }

    /// Build an invalid-record-type-code error.
    pub fn invalid_record_type_code(code: impl Into<String>) -> Self {
        Self::InvalidRecordTypeCode { code: code.into() }
    }

    /// Build a line-too-short error with both byte counts.
    pub fn line_too_short(
        telegram_type: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::LineTooShort {
            telegram_type: telegram_type.into(),
            expected,
            actual,
        }
    }

    /// Build a not-a-number coercion error.
    pub fn not_a_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotANumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Build a not-a-date coercion error.
    pub fn not_a_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NotADate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Build an unencodable-character error.
    pub fn unencodable_char(ch: char) -> Self {
        Self::UnencodableChar { ch }
    }
}

/// Crate-local result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
