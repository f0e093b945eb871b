#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-convert
//!
//! The conversion layer on top of the codec: links flat telegram
//! records into order aggregates, matches the observed telegram types
//! against a conversion profile and drives the three translation
//! directions (WAMAS to UBL, UBL to WAMAS, WAMAS to WAMAS).

/// Record linking into order aggregates.
pub mod linker;
/// Wire digit-string to decimal coercion.
pub mod numeric;
/// Conversion entry points.
pub mod pipeline;
/// Static conversion profiles and transcoding tables.
pub mod profiles;

pub use linker::{link_order_lines, link_picking};
pub use numeric::{coerce_registered_floats, digits_to_float};
pub use pipeline::{ConvertOptions, Converter};
pub use profiles::{
    line_loop_path, match_profile, transcode_outputs, UblProfile, TRANSCODE_INPUT_TYPES,
};
pub use wamas_grammar::detect_flow;

use thiserror::Error;

/// Errors that can occur while converting between formats
#[derive(Error, Debug)]
pub enum Error {
    #[error("No conversion profile matches telegram types [{types}]")]
    NoMatchingProfile { types: String },

    #[error("Invalid telegram types: {types}")]
    InvalidTelegramTypes { types: String },

    #[error(transparent)]
    Codec(#[from] wamas_codec::Error),

    #[error(transparent)]
    Grammar(#[from] wamas_grammar::Error),

    #[error(transparent)]
    Template(#[from] wamas_template::Error),

    #[error(transparent)]
    Ubl(#[from] wamas_ubl::Error),
}

impl Error {
    /// Build a no-matching-profile error from the observed types.
    pub fn no_matching_profile<S: AsRef<str>>(types: &[S]) -> Self {
        Self::NoMatchingProfile {
            types: join_types(types),
        }
    }

    /// Build an invalid-telegram-types error from the requested types.
    pub fn invalid_telegram_types<S: AsRef<str>>(types: &[S]) -> Self {
        Self::InvalidTelegramTypes {
            types: join_types(types),
        }
    }
}

fn join_types<S: AsRef<str>>(types: &[S]) -> String {
    types
        .iter()
        .map(S::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Crate-local result type for conversions.
pub type Result<T> = std::result::Result<T, Error>;
