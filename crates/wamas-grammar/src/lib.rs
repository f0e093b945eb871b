#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-grammar
//!
//! Field grammars for the WAMAS fixed-width telegram dialect.
//!
//! Every telegram type is described by two views over the same field
//! list: a parsing view (names and widths only) and an authoring view
//! (types, decimal places, value sources and defaults). The registry
//! bundles the standard set together with the shared 49-byte header
//! layout and the flow classification tables.

/// Field, table and source-path model.
pub mod model;
/// Registry of all known telegram grammars plus flow detection.
pub mod registry;
/// Measurement unit code mapping between WAMAS and UBL.
pub mod units;

pub(crate) mod tables;

/// Grammar table types and the per-field spec model.
pub use model::{
    is_header_field, ConvertTable, DecodeField, DecodeTable, DefaultFn, FieldSpec, FieldType,
    SourcePath,
};
/// Registry plus the standard constants and classification helpers.
pub use registry::{
    detect_flow, float_field, GrammarRegistry, TelegramGrammar, HOST_TO_WAREHOUSE_TYPES,
    IGNORED_TELEGRAM_TYPES, SYSTEM_HOST, SYSTEM_WAMAS, TELEGRAM_HEADER_WIDTH,
};
/// Unit code remapping table.
pub use units::{UnitCodeMap, UNIT_CODE_FIELDS};

use thiserror::Error;

/// Errors that can occur when looking up grammar data
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown telegram type: {telegram_type}")]
    UnknownTelegramType { telegram_type: String },
}

impl Error {
    /// Build an unknown-telegram-type error.
    pub fn unknown_telegram_type(telegram_type: impl Into<String>) -> Self {
        Self::UnknownTelegramType {
            telegram_type: telegram_type.into(),
        }
    }
}

/// Crate-local result type for grammar lookups.
pub type Result<T> = std::result::Result<T, Error>;
