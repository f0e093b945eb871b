#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-ubl
//!
//! UBL document parsing into dotted-path addressable value trees.
//!
//! The encode grammars address a parsed UBL document with paths such as
//! `DespatchAdvice.cac:DespatchLine.0.cbc:DeliveredQuantity.@unitCode`.
//! This crate turns the XML into the value-tree shape those paths
//! expect.

/// XML to value tree conversion.
pub mod reader;

pub use reader::parse_document;

use thiserror::Error;

/// Errors that can occur while parsing a UBL document
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Crate-local result type for document parsing.
pub type Result<T> = std::result::Result<T, Error>;
