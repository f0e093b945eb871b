#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # wamas-template
//!
//! A minimal QWeb-style XML template engine.
//!
//! Templates are ordinary XML with three control attributes: `t-if`
//! skips a subtree when its expression is falsy, `t-foreach`/`t-as`
//! repeats a subtree once per item of a collection, and `t-esc`
//! replaces element content with an evaluated expression. Everything
//! else is literal markup reproduced verbatim.
//!
//! Evaluation is deliberately permissive: a path that resolves nowhere
//! is the missing sentinel, which renders as the empty string and
//! counts as falsy. Rendering therefore never fails; only parsing a
//! template can.

/// Expression parsing and evaluation.
pub mod expr;
/// Template XML parsing into a node tree.
pub mod parser;
/// Tree rendering against a scope.
pub mod render;

pub use expr::Expr;
pub use parser::Template;
pub use render::{escape_text, Scope};

use thiserror::Error;

/// Errors that can occur while parsing a template
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed template XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed template attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Template is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Invalid expression '{expr}': {reason}")]
    InvalidExpression { expr: String, reason: String },

    #[error("Element <{tag}> has t-foreach but no t-as")]
    MissingLoopVariable { tag: String },
}

impl Error {
    /// Build an invalid-expression error.
    pub fn invalid_expression(expr: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExpression {
            expr: expr.into(),
            reason: reason.into(),
        }
    }

    /// Build a missing-loop-variable error.
    pub fn missing_loop_variable(tag: impl Into<String>) -> Self {
        Self::MissingLoopVariable { tag: tag.into() }
    }
}

/// Crate-local result type for template parsing.
pub type Result<T> = std::result::Result<T, Error>;
