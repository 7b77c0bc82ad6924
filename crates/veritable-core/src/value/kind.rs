//! Coarse kind classification for `Value`.
//!
//! This module defines only the categories the type-assertion surface
//! speaks in. It does not define comparison or coercion capabilities.

use derive_more::Display;

///
/// ValueKind
///
/// Semantic kind of a tabular value. All numeric variants collapse into
/// `Number`; the distinction between them is a representation detail.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ValueKind {
    #[display("boolean")]
    Boolean,
    #[display("bytes")]
    Bytes,
    #[display("date")]
    Date,
    #[display("datetime")]
    DateTime,
    #[display("null")]
    Null,
    #[display("number")]
    Number,
    #[display("text")]
    Text,
    #[display("time")]
    Time,
}
