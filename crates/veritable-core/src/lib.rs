//! Core runtime for Veritable: the typed value union, coercion-aware
//! comparison semantics, immutable table snapshots, and the navigation
//! cursors that the fluent surface in the `veritable` crate drives.
#![warn(unreachable_pub)]

pub mod cursor;
pub mod error;
pub mod obs;
pub mod snapshot;
pub mod source;
pub mod types;
pub mod value;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
