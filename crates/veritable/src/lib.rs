//! Veritable: fluent, type-aware assertions over tabular query results.
//!
//! ## Crate layout
//! - `core`: typed values, coercion-aware comparison, snapshots, cursors,
//!   the data-source boundary, and the shared error taxonomy.
//! - `check`: the fluent surface — `check_that` plus the table, column,
//!   row, and value chains.
//!
//! Every chain method consumes `self` and returns a `Result`, so the
//! first failing assertion aborts the rest of the chain through `?`:
//!
//! ```ignore
//! check_that(&snapshot)
//!     .column_named("title")?
//!     .value()?.is_equal_to("Boy")?
//!     .value()?.is_equal_to("October")?;
//! ```

pub use veritable_core as core;

mod check;

pub use check::{ColumnCheck, RowCheck, TableCheck, ValueCheck, check_that};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// everything a test module needs to load a snapshot and start a chain
///

pub mod prelude {
    pub use crate::check::{ColumnCheck, RowCheck, TableCheck, ValueCheck, check_that};
    pub use crate::core::{
        error::{AssertionError, CheckError, CompareOp, DataAccessError},
        snapshot::Snapshot,
        source::{DataSource, MemorySource, RawTable, RawValue, Request},
        types::{Date, DateTime, Decimal, Float64, Precision, Time},
        value::{Value, ValueKind},
    };
    pub use veritable_core::values;
}
