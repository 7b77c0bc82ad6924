//! Immutable table snapshot.
//!
//! A snapshot is materialized once per request execution and never
//! mutated afterwards. All navigation resolves through `cell`, which is
//! what keeps column-scoped and row-scoped reads symmetric.

use crate::{
    error::{Axis, CheckError},
    source::{DataSource, Request},
    value::{Value, infer},
};

///
/// Snapshot
///
/// Ordered column names plus row-major typed values. Rectangular by
/// construction.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Snapshot {
    /// Build a snapshot from already-typed rows, enforcing rectangularity.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, CheckError> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(CheckError::ShapeMismatch {
                    row: index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self { columns, rows })
    }

    /// Execute `request` against `source` and materialize every row
    /// eagerly, running type inference on each cell.
    pub fn load(source: &dyn DataSource, request: &Request) -> Result<Self, CheckError> {
        let raw = source.execute(request)?;
        let rows = raw
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(infer).collect())
            .collect();

        Self::new(raw.columns, rows)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Resolve a column name to its index. Names match case-insensitively,
    /// the way SQL drivers report them.
    pub fn column_index(&self, name: &str) -> Result<usize, CheckError> {
        self.columns
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))
            .ok_or_else(|| CheckError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    pub fn column_name(&self, index: usize) -> Result<&str, CheckError> {
        self.columns
            .get(index)
            .map(String::as_str)
            .ok_or(CheckError::OutOfRange {
                axis: Axis::Column,
                index,
                len: self.columns.len(),
            })
    }

    pub fn row(&self, index: usize) -> Result<&[Value], CheckError> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(CheckError::OutOfRange {
                axis: Axis::Row,
                index,
                len: self.rows.len(),
            })
    }

    /// Single cell accessor both navigation scopes resolve through.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Value, CheckError> {
        if col >= self.columns.len() {
            return Err(CheckError::OutOfRange {
                axis: Axis::Column,
                index: col,
                len: self.columns.len(),
            });
        }

        Ok(&self.row(row)?[col])
    }
}

///
/// TESTS
///
