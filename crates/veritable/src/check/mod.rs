//! Fluent assertion chains over a snapshot.
//!
//! `check_that` opens a table-level chain; `column*`/`row*` narrow it to
//! one dimension and hand out a cursor-backed chain whose `value()`
//! calls walk the cells. Chain methods consume `self` and return
//! `Result`, so `?` aborts at the first failure.

mod column;
mod row;
mod value;


use veritable_core::{
    cursor::Cursor,
    error::{Axis, CheckError},
    snapshot::Snapshot,
    value::{Value, ValueKind},
};

pub use column::ColumnCheck;
pub use row::RowCheck;
pub use value::ValueCheck;

/// Open an assertion chain on a snapshot.
#[must_use]
pub const fn check_that(snapshot: &Snapshot) -> TableCheck<'_> {
    TableCheck { snapshot }
}

///
/// TableCheck
///
/// Table-level assertions plus entry points into column and row chains.
///

#[derive(Clone, Copy, Debug)]
pub struct TableCheck<'a> {
    snapshot: &'a Snapshot,
}

impl<'a> TableCheck<'a> {
    /// Assert the exact number of columns.
    pub fn has_column_count(self, expected: usize) -> Result<Self, CheckError> {
        let found = self.snapshot.column_count();
        if found == expected {
            Ok(self)
        } else {
            Err(CheckError::SizeMismatch {
                axis: Axis::Column,
                expected,
                found,
            })
        }
    }

    /// Assert the exact number of rows.
    pub fn has_row_count(self, expected: usize) -> Result<Self, CheckError> {
        let found = self.snapshot.row_count();
        if found == expected {
            Ok(self)
        } else {
            Err(CheckError::SizeMismatch {
                axis: Axis::Row,
                expected,
                found,
            })
        }
    }

    /// Narrow to the first column.
    pub fn column(self) -> Result<ColumnCheck<'a>, CheckError> {
        ColumnCheck::open(self.snapshot, 0)
    }

    /// Narrow to the column at `index`.
    pub fn column_at(self, index: usize) -> Result<ColumnCheck<'a>, CheckError> {
        ColumnCheck::open(self.snapshot, index)
    }

    /// Narrow to the column named `name` (case-insensitive).
    pub fn column_named(self, name: &str) -> Result<ColumnCheck<'a>, CheckError> {
        let index = self.snapshot.column_index(name)?;
        ColumnCheck::open(self.snapshot, index)
    }

    /// Narrow to the first row.
    pub fn row(self) -> Result<RowCheck<'a>, CheckError> {
        RowCheck::open(self.snapshot, 0)
    }

    /// Narrow to the row at `index`.
    pub fn row_at(self, index: usize) -> Result<RowCheck<'a>, CheckError> {
        RowCheck::open(self.snapshot, index)
    }
}

/// Walk a fresh cursor against an expected value list, cell by cell.
/// Size is checked first so a short list fails as a shape problem, not
/// an exhaustion.
fn has_values_walk(
    mut cursor: Cursor<'_>,
    expected: Vec<Value>,
    axis: Axis,
) -> Result<(), CheckError> {
    if cursor.len() != expected.len() {
        return Err(CheckError::SizeMismatch {
            axis,
            expected: expected.len(),
            found: cursor.len(),
        });
    }

    for want in expected {
        let path = cursor.path();
        let actual = cursor.take()?;
        ValueCheck::eval_eq(&path, actual, &want)?;
    }

    Ok(())
}

/// Walk a fresh cursor checking every cell's kind against `kinds`.
fn kind_walk(mut cursor: Cursor<'_>, kinds: &[ValueKind], lenient: bool) -> Result<(), CheckError> {
    while cursor.pos() < cursor.len() {
        let path = cursor.path();
        let actual = cursor.take()?;

        if lenient && actual.is_null() {
            continue;
        }

        ValueCheck::eval_kind(&path, actual, kinds)?;
    }

    Ok(())
}
