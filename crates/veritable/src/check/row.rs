use crate::check::value::ValueCheck;
use veritable_core::{
    cursor::{Cursor, Scope},
    error::{Axis, CheckError},
    snapshot::Snapshot,
    types::Precision,
    value::Value,
};

///
/// RowCheck
///
/// Chain scoped to one row; the cursor walks its columns. `row*`
/// continuations move to a sibling row with a fresh cursor.
///

#[derive(Clone, Debug)]
pub struct RowCheck<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RowCheck<'a> {
    pub(crate) fn open(snapshot: &'a Snapshot, row: usize) -> Result<Self, CheckError> {
        Ok(Self {
            cursor: Cursor::row(snapshot, row)?,
        })
    }

    /// Read the next value in the row.
    pub fn value(self) -> Result<ValueCheck<'a>, CheckError> {
        ValueCheck::take(self.cursor, Precision::default())
    }

    /// Jump to the value at column `index`, then read it.
    pub fn value_at(mut self, index: usize) -> Result<ValueCheck<'a>, CheckError> {
        self.cursor.jump(index)?;
        ValueCheck::take(self.cursor, Precision::default())
    }

    /// Jump to the value in the column named `name`, then read it.
    pub fn value_named(mut self, name: &str) -> Result<ValueCheck<'a>, CheckError> {
        self.cursor.jump_named(name)?;
        ValueCheck::take(self.cursor, Precision::default())
    }

    /// Assert the exact number of values in the row.
    pub fn has_size(self, expected: usize) -> Result<Self, CheckError> {
        let found = self.cursor.len();
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

    /// Assert every value in the row in order, under coercion.
    ///
    /// Walks a fresh cursor from column zero; the chain's own pointer
    /// is left untouched.
    pub fn has_values<T>(self, expected: impl IntoIterator<Item = T>) -> Result<Self, CheckError>
    where
        T: Into<Value>,
    {
        let expected: Vec<Value> = expected.into_iter().map(Into::into).collect();
        let probe = Cursor::row(self.cursor.snapshot(), self.row_index())?;
        super::has_values_walk(probe, expected, Axis::Column)?;

        Ok(self)
    }

    /// Continue with the next row.
    pub fn row(self) -> Result<Self, CheckError> {
        Self::open(self.cursor.snapshot(), self.row_index() + 1)
    }

    /// Continue with the row at `index`.
    pub fn row_at(self, index: usize) -> Result<Self, CheckError> {
        Self::open(self.cursor.snapshot(), index)
    }

    fn row_index(&self) -> usize {
        match self.cursor.scope() {
            Scope::Row(row) => row,
            // row chains only ever hold row-scoped cursors
            Scope::Column(_) => unreachable!(),
        }
    }
}
