use crate::check::value::ValueCheck;
use veritable_core::{
    cursor::{Cursor, Scope},
    error::{Axis, CheckError},
    snapshot::Snapshot,
    types::Precision,
    value::{Value, ValueKind},
};

///
/// ColumnCheck
///
/// Chain scoped to one column; the cursor walks its rows. `column*`
/// continuations move to a sibling column with a fresh cursor.
///

#[derive(Clone, Debug)]
pub struct ColumnCheck<'a> {
    cursor: Cursor<'a>,
}

impl<'a> ColumnCheck<'a> {
    pub(crate) fn open(snapshot: &'a Snapshot, col: usize) -> Result<Self, CheckError> {
        Ok(Self {
            cursor: Cursor::column(snapshot, col)?,
        })
    }

    /// Read the next value in the column.
    pub fn value(self) -> Result<ValueCheck<'a>, CheckError> {
        ValueCheck::take(self.cursor, Precision::default())
    }

    /// Jump to the value at `row`, then read it.
    pub fn value_at(mut self, row: usize) -> Result<ValueCheck<'a>, CheckError> {
        self.cursor.jump(row)?;
        ValueCheck::take(self.cursor, Precision::default())
    }

    /// Assert the exact number of values in the column.
    pub fn has_size(self, expected: usize) -> Result<Self, CheckError> {
        let found = self.cursor.len();
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

    /// Assert every value in the column in order, under coercion.
    ///
    /// Walks a fresh cursor from row zero; the chain's own pointer is
    /// left untouched.
    pub fn has_values<T>(self, expected: impl IntoIterator<Item = T>) -> Result<Self, CheckError>
    where
        T: Into<Value>,
    {
        let expected: Vec<Value> = expected.into_iter().map(Into::into).collect();
        let probe = Cursor::column(self.cursor.snapshot(), self.col())?;
        super::has_values_walk(probe, expected, Axis::Row)?;

        Ok(self)
    }

    /// Assert every value in the column has `kind`; `lenient` admits nulls.
    pub fn is_of_type(self, kind: ValueKind, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_any_of_types(&[kind], lenient)
    }

    pub fn is_of_any_of_types(
        self,
        kinds: &[ValueKind],
        lenient: bool,
    ) -> Result<Self, CheckError> {
        let probe = Cursor::column(self.cursor.snapshot(), self.col())?;
        super::kind_walk(probe, kinds, lenient)?;

        Ok(self)
    }

    pub fn is_number(self, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Number, lenient)
    }

    pub fn is_text(self, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Text, lenient)
    }

    pub fn is_date(self, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Date, lenient)
    }

    pub fn is_time(self, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Time, lenient)
    }

    pub fn is_date_time(self, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::DateTime, lenient)
    }

    pub fn is_boolean(self, lenient: bool) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Boolean, lenient)
    }

    /// Continue with the next column.
    pub fn column(self) -> Result<Self, CheckError> {
        Self::open(self.cursor.snapshot(), self.col() + 1)
    }

    /// Continue with the column at `index`.
    pub fn column_at(self, index: usize) -> Result<Self, CheckError> {
        Self::open(self.cursor.snapshot(), index)
    }

    /// Continue with the column named `name`.
    pub fn column_named(self, name: &str) -> Result<Self, CheckError> {
        let index = self.cursor.snapshot().column_index(name)?;
        Self::open(self.cursor.snapshot(), index)
    }

    fn col(&self) -> usize {
        match self.cursor.scope() {
            Scope::Column(col) => col,
            // column chains only ever hold column-scoped cursors
            Scope::Row(_) => unreachable!(),
        }
    }
}
