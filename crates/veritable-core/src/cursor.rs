//! Navigation cursor over a snapshot.
//!
//! A cursor fixes one dimension (a column or a row) and advances a
//! zero-based pointer along the other. Each assertion chain owns exactly
//! one cursor; nothing here is shared.

use crate::{
    error::{Axis, CheckError, ValuePath},
    snapshot::Snapshot,
    value::Value,
};

///
/// Scope
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// Fixed column; the pointer walks rows.
    Column(usize),
    /// Fixed row; the pointer walks columns.
    Row(usize),
}

///
/// Cursor
///
/// Position state of one assertion chain. `take` reads the addressed
/// value and advances; `jump` repositions without sequential traversal.
///

#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    snapshot: &'a Snapshot,
    scope: Scope,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Open a column-scoped cursor at row pointer zero.
    pub fn column(snapshot: &'a Snapshot, col: usize) -> Result<Self, CheckError> {
        if col >= snapshot.column_count() {
            return Err(CheckError::OutOfRange {
                axis: Axis::Column,
                index: col,
                len: snapshot.column_count(),
            });
        }

        Ok(Self {
            snapshot,
            scope: Scope::Column(col),
            pos: 0,
        })
    }

    /// Open a column-scoped cursor by column name.
    pub fn column_named(snapshot: &'a Snapshot, name: &str) -> Result<Self, CheckError> {
        let col = snapshot.column_index(name)?;
        Self::column(snapshot, col)
    }

    /// Open a row-scoped cursor at column pointer zero.
    pub fn row(snapshot: &'a Snapshot, row: usize) -> Result<Self, CheckError> {
        if row >= snapshot.row_count() {
            return Err(CheckError::OutOfRange {
                axis: Axis::Row,
                index: row,
                len: snapshot.row_count(),
            });
        }

        Ok(Self {
            snapshot,
            scope: Scope::Row(row),
            pos: 0,
        })
    }

    #[must_use]
    pub const fn snapshot(&self) -> &'a Snapshot {
        self.snapshot
    }

    #[must_use]
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Cardinality of the walked dimension.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.scope {
            Scope::Column(_) => self.snapshot.row_count(),
            Scope::Row(_) => self.snapshot.column_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Navigation path of the value the pointer currently addresses.
    #[must_use]
    pub fn path(&self) -> ValuePath {
        match self.scope {
            Scope::Column(col) => {
                let name = self
                    .snapshot
                    .column_name(col)
                    .unwrap_or("?")
                    .to_string();
                ValuePath::column(name, self.pos)
            }
            Scope::Row(row) => ValuePath::row(row, self.pos),
        }
    }

    /// Read the addressed value and advance the pointer by one.
    pub fn take(&mut self) -> Result<&'a Value, CheckError> {
        if self.pos >= self.len() {
            return Err(CheckError::Exhausted {
                path: self.path(),
                len: self.len(),
            });
        }

        let value = match self.scope {
            Scope::Column(col) => self.snapshot.cell(self.pos, col)?,
            Scope::Row(row) => self.snapshot.cell(row, self.pos)?,
        };

        self.pos += 1;
        Ok(value)
    }

    /// Reposition the pointer without sequential traversal.
    pub fn jump(&mut self, index: usize) -> Result<(), CheckError> {
        if index >= self.len() {
            return Err(CheckError::OutOfRange {
                axis: self.walked_axis(),
                index,
                len: self.len(),
            });
        }

        self.pos = index;
        Ok(())
    }

    /// Reposition by column name. Only row-scoped cursors walk columns;
    /// on a column scope the name cannot address a position.
    pub fn jump_named(&mut self, name: &str) -> Result<(), CheckError> {
        match self.scope {
            Scope::Row(_) => {
                let col = self.snapshot.column_index(name)?;
                self.jump(col)
            }
            Scope::Column(_) => Err(CheckError::ColumnNotFound {
                name: name.to_string(),
            }),
        }
    }

    const fn walked_axis(&self) -> Axis {
        match self.scope {
            Scope::Column(_) => Axis::Row,
            Scope::Row(_) => Axis::Column,
        }
    }
}

///
/// TESTS
///
