use derive_more::Display;
use std::fmt;
use thiserror::Error as ThisError;

///
/// DataAccessError
///
/// Failures raised by the external data source while materializing a
/// snapshot. Never retried; the chain aborts immediately.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DataAccessError {
    #[error("data source unreachable: {message}")]
    Unreachable { message: String },

    #[error("malformed query: {message}")]
    MalformedQuery { message: String },
}

///
/// Axis
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Axis {
    #[display("column")]
    Column,
    #[display("row")]
    Row,
}

///
/// CompareOp
///
/// Operator tag carried by assertion diagnostics. `OfType` covers the
/// type/null/kind family of checks.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CompareOp {
    #[display("==")]
    Eq,
    #[display("!=")]
    Ne,
    #[display("<")]
    Lt,
    #[display("<=")]
    Lte,
    #[display(">")]
    Gt,
    #[display(">=")]
    Gte,
    #[display("of type")]
    OfType,
}

///
/// PathScope
///
/// The fixed dimension of a navigation path: a named column whose row
/// pointer advances, or an indexed row whose column pointer advances.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathScope {
    Column { name: String },
    Row { index: usize },
}

///
/// ValuePath
///
/// Navigation path of one addressed value, carried by every assertion
/// diagnostic so a failure names exactly which cell it looked at.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValuePath {
    pub scope: PathScope,
    pub position: usize,
}

impl ValuePath {
    #[must_use]
    pub fn column(name: impl Into<String>, position: usize) -> Self {
        Self {
            scope: PathScope::Column { name: name.into() },
            position,
        }
    }

    #[must_use]
    pub const fn row(index: usize, position: usize) -> Self {
        Self {
            scope: PathScope::Row { index },
            position,
        }
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            PathScope::Column { name } => {
                write!(f, "column \"{name}\" value {}", self.position)
            }
            PathScope::Row { index } => write!(f, "row {index} value {}", self.position),
        }
    }
}

///
/// AssertionError
///
/// The primary user-visible failure: one comparison that did not hold,
/// with the operator, both renderings, and the navigation path.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("assertion failed at {path}: expected {op} {expected}, found {actual}")]
pub struct AssertionError {
    pub path: ValuePath,
    pub op: CompareOp,
    pub expected: String,
    pub actual: String,
}

///
/// CheckError
///
/// Full error taxonomy of the assertion surface. Every variant is fatal
/// to the chain that raised it; nothing is swallowed or retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum CheckError {
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    #[error("column not found: \"{name}\"")]
    ColumnNotFound { name: String },

    #[error("{axis} index {index} out of range (len {len})")]
    OutOfRange {
        axis: Axis,
        index: usize,
        len: usize,
    },

    #[error("cursor exhausted at {path} (len {len})")]
    Exhausted { path: ValuePath, len: usize },

    #[error("ragged snapshot row {row}: expected {expected} values, found {found}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{axis} size mismatch: expected {expected}, found {found}")]
    SizeMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Assertion(#[from] AssertionError),
}

impl CheckError {
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_path_renders_both_scopes() {
        let col = ValuePath::column("title", 14);
        assert_eq!(col.to_string(), "column \"title\" value 14");

        let row = ValuePath::row(1, 3);
        assert_eq!(row.to_string(), "row 1 value 3");
    }

    #[test]
    fn assertion_error_message_carries_op_and_operands() {
        let err = AssertionError {
            path: ValuePath::row(1, 3),
            op: CompareOp::Lt,
            expected: "1.77".to_string(),
            actual: "1.77".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "assertion failed at row 1 value 3: expected < 1.77, found 1.77"
        );
    }

    #[test]
    fn check_error_classifiers() {
        let err = CheckError::Exhausted {
            path: ValuePath::column("title", 15),
            len: 15,
        };
        assert!(err.is_exhausted());
        assert!(!err.is_assertion());
    }
}
