use std::cmp::Ordering;
use veritable_core::{
    cursor::Cursor,
    error::{AssertionError, CheckError, CompareOp, ValuePath},
    obs::{self, CheckEvent},
    types::Precision,
    value::{Value, ValueKind, compare_eq, compare_order},
};

///
/// ValueCheck
///
/// Chain positioned on one read value. Comparison methods consume
/// `self` and hand it back on success; `value*` continuations read the
/// next cell from the same cursor.
///
/// Every comparison records an `Evaluated` event, and a `Failed` event
/// when it does not hold. Incomparable operands fail every operator
/// except `is_not_equal_to`.
///

#[derive(Clone, Debug)]
pub struct ValueCheck<'a> {
    cursor: Cursor<'a>,
    value: &'a Value,
    path: ValuePath,
    precision: Precision,
}

impl<'a> ValueCheck<'a> {
    /// Read the value the cursor addresses and advance it. The path is
    /// captured before the read so diagnostics name the cell that was
    /// actually looked at.
    pub(crate) fn take(mut cursor: Cursor<'a>, precision: Precision) -> Result<Self, CheckError> {
        let path = cursor.path();
        let value = cursor.take()?;

        Ok(Self {
            cursor,
            value,
            path,
            precision,
        })
    }

    /// The value this chain is positioned on.
    #[must_use]
    pub const fn actual(&self) -> &'a Value {
        self.value
    }

    /// The navigation path of the value this chain is positioned on.
    #[must_use]
    pub const fn path(&self) -> &ValuePath {
        &self.path
    }

    /// Set the sub-second truncation applied to temporal comparisons
    /// from here on. Carried forward by `value*` continuations.
    #[must_use]
    pub const fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    // ---- equality ------------------------------------------------------

    pub fn is_equal_to<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        let want = expected.into();
        let holds = compare_eq(self.value, &want, self.precision) == Some(true);
        self.verdict(CompareOp::Eq, want.to_string(), holds)
    }

    /// Incomparable operands are unequal, so this passes where
    /// `is_equal_to` would fail without ever holding.
    pub fn is_not_equal_to<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        let want = expected.into();
        let holds = compare_eq(self.value, &want, self.precision) != Some(true);
        self.verdict(CompareOp::Ne, want.to_string(), holds)
    }

    // ---- ordering ------------------------------------------------------

    pub fn is_greater_than<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.check_order(expected.into(), CompareOp::Gt, |o| o == Ordering::Greater)
    }

    pub fn is_greater_than_or_equal_to<T: Into<Value>>(
        self,
        expected: T,
    ) -> Result<Self, CheckError> {
        self.check_order(expected.into(), CompareOp::Gte, |o| o != Ordering::Less)
    }

    pub fn is_less_than<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.check_order(expected.into(), CompareOp::Lt, |o| o == Ordering::Less)
    }

    pub fn is_less_than_or_equal_to<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.check_order(expected.into(), CompareOp::Lte, |o| o != Ordering::Greater)
    }

    /// Temporal reading of `is_less_than`.
    pub fn is_before<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.is_less_than(expected)
    }

    /// Temporal reading of `is_greater_than`.
    pub fn is_after<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.is_greater_than(expected)
    }

    pub fn is_before_or_equal_to<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.is_less_than_or_equal_to(expected)
    }

    pub fn is_after_or_equal_to<T: Into<Value>>(self, expected: T) -> Result<Self, CheckError> {
        self.is_greater_than_or_equal_to(expected)
    }

    // ---- null and boolean ----------------------------------------------

    pub fn is_null(self) -> Result<Self, CheckError> {
        let holds = self.value.is_null();
        self.verdict(CompareOp::Eq, "null".to_string(), holds)
    }

    pub fn is_not_null(self) -> Result<Self, CheckError> {
        let holds = !self.value.is_null();
        self.verdict(CompareOp::Ne, "null".to_string(), holds)
    }

    pub fn is_true(self) -> Result<Self, CheckError> {
        self.is_equal_to(true)
    }

    pub fn is_false(self) -> Result<Self, CheckError> {
        self.is_equal_to(false)
    }

    // ---- numeric -------------------------------------------------------

    /// Holds only for a number equal to zero; non-numbers fail.
    pub fn is_zero(self) -> Result<Self, CheckError> {
        let holds = self.value.is_zero() == Some(true);
        self.verdict(CompareOp::Eq, "0".to_string(), holds)
    }

    /// Holds only for a number different from zero; non-numbers fail.
    pub fn is_not_zero(self) -> Result<Self, CheckError> {
        let holds = self.value.is_zero() == Some(false);
        self.verdict(CompareOp::Ne, "0".to_string(), holds)
    }

    // ---- kinds ---------------------------------------------------------

    pub fn is_of_type(self, kind: ValueKind) -> Result<Self, CheckError> {
        self.is_of_any_of_types(&[kind])
    }

    pub fn is_of_any_of_types(self, kinds: &[ValueKind]) -> Result<Self, CheckError> {
        Self::eval_kind(&self.path, self.value, kinds)?;
        Ok(self)
    }

    pub fn is_number(self) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Number)
    }

    pub fn is_text(self) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Text)
    }

    pub fn is_date(self) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Date)
    }

    pub fn is_time(self) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Time)
    }

    pub fn is_date_time(self) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::DateTime)
    }

    pub fn is_boolean(self) -> Result<Self, CheckError> {
        self.is_of_type(ValueKind::Boolean)
    }

    // ---- continuation --------------------------------------------------

    /// Read the next value along the same scope.
    pub fn value(self) -> Result<Self, CheckError> {
        Self::take(self.cursor, self.precision)
    }

    /// Jump to position `index` along the same scope, then read it.
    pub fn value_at(mut self, index: usize) -> Result<Self, CheckError> {
        self.cursor.jump(index)?;
        Self::take(self.cursor, self.precision)
    }

    /// Jump to the column named `name` (row scope only), then read it.
    pub fn value_named(mut self, name: &str) -> Result<Self, CheckError> {
        self.cursor.jump_named(name)?;
        Self::take(self.cursor, self.precision)
    }

    // ---- internals -----------------------------------------------------

    fn check_order(
        self,
        want: Value,
        op: CompareOp,
        admits: fn(Ordering) -> bool,
    ) -> Result<Self, CheckError> {
        let holds = compare_order(self.value, &want, self.precision).is_some_and(admits);
        self.verdict(op, want.to_string(), holds)
    }

    fn verdict(self, op: CompareOp, expected: String, holds: bool) -> Result<Self, CheckError> {
        obs::record(CheckEvent::Evaluated { op });
        if holds {
            return Ok(self);
        }

        obs::record(CheckEvent::Failed { op });
        Err(AssertionError {
            path: self.path,
            op,
            expected,
            actual: self.value.to_string(),
        }
        .into())
    }

    /// One equality evaluation outside a chain, at default precision.
    pub(crate) fn eval_eq(
        path: &ValuePath,
        actual: &Value,
        expected: &Value,
    ) -> Result<(), CheckError> {
        obs::record(CheckEvent::Evaluated { op: CompareOp::Eq });
        if compare_eq(actual, expected, Precision::default()) == Some(true) {
            return Ok(());
        }

        obs::record(CheckEvent::Failed { op: CompareOp::Eq });
        Err(AssertionError {
            path: path.clone(),
            op: CompareOp::Eq,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
        .into())
    }

    /// One kind evaluation outside a chain.
    pub(crate) fn eval_kind(
        path: &ValuePath,
        actual: &Value,
        kinds: &[ValueKind],
    ) -> Result<(), CheckError> {
        obs::record(CheckEvent::Evaluated {
            op: CompareOp::OfType,
        });
        if kinds.contains(&actual.kind()) {
            return Ok(());
        }

        obs::record(CheckEvent::Failed {
            op: CompareOp::OfType,
        });
        let expected = kinds
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ");

        Err(AssertionError {
            path: path.clone(),
            op: CompareOp::OfType,
            expected,
            actual: actual.kind().to_string(),
        }
        .into())
    }
}
