//! Coercion-aware comparison between an actual tabular value and an
//! expected literal.
//!
//! Coercion rules:
//! - numeric values accept numeric text literals on either side
//! - temporal values accept ISO text literals; a date widens to midnight
//!   when paired with a datetime
//! - booleans compare only against booleans, bytes against bytes
//! - null equals only null and never orders
//!
//! `None` means the operand kinds are incomparable; the caller decides
//! how to report that.

use crate::types::{Date, DateTime, Decimal, Precision, Time};
use crate::value::Value;
use std::{cmp::Ordering, str::FromStr};

/// Equality under literal coercion.
#[must_use]
pub fn compare_eq(actual: &Value, expected: &Value, precision: Precision) -> Option<bool> {
    match (actual, expected) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Null, _) | (_, Value::Null) => Some(false),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        (Value::Bytes(a), Value::Bytes(b)) => Some(a == b),
        _ => compare_order(actual, expected, precision).map(|ord| ord == Ordering::Equal),
    }
}

/// Ordering under literal coercion. Bool and Null never order.
#[must_use]
pub fn compare_order(actual: &Value, expected: &Value, precision: Precision) -> Option<Ordering> {
    match (actual, expected) {
        // two texts are plain text, never re-parsed
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),

        (Value::Bytes(a), Value::Bytes(b)) => Some(a.as_slice().cmp(b.as_slice())),

        _ if actual.is_number() || expected.is_number() => numeric_order(actual, expected),

        (Value::Time(_), Value::Time(_) | Value::Text(_)) | (Value::Text(_), Value::Time(_)) => {
            time_order(actual, expected, precision)
        }

        (
            Value::Date(_) | Value::DateTime(_),
            Value::Date(_) | Value::DateTime(_) | Value::Text(_),
        )
        | (Value::Text(_), Value::Date(_) | Value::DateTime(_)) => {
            datetime_order(actual, expected, precision)
        }

        _ => None,
    }
}

/// Widen both sides onto the numeric plane; text parses as a decimal.
fn numeric_order(left: &Value, right: &Value) -> Option<Ordering> {
    let left = numeric_operand(left)?;
    let right = numeric_operand(right)?;
    left.cmp_numeric(&right)
}

fn numeric_operand(value: &Value) -> Option<Value> {
    match value {
        v if v.is_number() => Some(v.clone()),
        Value::Text(s) => Decimal::from_str(s.trim()).ok().map(Value::Decimal),
        _ => None,
    }
}

/// Compare on the time-of-day plane, truncated to `precision`.
fn time_order(left: &Value, right: &Value, precision: Precision) -> Option<Ordering> {
    let left = time_operand(left)?.truncate_to_unit(precision.unit_nanos());
    let right = time_operand(right)?.truncate_to_unit(precision.unit_nanos());
    Some(left.cmp(&right))
}

fn time_operand(value: &Value) -> Option<Time> {
    match value {
        Value::Time(t) => Some(*t),
        Value::Text(s) => Time::parse(s),
        _ => None,
    }
}

/// Compare on the datetime plane: dates widen to midnight, both sides
/// truncate to `precision`. The finer operand decides nothing extra;
/// truncation applies uniformly.
fn datetime_order(left: &Value, right: &Value, precision: Precision) -> Option<Ordering> {
    let left = datetime_operand(left)?.truncate_to(precision);
    let right = datetime_operand(right)?.truncate_to(precision);
    Some(left.cmp(&right))
}

fn datetime_operand(value: &Value) -> Option<DateTime> {
    match value {
        Value::Date(d) => Some(DateTime::from_date(*d)),
        Value::DateTime(dt) => Some(*dt),
        Value::Text(s) => DateTime::parse(s).or_else(|| Date::parse(s).map(DateTime::from_date)),
        _ => None,
    }
}
