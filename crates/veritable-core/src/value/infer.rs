//! Type inference at the data-source boundary.
//!
//! Maps raw driver scalars onto the typed `Value` union. The mapping is
//! deterministic and total: every `RawValue` has exactly one `Value`.

use crate::{source::RawValue, types::Float64, value::Value};

/// Infer the typed value for one raw driver scalar.
///
/// Non-finite driver floats have no typed form and land on `Null`.
#[must_use]
pub fn infer(raw: RawValue) -> Value {
    match raw {
        RawValue::Bool(b) => Value::Bool(b),
        RawValue::Bytes(b) => Value::Bytes(b),
        RawValue::Date(d) => Value::Date(d),
        RawValue::DateTime(dt) => Value::DateTime(dt),
        RawValue::Decimal(d) => Value::Decimal(d),
        RawValue::Float(f) => Float64::try_new(f).map_or(Value::Null, Value::Float64),
        RawValue::Int(i) => Value::Int(i),
        RawValue::Null => Value::Null,
        RawValue::Text(s) => Value::Text(s),
        RawValue::Time(t) => Value::Time(t),
        RawValue::Uint(u) => Value::Uint(u),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Date;

    #[test]
    fn maps_each_driver_scalar() {
        assert_eq!(infer(RawValue::Int(11)), Value::Int(11));
        assert_eq!(
            infer(RawValue::Text("October".to_string())),
            Value::Text("October".to_string())
        );
        assert_eq!(
            infer(RawValue::Date(Date::new(1981, 10, 12))),
            Value::Date(Date::new(1981, 10, 12))
        );
        assert_eq!(infer(RawValue::Null), Value::Null);
    }

    #[test]
    fn non_finite_floats_become_null() {
        assert_eq!(infer(RawValue::Float(f64::NAN)), Value::Null);
        assert_eq!(infer(RawValue::Float(f64::INFINITY)), Value::Null);
        assert!(matches!(infer(RawValue::Float(1.77)), Value::Float64(_)));
    }
}
