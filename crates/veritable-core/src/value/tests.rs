use crate::{
    types::{Date, DateTime, Decimal, Float64, Precision, Time},
    value::{Value, ValueKind, compare_eq, compare_order},
    values,
};
use proptest::prelude::*;
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn v_f64(x: f64) -> Value {
    Value::Float64(Float64::try_new(x).expect("finite f64"))
}
fn v_d(mantissa: i64, scale: u32) -> Value {
    Value::Decimal(Decimal::new(mantissa, scale))
}
fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}
fn eq(a: &Value, b: &Value) -> Option<bool> {
    compare_eq(a, b, Precision::Nanos)
}
fn ord(a: &Value, b: &Value) -> Option<Ordering> {
    compare_order(a, b, Precision::Nanos)
}

// ---- kinds -------------------------------------------------------------

#[test]
fn kind_classification() {
    assert_eq!(Value::Bool(true).kind(), ValueKind::Boolean);
    assert_eq!(Value::Bytes(vec![1]).kind(), ValueKind::Bytes);
    assert_eq!(Value::Date(Date::EPOCH).kind(), ValueKind::Date);
    assert_eq!(
        Value::DateTime(DateTime::from_date(Date::EPOCH)).kind(),
        ValueKind::DateTime
    );
    assert_eq!(Value::Int(1).kind(), ValueKind::Number);
    assert_eq!(Value::Uint(1).kind(), ValueKind::Number);
    assert_eq!(v_d(177, 2).kind(), ValueKind::Number);
    assert_eq!(v_f64(1.5).kind(), ValueKind::Number);
    assert_eq!(Value::Null.kind(), ValueKind::Null);
    assert_eq!(v_txt("x").kind(), ValueKind::Text);
    assert_eq!(Value::Time(Time::MIDNIGHT).kind(), ValueKind::Time);
}

#[test]
fn kind_labels_are_lowercase() {
    assert_eq!(ValueKind::Number.to_string(), "number");
    assert_eq!(ValueKind::DateTime.to_string(), "datetime");
}

// ---- rendering ---------------------------------------------------------

#[test]
fn lossless_rendering() {
    assert_eq!(v_d(177, 2).to_string(), "1.77");
    assert_eq!(Value::Int(-7).to_string(), "-7");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bytes(vec![1, 2, 3]).to_string(), "0x010203");
    assert_eq!(
        Value::Date(Date::new(1981, 10, 12)).to_string(),
        "1981-10-12"
    );
    assert_eq!(Value::Time(Time::new(0, 41, 8)).to_string(), "00:41:08");
}

#[test]
fn serialize_temporals_as_strings() {
    let value = Value::Date(Date::new(1981, 10, 12));
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        "{\"Date\":\"1981-10-12\"}"
    );
}

// ---- numeric comparison ------------------------------------------------

#[test]
fn cmp_numeric_widens_across_variants() {
    assert_eq!(
        Value::Int(11).cmp_numeric(&Value::Uint(11)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        v_d(177, 2).cmp_numeric(&v_f64(1.77)),
        Some(Ordering::Equal)
    );
    assert_eq!(
        v_d(177, 2).cmp_numeric(&v_f64(1.5)),
        Some(Ordering::Greater)
    );
    assert_eq!(Value::Int(10).cmp_numeric(&v_d(115, 1)), Some(Ordering::Less));
}

#[test]
fn cmp_numeric_rejects_non_numbers() {
    assert_eq!(Value::Bool(true).cmp_numeric(&Value::Int(1)), None);
    assert_eq!(v_txt("11").cmp_numeric(&Value::Int(11)), None);
}

#[test]
fn is_zero_is_numeric_only() {
    assert_eq!(Value::Int(0).is_zero(), Some(true));
    assert_eq!(v_d(0, 2).is_zero(), Some(true));
    assert_eq!(v_f64(1.77).is_zero(), Some(false));
    assert_eq!(v_txt("0").is_zero(), None);
    assert_eq!(Value::Null.is_zero(), None);
}

// ---- coercion: numeric text -------------------------------------------

#[test]
fn numeric_text_coerces_for_equality_and_ordering() {
    assert_eq!(eq(&Value::Int(11), &v_txt("11")), Some(true));
    assert_eq!(eq(&v_txt("11"), &Value::Int(11)), Some(true));
    assert_eq!(eq(&v_d(177, 2), &v_txt("1.77")), Some(true));
    assert_eq!(eq(&v_d(177, 2), &v_txt("1.78")), Some(false));
    assert_eq!(ord(&v_d(177, 2), &v_txt("1.5")), Some(Ordering::Greater));
    assert_eq!(ord(&Value::Int(11), &v_txt("11.5")), Some(Ordering::Less));
}

#[test]
fn unparseable_numeric_text_is_incomparable() {
    assert_eq!(eq(&Value::Int(11), &v_txt("eleven")), None);
    assert_eq!(ord(&Value::Int(11), &v_txt("eleven")), None);
}

#[test]
fn two_texts_stay_textual() {
    // "11" as text never re-parses against another text
    assert_eq!(eq(&v_txt("11"), &v_txt("11.0")), Some(false));
    assert_eq!(ord(&v_txt("Boy"), &v_txt("October")), Some(Ordering::Less));
}

// ---- coercion: temporal -----------------------------------------------

#[test]
fn date_accepts_iso_text() {
    let birthdate = Value::Date(Date::new(1961, 8, 8));
    assert_eq!(eq(&birthdate, &v_txt("1961-08-08")), Some(true));
    assert_eq!(eq(&birthdate, &v_txt("1961-08-09")), Some(false));
    assert_eq!(ord(&birthdate, &v_txt("1961-08-07")), Some(Ordering::Greater));
    assert_eq!(ord(&birthdate, &v_txt("1961-08-09")), Some(Ordering::Less));
}

#[test]
fn date_widens_to_midnight_against_datetime() {
    let birthdate = Value::Date(Date::new(1961, 8, 8));

    assert_eq!(eq(&birthdate, &v_txt("1961-08-08T00:00")), Some(true));
    assert_eq!(eq(&birthdate, &v_txt("1961-08-08T00:00:01")), Some(false));

    let one_second = Value::DateTime(DateTime::new(
        Date::new(1961, 8, 8),
        Time::new(0, 0, 1),
    ));
    assert_eq!(ord(&birthdate, &one_second), Some(Ordering::Less));
}

#[test]
fn time_accepts_text_literals() {
    let duration = Value::Time(Time::new(0, 41, 8));
    assert_eq!(eq(&duration, &v_txt("00:41:08")), Some(true));
    assert_eq!(ord(&duration, &v_txt("00:41")), Some(Ordering::Greater));
}

#[test]
fn sub_second_precision_is_configurable() {
    let on_the_second = Value::DateTime(DateTime::parse("1961-08-08T00:00:01").unwrap());
    let with_nanos = Value::DateTime(DateTime::parse("1961-08-08T00:00:01.000000003").unwrap());

    assert_eq!(eq(&on_the_second, &with_nanos), Some(false));
    assert_eq!(
        compare_eq(&on_the_second, &with_nanos, Precision::Seconds),
        Some(true)
    );
    assert_eq!(
        compare_order(&on_the_second, &with_nanos, Precision::Millis),
        Some(Ordering::Equal)
    );
}

#[test]
fn temporal_against_unrelated_kind_is_incomparable() {
    let date = Value::Date(Date::new(1961, 8, 8));
    assert_eq!(eq(&date, &Value::Bool(true)), None);
    assert_eq!(ord(&date, &Value::Int(1)), None);
    assert_eq!(ord(&Value::Time(Time::MIDNIGHT), &date), None);
}

// ---- booleans, bytes, null --------------------------------------------

#[test]
fn booleans_compare_only_against_booleans() {
    assert_eq!(eq(&Value::Bool(true), &Value::Bool(true)), Some(true));
    assert_eq!(eq(&Value::Bool(true), &Value::Bool(false)), Some(false));
    assert_eq!(eq(&Value::Bool(true), &v_txt("true")), None);
    assert_eq!(ord(&Value::Bool(true), &Value::Bool(false)), None);
}

#[test]
fn null_equals_only_null_and_never_orders() {
    assert_eq!(eq(&Value::Null, &Value::Null), Some(true));
    assert_eq!(eq(&Value::Null, &Value::Int(0)), Some(false));
    assert_eq!(eq(&v_txt("null"), &Value::Null), Some(false));
    assert_eq!(ord(&Value::Null, &Value::Null), None);
    assert_eq!(ord(&Value::Null, &Value::Int(0)), None);
}

#[test]
fn bytes_compare_lexicographically() {
    let a = Value::Bytes(vec![1, 2]);
    let b = Value::Bytes(vec![1, 3]);
    assert_eq!(eq(&a, &a.clone()), Some(true));
    assert_eq!(ord(&a, &b), Some(Ordering::Less));
    assert_eq!(eq(&a, &v_txt("0x0102")), None);
}

// ---- construction ------------------------------------------------------

#[test]
fn values_macro_accepts_heterogeneous_literals() {
    let row = values![2, Date::new(1981, 10, 12), "October", 11, Time::new(0, 41, 8), ()];
    assert_eq!(
        row,
        vec![
            Value::Int(2),
            Value::Date(Date::new(1981, 10, 12)),
            Value::Text("October".to_string()),
            Value::Int(11),
            Value::Time(Time::new(0, 41, 8)),
            Value::Null,
        ]
    );
}

#[test]
fn from_option_and_non_finite_floats() {
    assert_eq!(Value::from(Some(7i64)), Value::Int(7));
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(f64::NAN), Value::Null);
    assert_eq!(Value::from(1.5f64), v_f64(1.5));
}

// ---- properties --------------------------------------------------------

proptest! {
    /// Exactly one of lt/eq/gt holds for any two same-kind numbers.
    #[test]
    fn ordering_totality_for_ints(a in any::<i64>(), b in any::<i64>()) {
        let ordering = ord(&Value::Int(a), &Value::Int(b)).unwrap();
        prop_assert_eq!(ordering, a.cmp(&b));
    }

    /// Date ordering matches calendar-component ordering.
    #[test]
    fn ordering_totality_for_dates(
        a in (1900i32..2100, 1u8..=12, 1u8..=28),
        b in (1900i32..2100, 1u8..=12, 1u8..=28),
    ) {
        let da = Date::new(a.0, a.1, a.2);
        let db = Date::new(b.0, b.1, b.2);
        let ordering = ord(&Value::Date(da), &Value::Date(db)).unwrap();
        prop_assert_eq!(ordering, a.cmp(&b));
    }

    /// A date always equals its own canonical rendering.
    #[test]
    fn date_render_round_trip(y in 1900i32..2100, m in 1u8..=12, d in 1u8..=31) {
        let date = Date::new(y, m, d);
        let rendered = Value::Date(date).to_string();
        prop_assert_eq!(eq(&Value::Date(date), &Value::Text(rendered)), Some(true));
    }

    /// Numeric text coercion agrees with native decimal ordering.
    #[test]
    fn numeric_text_agrees_with_decimal(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let expected = a.cmp(&b);
        let found = ord(&Value::Int(a), &Value::Text(b.to_string())).unwrap();
        prop_assert_eq!(found, expected);
    }
}
