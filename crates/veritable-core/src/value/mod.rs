mod compare;
mod infer;
mod kind;

#[cfg(test)]
mod tests;

use crate::types::{Date, DateTime, Decimal, Float64, Time};
use num_traits::FromPrimitive;
use serde::Serialize;
use std::{cmp::Ordering, fmt};

// re-exports
pub use compare::{compare_eq, compare_order};
pub use infer::infer;
pub use kind::ValueKind;

///
/// CONSTANTS
///

const F64_SAFE_I64: i64 = 1i64 << 53;
const F64_SAFE_U64: u64 = 1u64 << 53;

///
/// NumericRepr
///

enum NumericRepr {
    Decimal(Decimal),
    F64(f64),
    None,
}

///
/// Value
///
/// Tagged union over every cell a snapshot can hold. Each variant keeps
/// its canonical representation; `Display` is the lossless string
/// rendering.
///
/// Null → the cell is SQL NULL.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Value {
    Bool(bool),
    Bytes(Vec<u8>),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Float64(Float64),
    Int(i64),
    Null,
    Text(String),
    Time(Time),
    Uint(u64),
}

impl Value {
    ///
    /// TYPES
    ///

    /// Semantic kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Boolean,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Decimal(_) | Self::Float64(_) | Self::Int(_) | Self::Uint(_) => ValueKind::Number,
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
            Self::Time(_) => ValueKind::Time,
        }
    }

    /// Returns true if the value is one of the numeric variants.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self.kind(), ValueKind::Number)
    }

    /// Returns true if the value is Text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns true if the value is Null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    fn numeric_repr(&self) -> NumericRepr {
        if let Some(d) = self.to_decimal() {
            return NumericRepr::Decimal(d);
        }
        if let Some(f) = self.to_f64_lossless() {
            return NumericRepr::F64(f);
        }
        NumericRepr::None
    }

    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            Self::Float64(f) => Decimal::from_f64(f.get()),
            Self::Int(i) => Decimal::from_i64(*i),
            Self::Uint(u) => Decimal::from_u64(*u),

            _ => None,
        }
    }

    // it's lossless, trust me bro
    #[expect(clippy::cast_precision_loss)]
    fn to_f64_lossless(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(f.get()),
            Self::Int(i) if (-F64_SAFE_I64..=F64_SAFE_I64).contains(i) => Some(*i as f64),
            Self::Uint(u) if *u <= F64_SAFE_U64 => Some(*u as f64),

            _ => None,
        }
    }

    ///
    /// NUMERIC COMPARISON
    ///

    /// Cross-variant numeric comparison; returns None if non-numeric.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        if !self.is_number() || !other.is_number() {
            return None;
        }

        match (self.numeric_repr(), other.numeric_repr()) {
            (NumericRepr::Decimal(a), NumericRepr::Decimal(b)) => a.partial_cmp(&b),
            (NumericRepr::F64(a), NumericRepr::F64(b)) => a.partial_cmp(&b),
            _ => None,
        }
    }

    /// Numeric zero test; returns None for non-numeric values.
    #[must_use]
    pub fn is_zero(&self) -> Option<bool> {
        self.cmp_numeric(&Self::Int(0))
            .map(|ord| ord == Ordering::Equal)
    }
}

// Lossless canonical rendering: numbers as written, temporals ISO,
// bytes as hex, null as "null".
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Bytes(bytes) => write!(f, "{}", render_bytes(bytes)),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Float64(x) => write!(f, "{x}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Null => write!(f, "null"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Time(t) => write!(f, "{t}"),
            Self::Uint(u) => write!(f, "{u}"),
        }
    }
}

/// Render a byte payload as a lowercase hex literal.
fn render_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for byte in bytes {
        use std::fmt::Write as _;
        let _ = write!(out, "{byte:02x}");
    }
    out
}

#[macro_export]
macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool       => Bool,
    Date       => Date,
    DateTime   => DateTime,
    Decimal    => Decimal,
    Float64    => Float64,
    i8         => Int,
    i16        => Int,
    i32        => Int,
    i64        => Int,
    &str       => Text,
    String     => Text,
    Time       => Time,
    u8         => Uint,
    u16        => Uint,
    u32        => Uint,
    u64        => Uint,
    Vec<u8>    => Bytes,
}

// Non-finite literals have no typed form; they land on Null and fail
// any comparison the way a null does.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Float64::try_new(v).map_or(Self::Null, Self::Float64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::from(f64::from(v))
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Build a `Vec<Value>` from heterogeneous literals; `()` stands for null.
#[macro_export]
macro_rules! values {
    ( $( $v:expr ),* $(,)? ) => {
        vec![ $( $crate::value::Value::from($v) ),* ]
    };
}
