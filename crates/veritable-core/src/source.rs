//! Data-source boundary.
//!
//! A `DataSource` executes one request and hands back raw driver rows;
//! type inference turns those into typed values during snapshot load.
//! The call is blocking and never retried.

use crate::{
    error::DataAccessError,
    types::{Date, DateTime, Decimal, Time},
    value::Value,
};

macro_rules! impl_raw_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for RawValue {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

///
/// Request
///
/// One query plus its positional parameters.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    sql: String,
    params: Vec<Value>,
}

impl Request {
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_params(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    #[must_use]
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

///
/// RawValue
///
/// Driver-level scalar as a data source hands it over, before type
/// inference.
///

#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Bool(bool),
    Bytes(Vec<u8>),
    Date(Date),
    DateTime(DateTime),
    Decimal(Decimal),
    Float(f64),
    Int(i64),
    Null,
    Text(String),
    Time(Time),
    Uint(u64),
}

impl_raw_from_for! {
    bool       => Bool,
    Date       => Date,
    DateTime   => DateTime,
    Decimal    => Decimal,
    f64        => Float,
    i32        => Int,
    i64        => Int,
    &str       => Text,
    String     => Text,
    Time       => Time,
    u64        => Uint,
}

impl From<()> for RawValue {
    fn from((): ()) -> Self {
        Self::Null
    }
}

///
/// RawTable
///
/// One result set: column names plus row-major raw values.
///

#[derive(Clone, Debug, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<RawValue>>,
}

///
/// DataSource
///
/// External collaborator supplying query results. Implementations may
/// fail with connectivity or syntax errors; nothing here retries.
///

pub trait DataSource {
    fn execute(&self, request: &Request) -> Result<RawTable, DataAccessError>;
}

///
/// MemorySource
///
/// In-memory data source keyed by the full request (sql + params).
/// Registration order is lookup order.
///

#[derive(Debug, Default)]
pub struct MemorySource {
    entries: Vec<(Request, RawTable)>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result set served for `request`.
    pub fn register(
        &mut self,
        request: Request,
        columns: &[&str],
        rows: Vec<Vec<RawValue>>,
    ) {
        let table = RawTable {
            columns: columns.iter().map(ToString::to_string).collect(),
            rows,
        };
        self.entries.push((request, table));
    }
}

impl DataSource for MemorySource {
    fn execute(&self, request: &Request) -> Result<RawTable, DataAccessError> {
        self.entries
            .iter()
            .find(|(registered, _)| registered == request)
            .map(|(_, table)| table.clone())
            .ok_or_else(|| DataAccessError::MalformedQuery {
                message: format!("no result registered for request: {}", request.sql),
            })
    }
}

///
/// TESTS
///
