use crate::types::{Date, Time};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

///
/// Precision
///
/// Truncation granularity applied to both operands of a temporal
/// comparison. Truncation only; no rounding.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Precision {
    #[default]
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
}

impl Precision {
    #[must_use]
    pub const fn unit_nanos(self) -> u64 {
        match self {
            Self::Nanos => 1,
            Self::Micros => 1_000,
            Self::Millis => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60 * 1_000_000_000,
        }
    }
}

///
/// DateTime
///
/// Calendar date plus wall-clock time. Field order gives the derived
/// ordering its chronological meaning.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    #[must_use]
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Widen a date to the datetime at its midnight.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self {
            date,
            time: Time::MIDNIGHT,
        }
    }

    #[must_use]
    pub const fn date(self) -> Date {
        self.date
    }

    #[must_use]
    pub const fn time(self) -> Time {
        self.time
    }

    /// Parse ISO `YYYY-MM-DDTHH:MM[:SS[.n…]]` into a `DateTime`.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, time) = s.split_once('T')?;
        Some(Self::new(Date::parse(date)?, Time::parse(time)?))
    }

    /// Drop every time component finer than `precision`.
    #[must_use]
    pub const fn truncate_to(self, precision: Precision) -> Self {
        Self {
            date: self.date,
            time: self.time.truncate_to_unit(precision.unit_nanos()),
        }
    }
}

impl Debug for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DateTime({self})")
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl FromStr for DateTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid datetime: {s}"))
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {s}")))
    }
}

///
/// TESTS
///
