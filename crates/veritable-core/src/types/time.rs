use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};
use time::Time as TimeTime;

const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

///
/// Time
///
/// Wall-clock time of day stored as nanoseconds since midnight.
///

#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Time(u64);

impl Time {
    pub const MIDNIGHT: Self = Self(0);

    /// Build a time, clamping out-of-range components to the last valid
    /// value of their unit.
    #[must_use]
    pub fn new(h: u8, m: u8, s: u8) -> Self {
        Self::new_nanos(h.min(23), m.min(59), s.min(59), 0)
            .unwrap_or(Self::MIDNIGHT)
    }

    #[must_use]
    pub fn new_nanos(h: u8, m: u8, s: u8, nanos: u32) -> Option<Self> {
        let t = TimeTime::from_hms_nano(h, m, s, nanos).ok()?;
        Some(Self::from_time_time(t))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the hour component (0–23)
    #[must_use]
    pub const fn hour(self) -> u8 {
        (self.0 / NANOS_PER_HOUR) as u8
    }

    /// Returns the minute component (0–59)
    #[must_use]
    pub const fn minute(self) -> u8 {
        ((self.0 % NANOS_PER_HOUR) / NANOS_PER_MIN) as u8
    }

    /// Returns the second component (0–59)
    #[must_use]
    pub const fn second(self) -> u8 {
        ((self.0 % NANOS_PER_MIN) / NANOS_PER_SEC) as u8
    }

    /// Returns the sub-second component in nanoseconds
    #[must_use]
    pub const fn nanosecond(self) -> u32 {
        (self.0 % NANOS_PER_SEC) as u32
    }

    /// Parse `HH:MM`, `HH:MM:SS`, or `HH:MM:SS.n…` (up to nine fractional
    /// digits) into a `Time`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split(':');
        let h: u8 = parts.next()?.parse().ok()?;
        let m: u8 = parts.next()?.parse().ok()?;

        let (sec, nanos) = match parts.next() {
            None => (0, 0),
            Some(rest) => {
                let (sec_str, frac) = match rest.split_once('.') {
                    Some((sec_str, frac)) => (sec_str, Some(frac)),
                    None => (rest, None),
                };
                let sec: u8 = sec_str.parse().ok()?;
                let nanos = match frac {
                    None => 0,
                    Some(frac) => parse_fraction(frac)?,
                };
                (sec, nanos)
            }
        };

        if parts.next().is_some() {
            return None;
        }

        Self::new_nanos(h, m, sec, nanos)
    }

    /// Drop every component finer than `unit_nanos`.
    #[must_use]
    pub(crate) const fn truncate_to_unit(self, unit_nanos: u64) -> Self {
        Self(self.0 - self.0 % unit_nanos)
    }

    fn from_time_time(t: TimeTime) -> Self {
        let (h, m, s, n) = t.as_hms_nano();
        Self(
            u64::from(h) * NANOS_PER_HOUR
                + u64::from(m) * NANOS_PER_MIN
                + u64::from(s) * NANOS_PER_SEC
                + u64::from(n),
        )
    }
}

/// Interpret a fractional-seconds suffix as nanoseconds.
///
/// Digits beyond nine are rejected rather than rounded.
fn parse_fraction(frac: &str) -> Option<u32> {
    if frac.is_empty() || frac.len() > 9 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let base: u32 = frac.parse().ok()?;
    let scale = 10u32.pow(9 - frac.len() as u32);
    Some(base * scale)
}

impl Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time({self})")
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;

        let nanos = self.nanosecond();
        if nanos > 0 {
            let frac = format!("{nanos:09}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }

        Ok(())
    }
}

impl FromStr for Time {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid time: {s}"))
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid time: {s}")))
    }
}

///
/// TESTS
///
