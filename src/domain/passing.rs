use crate::error::{Result, TollError};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

/// A single toll gate crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Passing(NaiveDateTime);

impl Passing {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    pub fn at(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Whole minutes of wall-clock time from `start` to this passing.
    ///
    /// Truncates toward zero, so 60 minutes 59 seconds counts as 60.
    pub fn elapsed_minutes_since(&self, start: &Passing) -> i64 {
        self.0.signed_duration_since(start.0).num_minutes()
    }
}

impl FromStr for Passing {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .or_else(|| s.parse::<NaiveDateTime>().ok())
            .map(Self)
            .ok_or_else(|| TollError::InvalidTimestamp(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Passing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
