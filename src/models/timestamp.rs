//! Transaction timestamps
//!
//! A timestamp is stored as ISO-8601 text. Text read from disk is validated
//! and then kept exactly as written; only timestamps created here are
//! formatted by this crate, as `YYYY-MM-DDTHH:MM:SS[.ffffff]` local time.

use chrono::{DateTime, Local, NaiveDateTime, SubsecRound, Timelike};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Creation time of a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    text: String,
    local: NaiveDateTime,
}

impl Timestamp {
    /// Current local time, truncated to microseconds
    pub fn now() -> Self {
        let local = Local::now().naive_local().trunc_subsecs(6);
        let text = if local.nanosecond() == 0 {
            local.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            local.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        };
        Self { text, local }
    }

    /// Validate ISO-8601 text, with or without a UTC offset
    ///
    /// With an offset, [`Timestamp::local`] is the wall-clock time in that
    /// offset.
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        let local = match text.parse::<NaiveDateTime>() {
            Ok(local) => local,
            Err(naive_err) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.naive_local())
                .map_err(|_| naive_err)?,
        };

        Ok(Self {
            text: text.to_string(),
            local,
        })
    }

    /// The text as stored
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Wall-clock date and time, without offset
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.local
            .cmp(&other.local)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", text, e)))
    }
}
