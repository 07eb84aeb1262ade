use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TEMPLATE: &[u8; 19] = b"0000-00-00T00:00:00";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid slot timestamp {input:?}: expected YYYY-MM-DDTHH:MM:SS")]
pub struct TimestampError {
    pub input: String,
}

/// A slot time as ResDiary sends it: local wall-clock time, no offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotTime(pub NaiveDateTime);

impl SlotTime {
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let err = || TimestampError {
            input: s.to_string(),
        };

        // chrono alone would accept single-digit fields, so check the shape first.
        let bytes = s.as_bytes();
        if bytes.len() != TEMPLATE.len() {
            return Err(err());
        }
        let shape_ok = bytes.iter().zip(TEMPLATE.iter()).all(|(&b, &t)| match t {
            b'0' => b.is_ascii_digit(),
            sep => b == sep,
        });
        // chrono would also take second 60 as a leap second.
        if !shape_ok || bytes[17] > b'5' {
            return Err(err());
        }

        NaiveDateTime::parse_from_str(s, FORMAT)
            .map(SlotTime)
            .map_err(|_| err())
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for SlotTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SlotTime::parse(&s).map_err(serde::de::Error::custom)
    }
}
