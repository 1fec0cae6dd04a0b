use chrono::{DateTime, Utc};
use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - price point
#[derive(
    Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize,
)]
pub struct Price(f32);

impl Price {
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - epoch-millisecond timestamp
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    From,
    Into,
    Deref,
    DerefMut,
    Constructor,
    Serialize,
    Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    /// Civil-time view of the timestamp (UTC, same zone as the wire data).
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0 as i64).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Value Object - bar aggregation timeframe
///
/// The serialized form is the aggregates query-path fragment
/// (`range/{fragment}/...`), not the display label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Timeframe {
    #[strum(serialize = "5/minute")]
    #[serde(rename = "5/minute")]
    Min5,

    #[strum(serialize = "15/minute")]
    #[serde(rename = "15/minute")]
    Min15,

    #[strum(serialize = "30/minute")]
    #[serde(rename = "30/minute")]
    Min30,

    #[default]
    #[strum(serialize = "1/hour")]
    #[serde(rename = "1/hour")]
    Hour1,
}

impl Timeframe {
    /// Path fragment understood by the aggregates endpoint.
    pub fn query_fragment(&self) -> &str {
        self.as_ref()
    }

    /// Label shown on the timeframe chip row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Min5 => "5 min",
            Self::Min15 => "15 min",
            Self::Min30 => "30 min",
            Self::Hour1 => "1 hour",
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::Min5 => 5 * 60 * 1000,
            Self::Min15 => 15 * 60 * 1000,
            Self::Min30 => 30 * 60 * 1000,
            Self::Hour1 => 60 * 60 * 1000,
        }
    }
}
