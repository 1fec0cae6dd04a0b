pub use super::value_objects::{Price, Timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;

/// Domain entity - one OHLC sample
///
/// The serde renames are the wire contract: the aggregates endpoint keys
/// every record with single letters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(rename = "o")]
    pub open: Price,
    #[serde(rename = "c")]
    pub close: Price,
    #[serde(rename = "l")]
    pub low: Price,
    #[serde(rename = "h")]
    pub high: Price,
    #[serde(rename = "t")]
    pub time: Timestamp,
}

impl Bar {
    pub fn new(open: Price, close: Price, low: Price, high: Price, time: Timestamp) -> Self {
        Self { open, close, low, high, time }
    }

    /// A bar with open == close renders with the down color.
    pub fn is_bullish(&self) -> bool {
        self.open < self.close
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.time.datetime()
    }
}

/// Domain entity - one fetched batch of bars, newest-first
///
/// Index 0 is the most recent bar; ascending indices walk back in time.
/// The batch is immutable once constructed and cheap to clone.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    bars: Arc<Vec<Bar>>,
}

impl BarSeries {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars: Arc::new(bars) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn as_slice(&self) -> &[Bar] {
        &self.bars
    }

    /// Contiguous window of bars; out-of-range ends are clamped.
    pub fn slice(&self, range: Range<usize>) -> &[Bar] {
        let end = range.end.min(self.bars.len());
        let start = range.start.min(end);
        &self.bars[start..end]
    }

    /// Most recent bar (index 0 in newest-first order).
    pub fn latest(&self) -> Option<&Bar> {
        self.bars.first()
    }

    /// (min low, max high) over the given window, None when it is empty.
    pub fn price_range(&self, range: Range<usize>) -> Option<(f32, f32)> {
        let window = self.slice(range);
        let first = window.first()?;
        let mut min_low = first.low.value();
        let mut max_high = first.high.value();
        for bar in window {
            min_low = min_low.min(bar.low.value());
            max_high = max_high.max(bar.high.value());
        }
        Some((min_low, max_high))
    }

    /// Whether timestamps strictly descend, as the data source promises.
    pub fn is_newest_first(&self) -> bool {
        self.bars.windows(2).all(|pair| pair[0].time > pair[1].time)
    }
}
