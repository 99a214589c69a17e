pub mod fetcher;
pub mod poller;

use serde::{Deserialize, Serialize};

/// Market symbol served by the feed. Single-asset product.
pub const SYMBOL: &str = "PAXGUSDT";

/// One OHLCV sample for a fixed time interval.
///
/// `time` is milliseconds since epoch (the wire field is named `timestamp`)
/// and uniquely identifies a bar within a window. Invariant:
/// `low <= min(open, close) <= max(open, close) <= high`, all fields finite.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Kline {
    #[serde(rename = "timestamp")]
    pub time: u64,
    pub open: f32,
    pub close: f32,
    pub low: f32,
    pub high: f32,
    pub volume: f32,
}

impl Kline {
    pub fn new(time: u64, open: f32, high: f32, low: f32, close: f32, volume: f32) -> Self {
        Self {
            time,
            open,
            close,
            low,
            high,
            volume,
        }
    }

    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }

    /// Checks the OHLC ordering invariant and that every field is a
    /// finite, non-negative-volume number. Samples failing this are
    /// dropped at the feed boundary and never stored.
    pub fn is_well_formed(&self) -> bool {
        let Self {
            open,
            close,
            low,
            high,
            volume,
            ..
        } = *self;

        [open, close, low, high, volume].iter().all(|v| v.is_finite())
            && volume >= 0.0
            && low <= open.min(close)
            && open.max(close) <= high
    }
}

/// Payload of `GET {api_base}/latest`.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineMessage {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub data: Vec<Kline>,
}

impl KlineMessage {
    /// Consumes the message, keeping only well-formed bars.
    pub fn into_bars(self) -> Vec<Kline> {
        let total = self.data.len();
        let bars: Vec<Kline> = self.data.into_iter().filter(Kline::is_well_formed).collect();

        if bars.len() < total {
            log::warn!(
                "dropped {} malformed bar(s) from {} payload",
                total - bars.len(),
                self.topic
            );
        }

        bars
    }
}
