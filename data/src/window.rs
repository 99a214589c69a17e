use std::collections::BTreeMap;

use exchange::Kline;
use serde::{Deserialize, Serialize};

/// Bounding policy for the rolling bar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Bound {
    /// Keep the N most recent bars, evicting the oldest first.
    Count(usize),
    /// Keep bars no older than this many milliseconds relative to "now".
    Horizon(u64),
}

/// Rolling window of OHLCV bars, strictly ascending by timestamp with no
/// duplicates, assembled from periodic feed snapshots.
///
/// Bars are keyed by their timestamp, so merging keeps the collection
/// sorted and deduplicated by construction. A re-merged timestamp
/// overwrites the stored bar: last write wins.
#[derive(Debug, Clone)]
pub struct DataWindow {
    bars: BTreeMap<u64, Kline>,
    bound: Bound,
}

impl DataWindow {
    pub fn new(bound: Bound) -> Self {
        Self {
            bars: BTreeMap::new(),
            bound,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> Option<&Kline> {
        self.bars.values().next_back()
    }

    /// Merges a polled batch into the window and re-applies the bound.
    ///
    /// Malformed bars are dropped; an empty or fully-malformed batch is a
    /// no-op apart from horizon trimming. Never fails.
    pub fn merge(&mut self, incoming: &[Kline], now_ms: u64) {
        for bar in incoming {
            if !bar.is_well_formed() {
                log::warn!("dropping malformed bar at t={}", bar.time);
                continue;
            }
            self.bars.insert(bar.time, *bar);
        }

        self.trim(now_ms);
    }

    fn trim(&mut self, now_ms: u64) {
        match self.bound {
            Bound::Count(max) => {
                while self.bars.len() > max {
                    self.bars.pop_first();
                }
            }
            Bound::Horizon(horizon_ms) => {
                let cutoff = now_ms.saturating_sub(horizon_ms);
                self.bars = self.bars.split_off(&cutoff);
            }
        }
    }

    /// Bars in ascending timestamp order.
    pub fn snapshot(&self) -> Vec<Kline> {
        self.bars.values().copied().collect()
    }
}
