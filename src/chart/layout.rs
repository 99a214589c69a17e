use exchange::Kline;

use super::scale;

pub const PADDING_LEFT: f32 = 72.0;
pub const PADDING_RIGHT: f32 = 40.0;
pub const PADDING_TOP: f32 = 40.0;
pub const PADDING_BOTTOM: f32 = 40.0;

pub const BAR_GAP: f32 = 8.0;
pub const MIN_BAR_WIDTH: f32 = 12.0;
pub const MAX_BAR_WIDTH: f32 = 40.0;

/// Zero-change bars still get a visible body.
pub const MIN_BODY_HEIGHT: f32 = 2.0;

/// Width of one bar column, fitting `count` bars plus `count + 1` gaps
/// into the drawable width, clamped to the configured band. At the clamp
/// edges the bars may overflow or underfill the surface; that is accepted
/// rather than corrected by shrinking gaps.
///
/// Hit-testing and layout both resolve geometry through this function and
/// [`bar_x`], so they cannot disagree.
pub fn bar_width(count: usize, surface_width: f32) -> f32 {
    let drawable =
        surface_width - PADDING_LEFT - PADDING_RIGHT - (count as f32 + 1.0) * BAR_GAP;
    (drawable / count as f32).clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}

/// Left edge of the bar at `index`.
pub fn bar_x(index: usize, bar_width: f32) -> f32 {
    PADDING_LEFT + BAR_GAP + index as f32 * (bar_width + BAR_GAP)
}

/// Resolves a cursor x coordinate to the bar whose column contains it.
/// A coordinate over a gap or outside all bars yields no hover.
pub fn hit_test(x: f32, bar_count: usize, surface_width: f32) -> Option<usize> {
    if bar_count == 0 {
        return None;
    }

    let width = bar_width(bar_count, surface_width);
    (0..bar_count).find(|&index| {
        let left = bar_x(index, width);
        x >= left && x <= left + width
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Screen geometry of a single candlestick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandleGeometry {
    pub time: u64,
    pub body: BodyRect,
    pub wick_x: f32,
    pub wick_top: f32,
    pub wick_bottom: f32,
    pub is_up: bool,
}

/// Per-render geometry of the whole plot, fully determined by the bars
/// and the surface dimensions. Recomputed on every render, never cached.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub surface_width: f32,
    pub surface_height: f32,
    pub price_min: f32,
    pub price_max: f32,
    pub bar_width: f32,
    pub candles: Vec<CandleGeometry>,
}

impl Layout {
    pub fn compute(bars: &[Kline], surface_width: f32, surface_height: f32) -> Self {
        if bars.is_empty() {
            return Self {
                surface_width,
                surface_height,
                ..Self::default()
            };
        }

        let price_max = bars.iter().map(|b| b.high).fold(f32::MIN, f32::max);
        let price_min = bars.iter().map(|b| b.low).fold(f32::MAX, f32::min);

        let width = bar_width(bars.len(), surface_width);
        let price_to_y =
            |price: f32| scale::price_to_y(price, price_min, price_max, surface_height);

        let candles = bars
            .iter()
            .enumerate()
            .map(|(index, bar)| {
                let x = bar_x(index, width);
                let y_open = price_to_y(bar.open);
                let y_close = price_to_y(bar.close);

                CandleGeometry {
                    time: bar.time,
                    body: BodyRect {
                        x,
                        y: y_open.min(y_close),
                        width,
                        height: (y_open - y_close).abs().max(MIN_BODY_HEIGHT),
                    },
                    wick_x: x + width / 2.0,
                    wick_top: price_to_y(bar.high),
                    wick_bottom: price_to_y(bar.low),
                    is_up: bar.is_up(),
                }
            })
            .collect();

        Self {
            surface_width,
            surface_height,
            price_min,
            price_max,
            bar_width: width,
            candles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn plot_bottom(&self) -> f32 {
        self.surface_height - PADDING_BOTTOM
    }

    pub fn plot_right(&self) -> f32 {
        self.surface_width - PADDING_RIGHT
    }
}
