pub mod frame;
pub mod kline;
pub mod layout;
pub(crate) mod scale;

pub use frame::DrawCommand;
pub use layout::Layout;

use exchange::Kline;
use serde::Serialize;

/// Smallest surface height the chart will render at, in pixels.
pub const MIN_SURFACE_HEIGHT: f32 = 220.0;

/// Surface height tracks the container width: 45% of it, floored at
/// [`MIN_SURFACE_HEIGHT`].
pub fn surface_height(width: f32) -> f32 {
    MIN_SURFACE_HEIGHT.max((width * 0.45).floor())
}

/// Hovered-bar fields, formatted for the tooltip box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub time: String,
    pub open: f32,
    pub close: f32,
    pub high: f32,
    pub low: f32,
    pub volume: f32,
}

impl Tooltip {
    pub fn for_bar(bar: &Kline) -> Self {
        Self {
            time: scale::tooltip_time(bar.time),
            open: bar.open,
            close: bar.close,
            high: bar.high,
            low: bar.low,
            volume: bar.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_height_follows_container_width() {
        assert_eq!(surface_height(700.0), 315.0);
        assert_eq!(surface_height(1000.0), 450.0);
    }

    #[test]
    fn surface_height_is_floored_for_narrow_containers() {
        assert_eq!(surface_height(300.0), MIN_SURFACE_HEIGHT);
        assert_eq!(surface_height(0.0), MIN_SURFACE_HEIGHT);
    }

    #[test]
    fn tooltip_formats_bar_time_with_seconds() {
        let bar = Kline::new(1_700_000_000_000, 18461.9, 18800.0, 18400.0, 18700.0, 67.0);
        let tooltip = Tooltip::for_bar(&bar);

        assert_eq!(tooltip.time, "22:13:20");
        assert_eq!(tooltip.high, 18800.0);
    }
}
