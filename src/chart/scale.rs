use super::layout::{PADDING_BOTTOM, PADDING_TOP};

/// Number of intervals on the price axis; labels sit at each boundary,
/// linearly interpolated between the window's low and high.
pub const PRICE_STEPS: usize = 5;

/// Maps a price to its vertical screen position. A flat window is guarded
/// with a minimal non-zero range instead of dividing by zero.
pub fn price_to_y(price: f32, price_min: f32, price_max: f32, surface_height: f32) -> f32 {
    let range = (price_max - price_min).max(f32::EPSILON);
    PADDING_TOP + ((price_max - price) / range) * plot_height(surface_height)
}

pub fn plot_height(surface_height: f32) -> f32 {
    surface_height - PADDING_TOP - PADDING_BOTTOM
}

/// Price label boundaries, lowest first, as `(value, y)` pairs.
pub fn price_ticks(price_min: f32, price_max: f32, surface_height: f32) -> Vec<(f32, f32)> {
    let range = price_max - price_min;
    (0..=PRICE_STEPS)
        .map(|step| {
            let value = price_min + range * step as f32 / PRICE_STEPS as f32;
            let y = PADDING_TOP
                + ((PRICE_STEPS - step) as f32 / PRICE_STEPS as f32) * plot_height(surface_height);
            (value, y)
        })
        .collect()
}

/// X-axis label for a bar timestamp, `HH:MM` in UTC.
pub fn time_label(time_ms: u64) -> String {
    format_time(time_ms, "%H:%M")
}

/// Tooltip timestamp, `HH:MM:SS` in UTC.
pub fn tooltip_time(time_ms: u64) -> String {
    format_time(time_ms, "%H:%M:%S")
}

fn format_time(time_ms: u64, format: &str) -> String {
    chrono::DateTime::from_timestamp_millis(time_ms as i64)
        .map(|datetime| datetime.format(format).to_string())
        .unwrap_or_default()
}
