//! Chart palette and text sizing, kept as CSS color strings since the
//! canvas client consumes them directly.

pub const UP: &str = "#22c55e";
pub const DOWN: &str = "#ef4444";

pub const AXIS: &str = "#bbb";
pub const GRIDLINE: &str = "#eee";
pub const LABEL: &str = "#aaa";
pub const UNIT_LABEL: &str = "#888";
pub const HIGHLIGHT: &str = "#000";
pub const HIGHLIGHT_ALPHA: f32 = 0.2;

pub const LABEL_TEXT_SIZE: f32 = 12.0;
pub const UNIT_TEXT_SIZE: f32 = 13.0;

pub fn direction_color(is_up: bool) -> &'static str {
    if is_up { UP } else { DOWN }
}
