use super::frame::{Frame, TextAlign, TextBaseline};
use super::layout::{CandleGeometry, Layout, PADDING_BOTTOM, PADDING_LEFT, PADDING_TOP};
use super::{DrawCommand, scale};
use crate::style;

/// Paints the candlestick plot into a draw-command list.
///
/// Pure function of the layout and hover state; an empty layout yields no
/// commands. Order: axis lines, price gridlines and labels, time labels,
/// candles, hover highlight, axis unit labels.
pub fn paint(layout: &Layout, hover: Option<usize>) -> Vec<DrawCommand> {
    if layout.is_empty() {
        return Vec::new();
    }

    let mut frame = Frame::new();

    draw_axes(&mut frame, layout);
    draw_price_scale(&mut frame, layout);
    draw_time_labels(&mut frame, layout);

    for candle in &layout.candles {
        draw_candle(&mut frame, candle);
    }

    if let Some(index) = hover {
        draw_highlight(&mut frame, layout, index);
    }

    draw_unit_labels(&mut frame, layout);

    frame.into_commands()
}

fn draw_axes(frame: &mut Frame, layout: &Layout) {
    let bottom = layout.plot_bottom();

    frame.stroke_line(PADDING_LEFT, PADDING_TOP, PADDING_LEFT, bottom, style::AXIS, 1.0);
    frame.stroke_line(PADDING_LEFT, bottom, layout.plot_right(), bottom, style::AXIS, 1.0);
}

fn draw_price_scale(frame: &mut Frame, layout: &Layout) {
    for (value, y) in scale::price_ticks(layout.price_min, layout.price_max, layout.surface_height)
    {
        frame.fill_text(
            format!("{value:.2}"),
            PADDING_LEFT - 18.0,
            y,
            style::LABEL,
            style::LABEL_TEXT_SIZE,
            false,
            TextAlign::Right,
            TextBaseline::Middle,
        );
        frame.stroke_line(PADDING_LEFT, y, layout.plot_right(), y, style::GRIDLINE, 1.0);
    }
}

fn draw_time_labels(frame: &mut Frame, layout: &Layout) {
    for candle in &layout.candles {
        frame.fill_text(
            scale::time_label(candle.time),
            candle.wick_x,
            layout.plot_bottom() + 6.0,
            style::LABEL,
            style::LABEL_TEXT_SIZE,
            false,
            TextAlign::Center,
            TextBaseline::Top,
        );
    }
}

fn draw_candle(frame: &mut Frame, candle: &CandleGeometry) {
    let color = style::direction_color(candle.is_up);

    frame.stroke_line(
        candle.wick_x,
        candle.wick_top,
        candle.wick_x,
        candle.wick_bottom,
        color,
        1.0,
    );
    frame.fill_rectangle(
        candle.body.x,
        candle.body.y,
        candle.body.width,
        candle.body.height,
        color,
    );
}

fn draw_highlight(frame: &mut Frame, layout: &Layout, index: usize) {
    let Some(candle) = layout.candles.get(index) else {
        return;
    };

    frame.fill_rectangle_alpha(
        candle.body.x - 2.0,
        PADDING_TOP,
        layout.bar_width + 4.0,
        scale::plot_height(layout.surface_height),
        style::HIGHLIGHT,
        style::HIGHLIGHT_ALPHA,
    );
}

fn draw_unit_labels(frame: &mut Frame, layout: &Layout) {
    frame.fill_text(
        "Price",
        PADDING_LEFT + 4.0,
        PADDING_TOP - 18.0,
        style::UNIT_LABEL,
        style::UNIT_TEXT_SIZE,
        true,
        TextAlign::Left,
        TextBaseline::Alphabetic,
    );
    frame.fill_text(
        "Time",
        layout.plot_right(),
        layout.surface_height - PADDING_BOTTOM + 24.0,
        style::UNIT_LABEL,
        style::UNIT_TEXT_SIZE,
        true,
        TextAlign::Right,
        TextBaseline::Alphabetic,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::MIN_BODY_HEIGHT;
    use exchange::Kline;

    fn sample_layout() -> Layout {
        let bars = vec![
            Kline::new(1, 18461.9, 18800.0, 18400.0, 18700.0, 67.0),
            Kline::new(2, 18700.0, 19100.0, 18650.0, 19000.0, 80.0),
            Kline::new(3, 19000.0, 19800.0, 18900.0, 19777.0, 120.0),
        ];
        Layout::compute(&bars, 700.0, 320.0)
    }

    fn rects(commands: &[DrawCommand]) -> Vec<&DrawCommand> {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .collect()
    }

    #[test]
    fn empty_layout_paints_nothing() {
        let layout = Layout::compute(&[], 700.0, 320.0);
        assert!(paint(&layout, None).is_empty());
        assert!(paint(&layout, Some(0)).is_empty());
    }

    #[test]
    fn paint_starts_with_axes_and_ends_with_unit_labels() {
        let commands = paint(&sample_layout(), None);

        assert!(matches!(
            commands[0],
            DrawCommand::Line { color: style::AXIS, .. }
        ));
        assert!(matches!(
            commands[commands.len() - 2],
            DrawCommand::Text { ref content, bold: true, .. } if content == "Price"
        ));
        assert!(matches!(
            commands[commands.len() - 1],
            DrawCommand::Text { ref content, bold: true, .. } if content == "Time"
        ));
    }

    #[test]
    fn price_scale_interpolates_between_window_extremes() {
        let commands = paint(&sample_layout(), None);

        let labels: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, color, .. } if *color == style::LABEL => {
                    Some(content.as_str())
                }
                _ => None,
            })
            .collect();

        assert!(labels.contains(&"18400.00"));
        assert!(labels.contains(&"19800.00"));
        assert!(labels.contains(&"18680.00")); // first interpolated step

        let gridlines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { color: style::GRIDLINE, .. }))
            .count();
        assert_eq!(gridlines, scale::PRICE_STEPS + 1);
    }

    #[test]
    fn candles_are_colored_by_direction() {
        let bars = vec![
            Kline::new(1, 18700.0, 18800.0, 18400.0, 18500.0, 67.0), // down
            Kline::new(2, 18700.0, 19100.0, 18650.0, 19000.0, 80.0), // up
        ];
        let layout = Layout::compute(&bars, 700.0, 320.0);
        let commands = paint(&layout, None);

        let body_colors: Vec<&str> = rects(&commands)
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { color, alpha, .. } if *alpha == 1.0 => Some(*color),
                _ => None,
            })
            .collect();

        assert_eq!(body_colors, vec![style::DOWN, style::UP]);
    }

    #[test]
    fn doji_body_keeps_minimum_height() {
        let doji = Kline::new(1, 19_500.0, 19_500.0, 19_500.0, 19_500.0, 0.0);
        let layout = Layout::compute(&[doji], 700.0, 320.0);
        let commands = paint(&layout, None);

        let body = rects(&commands)
            .into_iter()
            .find_map(|c| match c {
                DrawCommand::Rect { height, alpha, .. } if *alpha == 1.0 => Some(*height),
                _ => None,
            })
            .expect("doji still paints a body");
        assert_eq!(body, MIN_BODY_HEIGHT);
    }

    #[test]
    fn hover_adds_exactly_one_highlight_over_the_column() {
        let layout = sample_layout();

        let without = paint(&layout, None);
        assert!(!without.iter().any(
            |c| matches!(c, DrawCommand::Rect { alpha, .. } if *alpha < 1.0)
        ));

        let with = paint(&layout, Some(1));
        let highlights: Vec<&DrawCommand> = with
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { alpha, .. } if *alpha < 1.0))
            .collect();
        assert_eq!(highlights.len(), 1);

        let hovered = layout.candles[1].body;
        match highlights[0] {
            DrawCommand::Rect { x, y, width, alpha, .. } => {
                assert_eq!(*x, hovered.x - 2.0);
                assert_eq!(*y, PADDING_TOP);
                assert_eq!(*width, layout.bar_width + 4.0);
                assert_eq!(*alpha, style::HIGHLIGHT_ALPHA);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn out_of_range_hover_is_ignored() {
        let layout = sample_layout();
        let normal = paint(&layout, None);
        let stale_hover = paint(&layout, Some(99));
        assert_eq!(normal, stale_hover);
    }

    #[test]
    fn time_labels_sit_under_each_bar() {
        let commands = paint(&sample_layout(), None);
        let time_labels = commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DrawCommand::Text { baseline: TextBaseline::Top, align: TextAlign::Center, .. }
                )
            })
            .count();
        assert_eq!(time_labels, 3);
    }
}
