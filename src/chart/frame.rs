use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

/// One drawing instruction for the canvas client.
///
/// The renderer is decoupled from any real surface: it emits these in
/// paint order and the client replays them verbatim onto its 2D context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: &'static str,
        width: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
        alpha: f32,
    },
    Text {
        content: String,
        x: f32,
        y: f32,
        color: &'static str,
        size: f32,
        bold: bool,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// Records draw commands in paint order.
///
/// Mirrors the call shape of an immediate-mode canvas frame so the
/// drawing code reads like it is painting, while staying pure.
#[derive(Debug, Default)]
pub struct Frame {
    commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: &'static str, width: f32) {
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        });
    }

    pub fn fill_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: &'static str) {
        self.fill_rectangle_alpha(x, y, width, height, color, 1.0);
    }

    pub fn fill_rectangle_alpha(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: &'static str,
        alpha: f32,
    ) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
            alpha,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_text(
        &mut self,
        content: impl Into<String>,
        x: f32,
        y: f32,
        color: &'static str,
        size: f32,
        bold: bool,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        self.commands.push(DrawCommand::Text {
            content: content.into(),
            x,
            y,
            color,
            size,
            bold,
            align,
            baseline,
        });
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}
