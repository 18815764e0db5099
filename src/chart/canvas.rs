//! Backend-neutral drawing surface used by the chart renderer.

use crate::chart::geometry::Point;
use crate::domain::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintStyle {
    Fill,
    Stroke { width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub text_size: f32,
    pub bold: bool,
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            text_size: 0.0,
            bold: false,
        }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            style: PaintStyle::Stroke { width },
            ..Self::fill(color)
        }
    }

    pub fn text(color: Color, text_size: f32, bold: bool) -> Self {
        Self {
            text_size,
            bold,
            ..Self::fill(color)
        }
    }
}

/// Primitive drawing operations a chart needs.
///
/// Text is horizontally centered on its anchor with the anchor on the baseline.
pub trait Canvas {
    /// A pie slice: the wedge between the center and the arc from `start_angle`
    /// through `sweep_angle` degrees.
    fn draw_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        sweep_angle: f64,
        paint: &Paint,
    );

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint);

    /// Draws `text` rotated clockwise by `rotation` degrees around `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Point, rotation: f64, paint: &Paint);
}

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Wedge {
        center: Point,
        radius: f32,
        start_angle: f64,
        sweep_angle: f64,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Text {
        text: String,
        anchor: Point,
        rotation: f64,
        paint: Paint,
    },
}

/// Canvas that stores every operation, for hosts that replay frames and for tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Texts drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        sweep_angle: f64,
        paint: &Paint,
    ) {
        self.commands.push(DrawCommand::Wedge {
            center,
            radius,
            start_angle,
            sweep_angle,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, rotation: f64, paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            rotation,
            paint: *paint,
        });
    }
}
