//! Canvas backend that writes an SVG document.

use std::fmt::Write;

use crate::chart::canvas::{Canvas, Paint, PaintStyle};
use crate::chart::geometry::{Point, FULL_CIRCLE};

/// Sweeps this close to a full turn are drawn as circles; an SVG arc whose
/// endpoints coincide renders nothing.
const FULL_SWEEP_EPSILON: f64 = 1e-6;

pub struct SvgCanvas {
    width: i32,
    height: i32,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Closes the document and returns it.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }
}

fn paint_attributes(paint: &Paint) -> String {
    match paint.style {
        PaintStyle::Fill => format!("fill=\"{}\"", paint.color),
        PaintStyle::Stroke { width } => {
            format!("fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"", paint.color, width)
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

impl Canvas for SvgCanvas {
    fn draw_wedge(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f64,
        sweep_angle: f64,
        paint: &Paint,
    ) {
        if sweep_angle >= FULL_CIRCLE - FULL_SWEEP_EPSILON {
            self.draw_circle(center, radius, paint);
            return;
        }
        let from = center.offset_polar(radius, start_angle);
        let to = center.offset_polar(radius, start_angle + sweep_angle);
        let large_arc = u8::from(sweep_angle > 180.0);
        let _ = writeln!(
            self.body,
            "  <path d=\"M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z\" {}/>",
            center.x,
            center.y,
            from.x,
            from.y,
            to.x,
            to.y,
            paint_attributes(paint),
            r = radius,
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let _ = writeln!(
            self.body,
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" {}/>",
            center.x,
            center.y,
            radius,
            paint_attributes(paint)
        );
    }

    fn draw_text(&mut self, text: &str, anchor: Point, rotation: f64, paint: &Paint) {
        let weight = if paint.bold { " font-weight=\"bold\"" } else { "" };
        let transform = if rotation != 0.0 {
            format!(
                " transform=\"rotate({:.2} {:.2} {:.2})\"",
                rotation, anchor.x, anchor.y
            )
        } else {
            String::new()
        };
        let _ = writeln!(
            self.body,
            "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" text-anchor=\"middle\" fill=\"{}\"{}{}>{}</text>",
            anchor.x,
            anchor.y,
            paint.text_size,
            paint.color,
            weight,
            transform,
            escape_xml(text)
        );
    }
}
