//! View sizing: square measurement and the geometry derived from the final size.

use crate::chart::geometry::Point;
use crate::config::ChartConfig;

/// Layout constraint for one axis, as handed down by the host layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The parent dictates this exact size.
    Exactly(i32),
    /// The view may be as large as this, but no larger.
    AtMost(i32),
    /// No constraint; the view picks its own size.
    Unspecified,
}

impl MeasureSpec {
    /// Resolves the constraint against the view's preferred minimum size.
    pub fn resolve(self, preferred: i32) -> i32 {
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => size.min(preferred),
            MeasureSpec::Unspecified => preferred,
        }
    }
}

/// Measures a square view: both sides take the smaller resolved dimension.
pub fn measure_square(width: MeasureSpec, height: MeasureSpec, preferred: i32) -> i32 {
    let side = width.resolve(preferred).min(height.resolve(preferred));
    side.max(0)
}

/// Geometry of a laid-out chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartFrame {
    pub width: i32,
    pub height: i32,
    pub center: Point,
    pub radius: f32,
    pub text_size: f32,
}

impl ChartFrame {
    pub fn from_size(width: i32, height: i32, config: &ChartConfig) -> Self {
        let radius = width.min(height).max(0) as f32 * config.radius_fraction;
        Self {
            width,
            height,
            center: Point::new(width as f32 / 2.0, height as f32 / 2.0),
            radius,
            text_size: radius * config.text_size_fraction,
        }
    }

    pub fn is_laid_out(&self) -> bool {
        self.radius > 0.0
    }
}
