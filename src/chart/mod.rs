//! The pie chart view: sector geometry, drawing and interactive selection state.

pub mod canvas;
pub mod geometry;
pub mod labels;
pub mod measure;
pub mod renderer;
pub mod state;
pub mod svg;
pub mod view;

pub use canvas::{Canvas, DrawCommand, Paint, PaintStyle, RecordingCanvas};
pub use geometry::{hit_test, layout_sectors, Point, Sector};
pub use measure::{ChartFrame, MeasureSpec};
pub use renderer::{ChartScene, PieRenderer};
pub use state::SavedState;
pub use svg::SvgCanvas;
pub use view::{MotionAction, MotionEvent, PieChartView};
