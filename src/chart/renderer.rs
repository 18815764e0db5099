//! The draw pass: slices, selection outline, labels and the center ornament.

use crate::chart::canvas::{Canvas, Paint};
use crate::chart::geometry::Sector;
use crate::chart::labels::place_label;
use crate::chart::measure::ChartFrame;
use crate::config::ChartConfig;
use crate::domain::{CategoryData, Color};
use crate::utils::format_fixed;

pub const EMPTY_STATE_MESSAGE: &str = "No data";
pub const CENTER_HEADING: &str = "Total:";

const SELECTION_STROKE_WIDTH: f32 = 4.0;

/// Everything one frame needs, borrowed from the view.
pub struct ChartScene<'a> {
    pub categories: &'a [CategoryData],
    pub sectors: &'a [Sector],
    pub frame: &'a ChartFrame,
    pub selected: Option<usize>,
    pub center_label: &'a str,
}

pub struct PieRenderer<'a> {
    config: &'a ChartConfig,
}

impl<'a> PieRenderer<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, scene: &ChartScene<'_>) {
        let frame = scene.frame;
        let visible: Vec<&Sector> = scene.sectors.iter().filter(|s| s.is_visible()).collect();
        if visible.is_empty() {
            self.draw_empty_state(canvas, frame);
            return;
        }

        let label_paint = Paint::text(Color::BLACK, frame.text_size, true);
        let outline = Paint::stroke(Color::BLACK, SELECTION_STROKE_WIDTH);

        for sector in &visible {
            let Some(category) = scene.categories.get(sector.index) else {
                continue;
            };
            canvas.draw_wedge(
                frame.center,
                frame.radius,
                sector.start_angle,
                sector.sweep_angle,
                &Paint::fill(category.color),
            );
        }

        // Outline after every fill so neighbouring slices cannot cover it.
        if let Some(sector) = scene
            .selected
            .and_then(|index| visible.iter().find(|s| s.index == index))
        {
            canvas.draw_wedge(
                frame.center,
                frame.radius,
                sector.start_angle,
                sector.sweep_angle,
                &outline,
            );
        }

        for sector in &visible {
            let Some(category) = scene.categories.get(sector.index) else {
                continue;
            };
            if let Some(label) = place_label(sector, &category.category, frame, self.config) {
                canvas.draw_text(&label.text, label.anchor, label.rotation, &label_paint);
            }
        }

        self.draw_center(canvas, frame, scene.center_label);
    }

    fn draw_center<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: &ChartFrame, label: &str) {
        canvas.draw_circle(
            frame.center,
            frame.radius * self.config.center_disc_fraction,
            &Paint::fill(Color::WHITE),
        );
        let paint = Paint::text(Color::BLACK, frame.text_size, true);
        let heading = frame.center.offset_polar(frame.text_size * 0.2, -90.0);
        let amount = frame.center.offset_polar(frame.text_size * 1.0, 90.0);
        canvas.draw_text(CENTER_HEADING, heading, 0.0, &paint);
        canvas.draw_text(label, amount, 0.0, &paint);
    }

    fn draw_empty_state<C: Canvas + ?Sized>(&self, canvas: &mut C, frame: &ChartFrame) {
        canvas.draw_circle(frame.center, frame.radius, &Paint::fill(Color::LIGHT_GRAY));
        canvas.draw_text(
            EMPTY_STATE_MESSAGE,
            frame.center,
            0.0,
            &Paint::text(Color::DARK_GRAY, frame.text_size, false),
        );
    }
}

/// The running-total line shown in the center disc, e.g. `300 RUB`.
pub fn format_center_label(total: f64, currency_suffix: &str) -> String {
    let total = format_fixed(total, 0);
    if currency_suffix.is_empty() {
        total
    } else {
        format!("{total} {currency_suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::canvas::{DrawCommand, PaintStyle, RecordingCanvas};
    use crate::chart::geometry::layout_sectors;

    fn sample() -> Vec<CategoryData> {
        vec![
            CategoryData::new("Transport", 150.0, Color(0xCC0000)),
            CategoryData::new("Food", 100.0, Color(0x0099CC)),
            CategoryData::new("Tea", 5.0, Color(0x669900)),
        ]
    }

    fn render(categories: &[CategoryData], selected: Option<usize>) -> RecordingCanvas {
        let config = ChartConfig::default();
        let frame = ChartFrame::from_size(400, 400, &config);
        let sectors = layout_sectors(categories, config.start_angle_deg);
        let mut canvas = RecordingCanvas::new();
        PieRenderer::new(&config).draw(
            &mut canvas,
            &ChartScene {
                categories,
                sectors: &sectors,
                frame: &frame,
                selected,
                center_label: "255 RUB",
            },
        );
        canvas
    }

    fn wedge_count(canvas: &RecordingCanvas, stroked: bool) -> usize {
        canvas
            .commands()
            .iter()
            .filter(|command| match command {
                DrawCommand::Wedge { paint, .. } => {
                    matches!(paint.style, PaintStyle::Stroke { .. }) == stroked
                }
                _ => false,
            })
            .count()
    }

    #[test]
    fn draws_one_slice_per_visible_sector() {
        let canvas = render(&sample(), None);
        assert_eq!(wedge_count(&canvas, false), 3);
        assert_eq!(wedge_count(&canvas, true), 0);
    }

    #[test]
    fn selected_sector_gets_outline() {
        let canvas = render(&sample(), Some(1));
        assert_eq!(wedge_count(&canvas, true), 1);
        let Some(DrawCommand::Wedge { start_angle, .. }) = canvas
            .commands()
            .iter()
            .find(|c| matches!(c, DrawCommand::Wedge { paint, .. } if paint.style != PaintStyle::Fill))
        else {
            panic!("no outline drawn");
        };
        assert!((start_angle - (-90.0 + 150.0 / 255.0 * 360.0)).abs() < 1e-9);
    }

    #[test]
    fn stale_selection_is_not_highlighted() {
        let canvas = render(&sample(), Some(7));
        assert_eq!(wedge_count(&canvas, true), 0);
    }

    #[test]
    fn thin_sectors_are_unlabelled_and_center_shows_total() {
        let canvas = render(&sample(), None);
        let texts = canvas.texts();
        assert!(texts.contains(&"Transport"));
        assert!(texts.contains(&"Food"));
        assert!(!texts.contains(&"Tea"));
        assert!(texts.ends_with(&[CENTER_HEADING, "255 RUB"]));
    }

    #[test]
    fn empty_data_draws_placeholder() {
        let canvas = render(&[], None);
        assert_eq!(canvas.texts(), vec![EMPTY_STATE_MESSAGE]);
        assert_eq!(wedge_count(&canvas, false), 0);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Circle { paint, .. } if paint.color == Color::LIGHT_GRAY
        ));
    }

    #[test]
    fn center_label_formats_without_decimals() {
        assert_eq!(format_center_label(300.4, "RUB"), "300 RUB");
        assert_eq!(format_center_label(12.0, ""), "12");
    }

    #[test]
    fn center_label_never_shows_negative_zero() {
        assert_eq!(format_center_label(-0.0, "RUB"), "0 RUB");
        assert_eq!(format_center_label(-0.3, "RUB"), "0 RUB");
        assert_eq!(format_center_label(-40.0, "RUB"), "-40 RUB");
    }
}
