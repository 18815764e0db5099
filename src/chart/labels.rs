//! Sector label text and placement.

use crate::chart::geometry::{normalize_degrees, Point, Sector};
use crate::chart::measure::ChartFrame;
use crate::config::{ChartConfig, LabelOrientation};

const ELLIPSIS: &str = "...";

/// Where and how to draw one sector label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub anchor: Point,
    /// Clockwise rotation around `anchor`, in degrees within `[-90, 90]`.
    pub rotation: f64,
}

/// Shortens names longer than `max_chars` to `keep_chars` characters plus an ellipsis.
pub fn truncate_label(name: &str, max_chars: usize, keep_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let mut shortened: String = name.chars().take(keep_chars).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}

/// Maps a rotation to the equivalent one that keeps text upright.
pub fn upright(rotation: f64) -> f64 {
    let normalized = normalize_degrees(rotation);
    if normalized > 90.0 && normalized < 270.0 {
        normalized - 180.0
    } else if normalized >= 270.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Places the label for `sector`, or returns `None` when the sector is too thin.
pub fn place_label(
    sector: &Sector,
    name: &str,
    frame: &ChartFrame,
    config: &ChartConfig,
) -> Option<LabelPlacement> {
    if sector.sweep_angle <= config.label_threshold_deg {
        return None;
    }
    let mid = sector.mid_angle();
    let anchor = frame
        .center
        .offset_polar(frame.radius * config.label_radius_fraction, mid);
    let rotation = match config.label_orientation {
        LabelOrientation::Tangent => upright(mid + 90.0),
        LabelOrientation::Radial => upright(mid),
    };
    Some(LabelPlacement {
        text: truncate_label(name, config.label_max_chars, config.label_keep_chars),
        anchor,
        rotation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(offset: f64, sweep: f64) -> Sector {
        Sector {
            index: 0,
            start_angle: -90.0 + offset,
            sweep_angle: sweep,
            offset,
        }
    }

    #[test]
    fn truncates_by_characters_not_bytes() {
        assert_eq!(truncate_label("Transport", 10, 8), "Transport");
        assert_eq!(truncate_label("Entertainment", 10, 8), "Entertai...");
        assert_eq!(truncate_label("Кафе и рестораны", 10, 8), "Кафе и р...");
        assert_eq!(truncate_label("ровнодесять", 11, 8), "ровнодесять");
    }

    #[test]
    fn upright_flips_upside_down_text() {
        assert_eq!(upright(0.0), 0.0);
        assert_eq!(upright(90.0), 90.0);
        assert_eq!(upright(180.0), 0.0);
        assert_eq!(upright(200.0), 20.0);
        assert_eq!(upright(300.0), -60.0);
        assert_eq!(upright(-45.0), -45.0);
    }

    #[test]
    fn thin_sectors_get_no_label() {
        let frame = ChartFrame::from_size(400, 400, &ChartConfig::default());
        let config = ChartConfig::default();
        assert!(place_label(&sector(0.0, 10.0), "Tiny", &frame, &config).is_none());
        assert!(place_label(&sector(0.0, 10.5), "Small", &frame, &config).is_some());
    }

    #[test]
    fn label_sits_at_midpoint_on_inner_ring() {
        let frame = ChartFrame::from_size(400, 400, &ChartConfig::default());
        let config = ChartConfig::default();
        // Sector spanning the top-right quarter: midpoint at -45°.
        let label = place_label(&sector(0.0, 90.0), "Food", &frame, &config).unwrap();
        let distance = frame.center.distance_to(label.anchor);
        assert!((distance - frame.radius * 0.6).abs() < 1e-3);
        assert!(label.anchor.x > frame.center.x && label.anchor.y < frame.center.y);
        assert!((label.rotation - 45.0).abs() < 1e-9);
    }

    #[test]
    fn radial_orientation_follows_radius() {
        let frame = ChartFrame::from_size(400, 400, &ChartConfig::default());
        let config = ChartConfig {
            label_orientation: LabelOrientation::Radial,
            ..ChartConfig::default()
        };
        // Midpoint at 180° (pointing left), flipped to stay upright.
        let label = place_label(&sector(180.0, 180.0), "Rent", &frame, &config).unwrap();
        assert!((label.rotation - 0.0).abs() < 1e-9);
    }
}
