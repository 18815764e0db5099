//! Sector layout and polar hit testing.
//!
//! Angles are in degrees and follow screen conventions: 0° points right and
//! positive angles turn clockwise because the y axis grows downward.

use crate::domain::CategoryData;

pub const FULL_CIRCLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// The point `radius` away from `self` in the direction `angle_deg`.
    pub fn offset_polar(self, radius: f32, angle_deg: f64) -> Point {
        let radians = angle_deg.to_radians();
        Point {
            x: self.x + (radians.cos() as f32) * radius,
            y: self.y + (radians.sin() as f32) * radius,
        }
    }
}

/// One category's slice of the circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    /// Index into the category list the layout was computed from.
    pub index: usize,
    /// Absolute start angle, `reference + offset`.
    pub start_angle: f64,
    pub sweep_angle: f64,
    /// Start relative to the reference angle, in `[0, 360)`.
    pub offset: f64,
}

impl Sector {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep_angle / 2.0
    }

    pub fn is_visible(&self) -> bool {
        self.sweep_angle > 0.0
    }
}

/// Amount a category contributes to the circle; non-positive amounts take no space.
fn share(category: &CategoryData) -> f64 {
    if category.amount > 0.0 {
        category.amount
    } else {
        0.0
    }
}

/// Sum of the amounts that occupy part of the circle.
pub fn positive_total(categories: &[CategoryData]) -> f64 {
    categories
        .iter()
        .map(share)
        .fold(0.0, |total, amount| total + amount)
}

/// Partitions the full circle among `categories` in list order.
///
/// Returns no sectors when nothing positive is left to draw, so callers never
/// divide by a zero total. The last sector always closes the circle exactly.
pub fn layout_sectors(categories: &[CategoryData], start_angle: f64) -> Vec<Sector> {
    let total = positive_total(categories);
    if !(total > 0.0) || !total.is_finite() {
        return Vec::new();
    }

    let last = categories.len() - 1;
    let mut accumulated = 0.0;
    let mut offset = 0.0;
    let mut sectors = Vec::with_capacity(categories.len());

    for (index, category) in categories.iter().enumerate() {
        accumulated += share(category);
        let next_offset = if index == last {
            FULL_CIRCLE
        } else {
            (accumulated / total * FULL_CIRCLE).min(FULL_CIRCLE)
        };
        sectors.push(Sector {
            index,
            start_angle: start_angle + offset,
            sweep_angle: next_offset - offset,
            offset,
        });
        offset = next_offset;
    }
    sectors
}

/// Direction of `point` as seen from `center`, normalized into `[0, 360)`.
pub fn polar_angle(center: Point, point: Point) -> f64 {
    let dx = (point.x - center.x) as f64;
    let dy = (point.y - center.y) as f64;
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Wraps any finite angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid may round up to exactly 360 for tiny negative inputs.
    if wrapped >= FULL_CIRCLE {
        0.0
    } else {
        wrapped
    }
}

/// Resolves a tap to the sector containing it.
///
/// Each sector owns the half-open interval `[offset, next_offset)`, so a tap on a
/// boundary belongs to the sector that starts there. Taps farther than `radius`
/// from `center` hit nothing.
pub fn hit_test(
    sectors: &[Sector],
    center: Point,
    radius: f32,
    tap: Point,
    start_angle: f64,
) -> Option<usize> {
    if sectors.is_empty() || !(radius > 0.0) {
        return None;
    }
    if center.distance_to(tap) > radius {
        return None;
    }

    let relative = normalize_degrees(polar_angle(center, tap) - start_angle);
    sectors.iter().enumerate().find_map(|(position, sector)| {
        let end = sectors
            .get(position + 1)
            .map(|next| next.offset)
            .unwrap_or(FULL_CIRCLE);
        (relative >= sector.offset && relative < end).then_some(sector.index)
    })
}
