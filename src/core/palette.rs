//! The fixed category palette.

use crate::domain::Color;

/// Colors assigned to categories in first-seen order, wrapping around.
pub const CATEGORY_PALETTE: [Color; 12] = [
    Color(0xCC0000),
    Color(0x0099CC),
    Color(0x669900),
    Color(0xFF8800),
    Color(0xAA66CC),
    Color(0xAAAAAA),
    Color(0x33B5E5),
    Color(0x99CC00),
    Color(0xFFBB33),
    Color(0xFF4444),
    Color(0x6200EE),
    Color(0x03DAC5),
];

/// Palette color for the category first seen at `position`.
pub fn color_for(position: usize) -> Color {
    CATEGORY_PALETTE[position % CATEGORY_PALETTE.len()]
}
