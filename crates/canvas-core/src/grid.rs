//! Pointer-lit grid lines.

use crate::constants::*;
use crate::field::Size;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug)]
pub struct GridLine {
    pub orientation: Orientation,
    /// y for horizontal lines, x for vertical ones, in pixels.
    pub offset: f32,
    /// In [GRID_MIN_INTENSITY, 1].
    pub intensity: f32,
}

impl GridLine {
    #[inline]
    pub fn has_glow(&self) -> bool {
        self.intensity > GRID_GLOW_THRESHOLD
    }

    pub fn endpoints(&self, size: Size) -> (Vec2, Vec2) {
        let dims = size.as_vec2();
        match self.orientation {
            Orientation::Horizontal => (Vec2::new(0.0, self.offset), Vec2::new(dims.x, self.offset)),
            Orientation::Vertical => (Vec2::new(self.offset, 0.0), Vec2::new(self.offset, dims.y)),
        }
    }
}

/// Intensity of a line at normalized position `t` with the pointer at
/// normalized `pointer`: full at the pointer, fading to the floor half a
/// surface away.
#[inline]
pub fn line_intensity(t: f32, pointer: f32) -> f32 {
    (1.0 - (t - pointer).abs() * 2.0).max(GRID_MIN_INTENSITY)
}

/// All grid lines for `size` with the pointer at `pointer` (normalized).
pub fn grid_lines(size: Size, pointer: Vec2) -> Vec<GridLine> {
    if !size.is_valid() {
        return Vec::new();
    }
    let dims = size.as_vec2();
    let rows = (dims.y / GRID_SPACING).floor() as usize + 1;
    let cols = (dims.x / GRID_SPACING).floor() as usize + 1;
    let mut lines = Vec::with_capacity(rows + cols);
    for i in 0..rows {
        let y = i as f32 * GRID_SPACING;
        lines.push(GridLine {
            orientation: Orientation::Horizontal,
            offset: y,
            intensity: line_intensity(y / dims.y, pointer.y),
        });
    }
    for i in 0..cols {
        let x = i as f32 * GRID_SPACING;
        lines.push(GridLine {
            orientation: Orientation::Vertical,
            offset: x,
            intensity: line_intensity(x / dims.x, pointer.x),
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_include_both_edges() {
        let lines = grid_lines(Size::new(80, 40), Vec2::splat(0.5));
        let h = lines
            .iter()
            .filter(|l| l.orientation == Orientation::Horizontal)
            .count();
        assert_eq!(h, 2); // y = 0, 40
        assert_eq!(lines.len() - h, 3); // x = 0, 40, 80
    }

    #[test]
    fn intensity_peaks_at_pointer() {
        assert_eq!(line_intensity(0.3, 0.3), 1.0);
        assert_eq!(line_intensity(1.0, 0.0), GRID_MIN_INTENSITY);
    }
}
