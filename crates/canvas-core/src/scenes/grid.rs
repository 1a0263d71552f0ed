use super::{FrameInput, Scene, Variant};
use crate::color::{GRID_GLOW, GRID_LINE};
use crate::constants::GRID_HIGHLIGHT_RADIUS;
use crate::error::Result;
use crate::field::Size;
use crate::grid::{grid_lines, GridLine};
use crate::rng::SimRng;
use crate::surface::Surface;

#[derive(Default)]
pub struct GridScene {
    size: Option<Size>,
    lines: Vec<GridLine>,
}

impl GridScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }
}

impl Scene for GridScene {
    fn variant(&self) -> Variant {
        Variant::Grid
    }

    fn resize(&mut self, size: Size, _rng: &mut SimRng) -> Result<()> {
        self.size = Some(size.validate()?);
        Ok(())
    }

    fn update(&mut self, frame: &FrameInput, _rng: &mut SimRng) {
        if self.size.is_some() {
            self.lines = grid_lines(frame.size, frame.pointer);
        }
    }

    fn draw(&self, frame: &FrameInput, surface: &mut dyn Surface) {
        let Some(size) = self.size else {
            return;
        };
        surface.clear();
        for line in &self.lines {
            let (a, b) = line.endpoints(size);
            surface.stroke_line(a, b, line.intensity, GRID_LINE.alpha(line.intensity * 0.3));
            if line.has_glow() {
                surface.stroke_line(
                    a,
                    b,
                    line.intensity * 5.0,
                    GRID_GLOW.alpha(line.intensity * 0.1),
                );
            }
        }
        surface.fill_glow(
            frame.pointer_px,
            0.0,
            GRID_HIGHLIGHT_RADIUS,
            GRID_GLOW.alpha(0.2),
        );
    }
}
