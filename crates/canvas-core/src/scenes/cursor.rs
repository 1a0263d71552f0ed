use super::{FrameInput, Scene, Variant};
use crate::color::{Rgba, ACCENT_CYAN};
use crate::constants::*;
use crate::error::Result;
use crate::field::Size;
use crate::rng::SimRng;
use crate::surface::Surface;
use crate::trail::CursorTrail;
use glam::Vec2;

const TRAIL_DOT: Rgba = Rgba::new(34, 211, 238, 1.0);

/// Cursor dot, ring and trail drawn by the render loop instead of styled
/// DOM elements.
pub struct CursorTrailScene {
    trail: CursorTrail,
    size: Option<Size>,
}

impl CursorTrailScene {
    pub fn new() -> Self {
        Self {
            trail: CursorTrail::new(Vec2::ZERO),
            size: None,
        }
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }
}

impl Default for CursorTrailScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for CursorTrailScene {
    fn variant(&self) -> Variant {
        Variant::CursorTrail
    }

    fn resize(&mut self, size: Size, _rng: &mut SimRng) -> Result<()> {
        let size = size.validate()?;
        if self.size.is_none() {
            // start the overlay where the neutral pointer sits
            self.trail = CursorTrail::new(size.as_vec2() * 0.5);
        }
        self.size = Some(size);
        Ok(())
    }

    fn update(&mut self, frame: &FrameInput, _rng: &mut SimRng) {
        self.trail.update(frame.target, frame.time_ms, frame.dt_sec());
    }

    fn draw(&self, frame: &FrameInput, surface: &mut dyn Surface) {
        surface.clear();

        for (i, p) in self.trail.dot_positions().enumerate() {
            surface.fill_circle(
                p,
                CURSOR_TRAIL_RADIUS,
                TRAIL_DOT.alpha(CursorTrail::dot_opacity(i)),
            );
        }

        let (ring_width, ring_alpha) = if self.trail.is_hovering() {
            (2.0, 1.0)
        } else {
            (1.0, 0.5)
        };
        surface.stroke_circle(
            self.trail.ring_position(),
            CURSOR_RING_RADIUS * self.trail.ring_scale(),
            ring_width,
            ACCENT_CYAN.alpha(ring_alpha),
        );

        let base_radius = if self.trail.is_hovering() {
            CURSOR_DOT_RADIUS * 0.5
        } else {
            CURSOR_DOT_RADIUS
        };
        let dot_radius = base_radius * self.trail.dot_scale();
        surface.fill_glow(frame.pointer_px, dot_radius, dot_radius + 10.0, ACCENT_CYAN.alpha(0.8));
        surface.fill_circle(frame.pointer_px, dot_radius, ACCENT_CYAN);
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.trail.set_pressed(pressed);
    }

    fn set_hovering(&mut self, hovering: bool) {
        self.trail.set_hovering(hovering);
    }
}
