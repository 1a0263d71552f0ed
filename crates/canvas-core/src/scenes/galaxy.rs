use super::{FrameInput, Scene, Variant};
use crate::color::Rgba;
use crate::error::Result;
use crate::field::Size;
use crate::galaxy::{Galaxy, NEBULAE};
use crate::rng::SimRng;
use crate::surface::{ColorStop, Surface};

const BACKDROP: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(10, 15, 30, 1.0)),
    ColorStop::new(0.5, Rgba::new(5, 10, 20, 1.0)),
    ColorStop::new(1.0, Rgba::new(0, 0, 10, 1.0)),
];

#[derive(Default)]
pub struct GalaxyScene {
    galaxy: Galaxy,
    size: Option<Size>,
}

impl GalaxyScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }
}

impl Scene for GalaxyScene {
    fn variant(&self) -> Variant {
        Variant::Galaxy
    }

    fn resize(&mut self, size: Size, rng: &mut SimRng) -> Result<()> {
        self.galaxy.regenerate(size, rng)?;
        self.size = Some(size);
        Ok(())
    }

    fn update(&mut self, frame: &FrameInput, _rng: &mut SimRng) {
        // the galaxy reads the raw center offset, not surface pixels
        self.galaxy.step(frame.dt_ms, frame.pointer);
    }

    fn draw(&self, frame: &FrameInput, surface: &mut dyn Surface) {
        let Some(size) = self.size else {
            return;
        };
        let center = self.galaxy.center();
        let reach = size.width.max(size.height) as f32 * 0.8;
        surface.fill_radial_gradient(center, reach, &BACKDROP);

        // dust sits behind the stars; layer and color alpha both apply
        for d in self.galaxy.dust() {
            surface.fill_circle(d.position, d.size, d.color.with_alpha(d.opacity * d.opacity));
        }
        for s in self.galaxy.stars() {
            let color = s.color.with_alpha(s.opacity * s.opacity);
            surface.fill_glow(s.position, 0.0, s.size * 3.0, color);
            surface.fill_circle(s.position, s.size, color);
        }

        let dims = size.as_vec2();
        for nebula in &NEBULAE {
            let g = nebula.gradient(frame.time_ms, frame.pointer, dims);
            surface.fill_radial_gradient(g.center, g.radius, &g.stops);
        }
    }
}
