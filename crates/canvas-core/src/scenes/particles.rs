use super::{FrameInput, Scene, Variant};
use crate::color::{Rgba, ACCENT_CYAN};
use crate::error::Result;
use crate::field::{FieldConfig, ParticleField, Size};
use crate::rng::SimRng;
use crate::streams::DataStreams;
use crate::surface::{ColorStop, Surface};
use glam::Vec2;

const BACKDROP: [ColorStop; 2] = [
    ColorStop::new(0.0, Rgba::new(10, 20, 40, 0.8)),
    ColorStop::new(1.0, Rgba::new(5, 10, 30, 0.8)),
];

/// Floating particles over falling data streams.
pub struct ParticleScene {
    field: ParticleField,
    streams: DataStreams,
}

impl ParticleScene {
    pub fn new(density: Option<f64>) -> Self {
        let mut config = FieldConfig::particles();
        if let Some(d) = density {
            config.density = d;
        }
        Self {
            field: ParticleField::new(config),
            streams: DataStreams::new(),
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn streams(&self) -> &DataStreams {
        &self.streams
    }
}

impl Scene for ParticleScene {
    fn variant(&self) -> Variant {
        Variant::Particles
    }

    fn resize(&mut self, size: Size, rng: &mut SimRng) -> Result<()> {
        self.field.regenerate(size, rng)?;
        self.streams.regenerate(size, rng);
        Ok(())
    }

    fn update(&mut self, frame: &FrameInput, rng: &mut SimRng) {
        self.field.step(frame.dt_ms, frame.pointer_px);
        self.streams.step(frame.dt_ms, rng);
    }

    fn draw(&self, _frame: &FrameInput, surface: &mut dyn Surface) {
        surface.clear();
        surface.fill_vertical_gradient(&BACKDROP);

        for p in self.field.particles() {
            surface.fill_circle(p.position, p.radius, p.color.with_alpha(p.opacity));
            surface.fill_circle(
                p.position,
                p.radius * 2.0,
                p.color.with_alpha(p.opacity * 0.3),
            );
        }

        for stream in self.streams.streams() {
            for seg in &stream.segments {
                let from = Vec2::new(stream.x, seg.y);
                let to = Vec2::new(stream.x, seg.y + seg.length);
                surface.stroke_faded_line(from, to, 1.0, ACCENT_CYAN.alpha(seg.opacity));
            }
        }
    }
}
