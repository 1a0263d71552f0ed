//! Free-floating particle population with pointer attraction and toroidal
//! wrap.

use crate::color::{ColorId, Palette, PARTICLE_PALETTE};
use crate::constants::*;
use crate::error::{CanvasError, Result};
use crate::rng::SimRng;
use glam::Vec2;

/// Backing-surface size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Population size for `density` square pixels per point.
    pub fn population(&self, density: f64) -> usize {
        if density <= 0.0 {
            return 0;
        }
        (self.area() as f64 / density).floor() as usize
    }

    pub(crate) fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(CanvasError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: ColorId,
    /// Pulse phase offset in radians.
    pub phase: f32,
    /// Pulse angular rate in radians per ms.
    pub pulse_rate: f32,
}

impl Particle {
    /// Oscillation in [0, 1] at `time_ms`.
    #[inline]
    pub fn pulse(&self, time_ms: f64) -> f32 {
        ((time_ms * self.pulse_rate as f64 + self.phase as f64).sin() * 0.5 + 0.5) as f32
    }
}

/// Generation and motion parameters for one [`ParticleField`].
#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Square pixels per particle.
    pub density: f64,
    /// Initial per-axis velocity is drawn from [-max_speed, max_speed).
    pub max_speed: f32,
    /// Converts velocity units to pixels per millisecond.
    pub speed_scale: f32,
    pub attract_radius: f32,
    pub attract_strength: f32,
    pub radius_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub pulse_rate_range: (f32, f32),
    pub palette: Palette,
}

impl FieldConfig {
    /// Floating particles of the particle-field variant.
    pub fn particles() -> Self {
        Self {
            density: PARTICLE_DENSITY,
            max_speed: PARTICLE_MAX_SPEED,
            speed_scale: PARTICLE_SPEED_SCALE,
            attract_radius: PARTICLE_ATTRACT_RADIUS,
            attract_strength: PARTICLE_ATTRACT_STRENGTH,
            radius_range: (1.0, 4.0),
            opacity_range: (0.2, 0.7),
            pulse_rate_range: (0.0, 0.0),
            palette: PARTICLE_PALETTE,
        }
    }

    /// Sparse nodes of the neural-network variant.
    pub fn network() -> Self {
        Self {
            density: NETWORK_DENSITY,
            max_speed: NETWORK_MAX_SPEED,
            speed_scale: NETWORK_SPEED_SCALE,
            attract_radius: NETWORK_ATTRACT_RADIUS,
            attract_strength: NETWORK_ATTRACT_STRENGTH,
            radius_range: (1.0, 3.0),
            opacity_range: (1.0, 1.0),
            pulse_rate_range: (0.01, 0.03),
            palette: crate::color::NETWORK_PALETTE,
        }
    }
}

pub struct ParticleField {
    config: FieldConfig,
    size: Size,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            size: Size::new(0, 0),
            particles: Vec::new(),
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Replace the whole population for a `size` surface. Returns the new
    /// count. On invalid dimensions the previous population is kept.
    pub fn regenerate(&mut self, size: Size, rng: &mut SimRng) -> Result<usize> {
        let size = size.validate()?;
        let count = size.population(self.config.density);
        let cfg = &self.config;
        let (w, h) = (size.width as f32, size.height as f32);
        self.particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.unit() * w, rng.unit() * h),
                velocity: Vec2::new(rng.symmetric(cfg.max_speed), rng.symmetric(cfg.max_speed)),
                radius: rng.range(cfg.radius_range.0, cfg.radius_range.1),
                opacity: rng.range(cfg.opacity_range.0, cfg.opacity_range.1),
                color: cfg.palette.pick(rng),
                phase: rng.angle(),
                pulse_rate: rng.range(cfg.pulse_rate_range.0, cfg.pulse_rate_range.1),
            })
            .collect();
        self.size = size;
        log::debug!(
            "[field] regenerated {} particles for {}x{}",
            count,
            size.width,
            size.height
        );
        Ok(count)
    }

    /// Advance every particle by `dt_ms` with the pointer at `pointer_px`.
    pub fn step(&mut self, dt_ms: f32, pointer_px: Vec2) {
        if !self.size.is_valid() {
            return;
        }
        let dt_ms = dt_ms.max(0.0);
        let frame_ratio = (dt_ms / REFERENCE_FRAME_MS).min(1.0);
        let bounds = self.size.as_vec2();
        let radius = self.config.attract_radius;
        let strength = self.config.attract_strength;
        let scale = self.config.speed_scale;
        for p in &mut self.particles {
            let to_pointer = pointer_px - p.position;
            let distance = to_pointer.length();
            if distance < radius {
                let falloff = 1.0 - distance / radius;
                p.position += to_pointer * (falloff * strength * frame_ratio);
            }
            p.position += p.velocity * (dt_ms * scale);
            p.position = wrap(p.position, bounds);
        }
    }
}

/// Toroidal wrap into [0, bounds.x) × [0, bounds.y).
#[inline]
pub fn wrap(p: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(p.x, bounds.x), wrap_axis(p.y, bounds.y))
}

#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_axis_maps_to_opposite_edge() {
        assert_eq!(wrap_axis(-1.0, 100.0), 99.0);
        assert_eq!(wrap_axis(100.0, 100.0), 0.0);
        assert_eq!(wrap_axis(250.0, 100.0), 50.0);
        assert_eq!(wrap_axis(-1e-9, 100.0), 0.0);
    }

    #[test]
    fn population_floors() {
        assert_eq!(Size::new(800, 600).population(15_000.0), 32);
        assert_eq!(Size::new(10, 10).population(15_000.0), 0);
    }

    #[test]
    fn step_before_regenerate_is_noop() {
        let mut field = ParticleField::new(FieldConfig::particles());
        field.step(16.0, Vec2::ZERO);
        assert!(field.is_empty());
    }
}
