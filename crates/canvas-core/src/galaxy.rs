//! Spiral galaxy: stars and dust orbiting a pointer-shifted center.

use crate::color::{ColorId, Palette, Rgba, DUST_PALETTE, STAR_PALETTE};
use crate::constants::*;
use crate::error::Result;
use crate::field::Size;
use crate::rng::SimRng;
use crate::surface::ColorStop;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Star {
    /// Orbit angle in radians.
    pub angle: f32,
    /// Orbit radius in pixels.
    pub distance: f32,
    pub size: f32,
    pub opacity: f32,
    pub color: ColorId,
    /// Radians per ms.
    pub rotation_speed: f32,
    /// How strongly this point follows the pointer offset.
    pub parallax_factor: f32,
    /// Last computed screen position.
    pub position: Vec2,
}

struct Layer {
    density: f64,
    spread: f32,
    arm_twist: f32,
    size_range: (f32, f32),
    opacity_range: (f32, f32),
    rotation_jitter: (f32, f32),
    parallax_range: (f32, f32),
    palette: Palette,
}

const STAR_LAYER: Layer = Layer {
    density: GALAXY_STAR_DENSITY,
    spread: 1.0,
    arm_twist: 0.01,
    size_range: (0.5, 2.5),
    opacity_range: (0.2, 1.0),
    rotation_jitter: (0.8, 1.2),
    parallax_range: (0.7, 1.0),
    palette: STAR_PALETTE,
};

const DUST_LAYER: Layer = Layer {
    density: GALAXY_DUST_DENSITY,
    spread: GALAXY_DUST_SPREAD,
    arm_twist: 0.02,
    size_range: (0.1, 1.1),
    opacity_range: (0.1, 0.6),
    rotation_jitter: (0.6, 1.4),
    parallax_range: (0.5, 1.0),
    palette: DUST_PALETTE,
};

#[derive(Default)]
pub struct Galaxy {
    stars: Vec<Star>,
    dust: Vec<Star>,
    size: Option<Size>,
    center: Vec2,
}

impl Galaxy {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn dust(&self) -> &[Star] {
        &self.dust
    }

    /// Current (pointer-shifted) galaxy center in pixels.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn regenerate(&mut self, size: Size, rng: &mut SimRng) -> Result<()> {
        let size = size.validate()?;
        let max_radius = size.width.min(size.height) as f32 * GALAXY_RADIUS;
        self.center = size.as_vec2() * 0.5;
        self.stars = spawn_layer(&STAR_LAYER, size, max_radius, self.center, rng);
        self.dust = spawn_layer(&DUST_LAYER, size, max_radius, self.center, rng);
        self.size = Some(size);
        log::debug!(
            "[galaxy] regenerated {} stars, {} dust for {}x{}",
            self.stars.len(),
            self.dust.len(),
            size.width,
            size.height
        );
        Ok(())
    }

    /// Rotate every point by `dt_ms` and re-project around the center picked
    /// from `pointer_offset` (pixels from the container center).
    pub fn step(&mut self, dt_ms: f32, pointer_offset: Vec2) {
        let Some(size) = self.size else {
            return;
        };
        let dims = size.as_vec2();
        self.center = dims * galaxy_center_fraction(pointer_offset, dims);
        let center = self.center;
        advance_layer(&mut self.dust, dt_ms, center, pointer_offset * GALAXY_DUST_PARALLAX);
        advance_layer(&mut self.stars, dt_ms, center, pointer_offset * GALAXY_STAR_PARALLAX);
    }
}

/// Map a center offset in [-w/2, w/2]×[-h/2, h/2] onto [0.45, 0.55] of the
/// surface on each axis.
pub fn galaxy_center_fraction(offset: Vec2, dims: Vec2) -> Vec2 {
    let span = GALAXY_CENTER_MAX - GALAXY_CENTER_MIN;
    let axis = |v: f32, extent: f32| {
        if extent <= 0.0 {
            return 0.5;
        }
        let t = ((v + extent * 0.5) / extent).clamp(0.0, 1.0);
        GALAXY_CENTER_MIN + t * span
    };
    Vec2::new(axis(offset.x, dims.x), axis(offset.y, dims.y))
}

/// Soft colored haze over the galaxy. Slides opposite to the pointer by up
/// to `parallax` pixels and breathes in scale and opacity over `period_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Nebula {
    /// Gradient anchor as a fraction of the surface.
    pub anchor: Vec2,
    pub rgb: [u8; 3],
    pub alpha: f32,
    pub parallax: f32,
    pub opacity: (f32, f32),
    pub scale: (f32, f32),
    pub period_ms: f32,
    pub phase_ms: f32,
}

pub const NEBULAE: [Nebula; 3] = [
    Nebula {
        anchor: Vec2::new(0.3, 0.4),
        rgb: [100, 120, 255],
        alpha: 0.3,
        parallax: 20.0,
        opacity: (0.2, 0.3),
        scale: (1.0, 1.1),
        period_ms: 15_000.0,
        phase_ms: 0.0,
    },
    Nebula {
        anchor: Vec2::new(0.7, 0.6),
        rgb: [150, 100, 255],
        alpha: 0.3,
        parallax: 30.0,
        opacity: (0.1, 0.2),
        scale: (1.0, 1.2),
        period_ms: 20_000.0,
        phase_ms: 2_000.0,
    },
    Nebula {
        anchor: Vec2::new(0.4, 0.7),
        rgb: [255, 100, 150],
        alpha: 0.2,
        parallax: 40.0,
        opacity: (0.1, 0.15),
        scale: (1.0, 1.15),
        period_ms: 25_000.0,
        phase_ms: 4_000.0,
    },
];

/// One frame of a [`Nebula`], ready for a radial gradient fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NebulaGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: [ColorStop; 2],
}

impl Nebula {
    /// Offset in pixels for a pointer `offset` from the center: the full
    /// `parallax` at either edge, inverted, clamped beyond.
    pub fn shift(&self, offset: Vec2, dims: Vec2) -> Vec2 {
        let axis = |v: f32, extent: f32| {
            if extent <= 0.0 {
                return 0.0;
            }
            -(v / (extent * 0.5)).clamp(-1.0, 1.0) * self.parallax
        };
        Vec2::new(axis(offset.x, dims.x), axis(offset.y, dims.y))
    }

    /// 0 at rest, 1 at the peak of the breathing cycle.
    fn breath(&self, time_ms: f64) -> f32 {
        let t = ((time_ms as f32 - self.phase_ms).max(0.0) % self.period_ms) / self.period_ms;
        0.5 - 0.5 * (t * TAU).cos()
    }

    pub fn gradient(&self, time_ms: f64, offset: Vec2, dims: Vec2) -> NebulaGradient {
        let b = self.breath(time_ms);
        let lerp = |(lo, hi): (f32, f32)| lo + (hi - lo) * b;
        let center = self.anchor * dims + self.shift(offset, dims);
        // transparent at 70% of the way to the farthest corner
        let far = (self.anchor.max(Vec2::ONE - self.anchor) * dims).length();
        NebulaGradient {
            center,
            radius: far * 0.7 * lerp(self.scale),
            stops: [
                ColorStop::new(0.0, Rgba::from_rgb(self.rgb, self.alpha * lerp(self.opacity))),
                ColorStop::new(1.0, Rgba::from_rgb(self.rgb, 0.0)),
            ],
        }
    }
}

fn spawn_layer(
    layer: &Layer,
    size: Size,
    max_radius: f32,
    center: Vec2,
    rng: &mut SimRng,
) -> Vec<Star> {
    let count = size.population(layer.density);
    (0..count)
        .map(|_| {
            let arm_offset = rng.angle();
            let distance = rng.unit() * max_radius * layer.spread;
            let arm = rng.index(GALAXY_ARMS as usize) as f32;
            let angle = arm_offset
                + distance * layer.arm_twist
                + arm * std::f32::consts::TAU / GALAXY_ARMS as f32;
            Star {
                angle,
                distance,
                size: rng.range(layer.size_range.0, layer.size_range.1),
                opacity: rng.range(layer.opacity_range.0, layer.opacity_range.1),
                color: layer.palette.pick(rng),
                rotation_speed: GALAXY_ROTATION_SPEED
                    * rng.range(layer.rotation_jitter.0, layer.rotation_jitter.1),
                parallax_factor: rng.range(layer.parallax_range.0, layer.parallax_range.1),
                position: center + Vec2::from_angle(angle) * distance,
            }
        })
        .collect()
}

fn advance_layer(points: &mut [Star], dt_ms: f32, center: Vec2, parallax: Vec2) {
    for s in points {
        s.angle = (s.angle + s.rotation_speed * dt_ms) % std::f32::consts::TAU;
        s.position = center + Vec2::from_angle(s.angle) * s.distance + parallax * s.parallax_factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_offset_centers_galaxy() {
        let f = galaxy_center_fraction(Vec2::ZERO, Vec2::new(800.0, 600.0));
        assert!((f - Vec2::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn center_fraction_is_clamped() {
        let f = galaxy_center_fraction(Vec2::new(10_000.0, -10_000.0), Vec2::new(800.0, 600.0));
        assert!((f.x - GALAXY_CENTER_MAX).abs() < 1e-6);
        assert!((f.y - GALAXY_CENTER_MIN).abs() < 1e-6);
    }

    #[test]
    fn nebula_shift_is_inverted_and_clamped() {
        let dims = Vec2::new(800.0, 600.0);
        let n = NEBULAE[0];
        assert_eq!(n.shift(Vec2::ZERO, dims), Vec2::ZERO);
        let right = n.shift(Vec2::new(400.0, 0.0), dims);
        assert!((right.x + 20.0).abs() < 1e-4);
        let far = n.shift(Vec2::new(-5_000.0, 5_000.0), dims);
        assert!((far - Vec2::new(20.0, -20.0)).length() < 1e-4);
    }

    #[test]
    fn nebula_opacity_stays_within_its_range() {
        let dims = Vec2::new(800.0, 600.0);
        for n in NEBULAE {
            for step in 0..100 {
                let g = n.gradient(step as f64 * 500.0, Vec2::ZERO, dims);
                let a = g.stops[0].color.a;
                assert!(a >= n.alpha * n.opacity.0 - 1e-5 && a <= n.alpha * n.opacity.1 + 1e-5);
                assert_eq!(g.stops[1].color.a, 0.0);
            }
        }
    }
}
