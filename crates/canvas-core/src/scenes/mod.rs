//! One scene per visual variant. A scene owns its population, advances it
//! from the per-frame input and paints itself onto a [`Surface`].

use crate::error::{CanvasError, Result};
use crate::field::Size;
use crate::pointer::PointerMode;
use crate::rng::SimRng;
use crate::spring::SpringConfig;
use crate::surface::Surface;
use glam::Vec2;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

mod cursor;
mod galaxy;
mod grid;
mod network;
mod particles;

pub use cursor::CursorTrailScene;
pub use galaxy::GalaxyScene;
pub use grid::GridScene;
pub use network::NetworkScene;
pub use particles::ParticleScene;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Grid,
    #[default]
    Particles,
    Network,
    Galaxy,
    CursorTrail,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Grid,
        Variant::Particles,
        Variant::Network,
        Variant::Galaxy,
        Variant::CursorTrail,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Grid => "grid",
            Variant::Particles => "particles",
            Variant::Network => "network",
            Variant::Galaxy => "galaxy",
            Variant::CursorTrail => "cursor-trail",
        }
    }

    pub const fn pointer_mode(self) -> PointerMode {
        match self {
            Variant::Galaxy => PointerMode::CenterOffset,
            Variant::CursorTrail => PointerMode::Absolute,
            _ => PointerMode::Normalized,
        }
    }

    pub fn default_spring(self) -> SpringConfig {
        use crate::constants::{CURSOR_DOT_DAMPING, CURSOR_DOT_STIFFNESS};
        match self {
            Variant::CursorTrail => SpringConfig::new(CURSOR_DOT_STIFFNESS, CURSOR_DOT_DAMPING),
            _ => SpringConfig::default(),
        }
    }

    /// Whether pointer events should be read from the whole window rather
    /// than the container.
    pub const fn tracks_window(self) -> bool {
        matches!(self, Variant::CursorTrail)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::UnknownVariant(s.to_string()))
    }
}

/// Everything a scene reads for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Milliseconds since the previous frame (0 on the first one).
    pub dt_ms: f32,
    /// Frame timestamp in milliseconds.
    pub time_ms: f64,
    pub size: Size,
    /// Smoothed pointer in the variant's [`PointerMode`] space.
    pub pointer: Vec2,
    /// Smoothed pointer in surface pixels.
    pub pointer_px: Vec2,
    /// Latest raw pointer target in [`PointerMode`] space.
    pub target: Vec2,
}

impl FrameInput {
    #[inline]
    pub fn dt_sec(&self) -> f32 {
        self.dt_ms / 1000.0
    }
}

pub trait Scene {
    fn variant(&self) -> Variant;

    /// Replace the population for a new surface size. Invalid sizes leave
    /// the previous population in place.
    fn resize(&mut self, size: Size, rng: &mut SimRng) -> Result<()>;

    fn update(&mut self, frame: &FrameInput, rng: &mut SimRng);

    fn draw(&self, frame: &FrameInput, surface: &mut dyn Surface);

    fn set_pressed(&mut self, _pressed: bool) {}

    fn set_hovering(&mut self, _hovering: bool) {}
}

/// Build the scene for `variant`. `density` overrides the square pixels per
/// particle for the particle and network variants.
pub fn build_scene(variant: Variant, density: Option<f64>) -> Box<dyn Scene> {
    match variant {
        Variant::Grid => Box::new(GridScene::new()),
        Variant::Particles => Box::new(ParticleScene::new(density)),
        Variant::Network => Box::new(NetworkScene::new(density)),
        Variant::Galaxy => Box::new(GalaxyScene::new()),
        Variant::CursorTrail => Box::new(CursorTrailScene::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>().unwrap(), v);
        }
        assert!("GALAXY".parse::<Variant>().is_ok());
        assert!("aurora".parse::<Variant>().is_err());
    }

    #[test]
    fn built_scene_reports_variant() {
        for v in Variant::ALL {
            assert_eq!(build_scene(v, None).variant(), v);
        }
    }
}
