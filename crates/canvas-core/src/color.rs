use crate::rng::SimRng;

/// Named palette entries shared by every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorId {
    Cyan,
    LightBlue,
    Blue,
    Purple,
    White,
    StarBlue,
    Yellow,
    Orange,
    DustBlue,
    Pink,
}

impl ColorId {
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            ColorId::Cyan => [0, 200, 255],
            ColorId::LightBlue => [100, 200, 255],
            ColorId::Blue => [0, 100, 255],
            ColorId::Purple => [150, 100, 255],
            ColorId::White => [255, 255, 255],
            ColorId::StarBlue => [155, 176, 255],
            ColorId::Yellow => [255, 230, 155],
            ColorId::Orange => [255, 170, 100],
            ColorId::DustBlue => [100, 120, 255],
            ColorId::Pink => [255, 100, 200],
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba::from_rgb(self.rgb(), alpha)
    }
}

/// Straight-alpha color as consumed by a [`Surface`](crate::surface::Surface).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f32) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// Same color, different alpha (clamped to [0, 1]).
    #[inline]
    pub fn alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string for Canvas 2D style setters.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// Weighted palette; weights need not sum to one.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    entries: &'static [(ColorId, f32)],
}

impl Palette {
    pub const fn new(entries: &'static [(ColorId, f32)]) -> Self {
        Self { entries }
    }

    pub fn pick(&self, rng: &mut SimRng) -> ColorId {
        let total: f32 = self.entries.iter().map(|(_, w)| w).sum();
        let mut roll = rng.unit() * total;
        for (id, weight) in self.entries {
            if roll < *weight {
                return *id;
            }
            roll -= weight;
        }
        self.entries.last().map(|(id, _)| *id).unwrap_or(ColorId::Cyan)
    }

    pub fn contains(&self, id: ColorId) -> bool {
        self.entries.iter().any(|(c, _)| *c == id)
    }
}

pub const PARTICLE_PALETTE: Palette = Palette::new(&[
    (ColorId::Cyan, 1.0),
    (ColorId::Blue, 1.0),
    (ColorId::Purple, 1.0),
]);

pub const NETWORK_PALETTE: Palette = Palette::new(&[
    (ColorId::Cyan, 1.0),
    (ColorId::LightBlue, 1.0),
    (ColorId::Purple, 1.0),
]);

// Biased toward white and blue stars.
pub const STAR_PALETTE: Palette = Palette::new(&[
    (ColorId::White, 0.6),
    (ColorId::StarBlue, 0.2),
    (ColorId::Yellow, 0.1),
    (ColorId::Orange, 0.1),
]);

pub const DUST_PALETTE: Palette = Palette::new(&[
    (ColorId::DustBlue, 1.0),
    (ColorId::Purple, 1.0),
    (ColorId::Pink, 1.0),
]);

// Fixed accents
pub const ACCENT_CYAN: Rgba = Rgba::new(0, 200, 255, 1.0);
pub const ACCENT_BRIGHT_CYAN: Rgba = Rgba::new(0, 255, 255, 1.0);
pub const GRID_LINE: Rgba = Rgba::new(0, 180, 255, 1.0);
pub const GRID_GLOW: Rgba = Rgba::new(0, 220, 255, 1.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formats_components() {
        assert_eq!(Rgba::new(0, 200, 255, 0.5).css(), "rgba(0, 200, 255, 0.500)");
    }

    #[test]
    fn pick_stays_in_palette() {
        let mut rng = SimRng::seeded(3);
        for _ in 0..500 {
            assert!(STAR_PALETTE.contains(STAR_PALETTE.pick(&mut rng)));
        }
    }
}
