use crate::constants::*;
use crate::rng::SimRng;
use glam::Vec2;
use instant::{Duration, Instant};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlitchConfig {
    /// Host timer period; every tick may start a glitch.
    pub interval_ms: u32,
    /// Chance per tick of starting a glitch.
    pub probability: f64,
    pub min_duration_ms: u32,
    pub max_duration_ms: u32,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            interval_ms: GLITCH_INTERVAL_MS,
            probability: GLITCH_PROBABILITY,
            min_duration_ms: GLITCH_MIN_DURATION_MS,
            max_duration_ms: GLITCH_MAX_DURATION_MS,
        }
    }
}

/// On/off flag with a randomized on-duration, driven by a fixed-interval
/// timer that runs outside the render loop.
#[derive(Clone, Debug)]
pub struct GlitchState {
    config: GlitchConfig,
    active_until: Option<Instant>,
}

impl GlitchState {
    pub fn new(config: GlitchConfig) -> Self {
        Self {
            config,
            active_until: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &GlitchConfig {
        &self.config
    }

    /// Timer tick at `now`. Returns true when a new glitch started.
    pub fn tick(&mut self, now: Instant, rng: &mut SimRng) -> bool {
        if self.is_active(now) || !rng.chance(self.config.probability) {
            return false;
        }
        let lo = self.config.min_duration_ms.min(self.config.max_duration_ms) as usize;
        let hi = self.config.max_duration_ms.max(self.config.min_duration_ms) as usize;
        let duration = Duration::from_millis(rng.between(lo, hi) as u64);
        self.active_until = Some(now + duration);
        log::trace!("[glitch] on for {:?}", duration);
        true
    }

    #[inline]
    pub fn is_active(&self, now: Instant) -> bool {
        self.active_until.is_some_and(|until| now < until)
    }

    /// Frame jitter while active, zero otherwise.
    pub fn offset(&self, now: Instant, rng: &mut SimRng) -> Vec2 {
        if self.is_active(now) {
            Vec2::new(
                rng.symmetric(GLITCH_MAX_OFFSET_PX),
                rng.symmetric(GLITCH_MAX_OFFSET_PX),
            )
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_glitch_turns_off_after_duration() {
        let mut g = GlitchState::new(GlitchConfig {
            probability: 1.0,
            min_duration_ms: 300,
            max_duration_ms: 300,
            ..GlitchConfig::default()
        });
        let mut rng = SimRng::seeded(2);
        let t0 = Instant::now();
        assert!(g.tick(t0, &mut rng));
        assert!(g.is_active(t0 + Duration::from_millis(299)));
        assert!(!g.is_active(t0 + Duration::from_millis(300)));
    }

    #[test]
    fn zero_probability_never_glitches() {
        let mut g = GlitchState::new(GlitchConfig {
            probability: 0.0,
            ..GlitchConfig::default()
        });
        let mut rng = SimRng::seeded(2);
        let t0 = Instant::now();
        for i in 0..100 {
            assert!(!g.tick(t0 + Duration::from_secs(i), &mut rng));
        }
        assert_eq!(g.offset(t0, &mut rng), Vec2::ZERO);
    }
}
