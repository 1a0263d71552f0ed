//! Damped second-order follower used for every pointer-driven value.
//!
//! The acceleration is `(-k * (x - target) - c * v) / m`, integrated with
//! semi-implicit Euler in short sub-steps so stiff cursor springs stay stable
//! at low frame rates.

use crate::constants::{SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED};
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance below which the spring may settle onto its target.
    pub rest_delta: f32,
    /// Speed below which the spring may settle onto its target.
    pub rest_speed: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }

    /// ζ = c / (2√(k·m)); 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        let km = (self.stiffness * self.mass).max(f32::EPSILON);
        self.damping / (2.0 * km.sqrt())
    }

    /// Largest overshoot past the target, as a fraction of the initial
    /// distance, for a step response starting at rest.
    pub fn overshoot_bound(&self) -> f32 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-std::f32::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }

    fn is_valid(&self) -> bool {
        self.stiffness > 0.0 && self.damping >= 0.0 && self.mass > 0.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(
            crate::constants::BACKGROUND_STIFFNESS,
            crate::constants::BACKGROUND_DAMPING,
        )
    }
}

/// Two-axis spring state.
#[derive(Clone, Debug)]
pub struct Spring2 {
    config: SpringConfig,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: Vec2) -> Self {
        let config = if config.is_valid() {
            config
        } else {
            log::warn!("[spring] rejected config {:?}, using defaults", config);
            SpringConfig::default()
        };
        Self {
            config,
            position: initial,
            velocity: Vec2::ZERO,
            target: initial,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity == Vec2::ZERO && self.position == self.target
    }

    /// Advance by `dt_sec` seconds.
    pub fn advance(&mut self, dt_sec: f32) {
        if !(dt_sec > 0.0) || self.is_at_rest() {
            return;
        }
        let steps = (dt_sec / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt_sec / steps as f32;
        let k = self.config.stiffness;
        let c = self.config.damping;
        let inv_m = 1.0 / self.config.mass;
        for _ in 0..steps {
            let accel = (-k * (self.position - self.target) - c * self.velocity) * inv_m;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        let settled = self.position.distance(self.target) < self.config.rest_delta
            && self.velocity.length() < self.config.rest_speed;
        if settled {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_spring_is_overdamped() {
        let cfg = SpringConfig::default();
        assert!(cfg.damping_ratio() > 1.0);
        assert_eq!(cfg.overshoot_bound(), 0.0);
    }

    #[test]
    fn underdamped_bound_is_fractional() {
        let cfg = SpringConfig::new(100.0, 4.0);
        let b = cfg.overshoot_bound();
        assert!(b > 0.0 && b < 1.0, "bound {b}");
    }

    #[test]
    fn zero_dt_does_not_move() {
        let mut s = Spring2::new(SpringConfig::default(), Vec2::ZERO);
        s.set_target(Vec2::ONE);
        s.advance(0.0);
        assert_eq!(s.position(), Vec2::ZERO);
    }

    #[test]
    fn invalid_config_falls_back() {
        let s = Spring2::new(SpringConfig::new(-1.0, 10.0), Vec2::ZERO);
        assert_eq!(*s.config(), SpringConfig::default());
    }
}
