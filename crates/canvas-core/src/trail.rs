//! Cursor overlay: a ring and a row of delayed trail dots chasing the
//! pointer.

use crate::constants::*;
use crate::spring::{Spring2, SpringConfig};
use glam::Vec2;
use std::collections::VecDeque;

const HISTORY_MS: f64 = CURSOR_TRAIL_DELAY_MS * (CURSOR_TRAIL_COUNT as f64 + 1.0);

#[derive(Clone, Copy, Debug)]
struct TimedSample {
    time_ms: f64,
    position: Vec2,
}

pub struct CursorTrail {
    ring: Spring2,
    dots: Vec<Spring2>,
    history: VecDeque<TimedSample>,
    pressed: bool,
    hovering: bool,
}

impl CursorTrail {
    pub fn new(initial: Vec2) -> Self {
        let dot_cfg = SpringConfig::new(CURSOR_TRAIL_STIFFNESS, CURSOR_TRAIL_DAMPING);
        Self {
            ring: Spring2::new(
                SpringConfig::new(CURSOR_RING_STIFFNESS, CURSOR_RING_DAMPING),
                initial,
            ),
            dots: (0..CURSOR_TRAIL_COUNT)
                .map(|_| Spring2::new(dot_cfg, initial))
                .collect(),
            history: VecDeque::from([TimedSample {
                time_ms: f64::NEG_INFINITY,
                position: initial,
            }]),
            pressed: false,
            hovering: false,
        }
    }

    #[inline]
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    #[inline]
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[inline]
    pub fn ring_position(&self) -> Vec2 {
        self.ring.position()
    }

    pub fn dot_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.dots.iter().map(Spring2::position)
    }

    /// Trail dot `i` fades linearly toward the tail.
    #[inline]
    pub fn dot_opacity(i: usize) -> f32 {
        (1.0 - i as f32 / CURSOR_TRAIL_COUNT as f32) * CURSOR_TRAIL_OPACITY
    }

    pub fn dot_scale(&self) -> f32 {
        if self.pressed {
            CURSOR_PRESSED_DOT_SCALE
        } else {
            1.0
        }
    }

    pub fn ring_scale(&self) -> f32 {
        match (self.pressed, self.hovering) {
            (true, _) => CURSOR_PRESSED_RING_SCALE,
            (false, true) => CURSOR_HOVER_RING_SCALE,
            (false, false) => 1.0,
        }
    }

    /// Record the pointer `target` at `time_ms` and advance every spring.
    pub fn update(&mut self, target: Vec2, time_ms: f64, dt_sec: f32) {
        self.history.push_back(TimedSample {
            time_ms,
            position: target,
        });
        // keep one sample older than the longest delay so the tail has a target
        while self
            .history
            .get(1)
            .is_some_and(|s| time_ms - s.time_ms > HISTORY_MS)
        {
            self.history.pop_front();
        }

        self.ring.set_target(target);
        self.ring.advance(dt_sec);
        for i in 0..self.dots.len() {
            let delayed = self.sample_at(time_ms - i as f64 * CURSOR_TRAIL_DELAY_MS);
            let dot = &mut self.dots[i];
            dot.set_target(delayed);
            dot.advance(dt_sec);
        }
    }

    /// Latest recorded target at or before `time_ms`, or the oldest one.
    fn sample_at(&self, time_ms: f64) -> Vec2 {
        self.history
            .iter()
            .rev()
            .find(|s| s.time_ms <= time_ms)
            .or_else(|| self.history.front())
            .map(|s| s.position)
            .unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_dots_lag_the_head() {
        let mut trail = CursorTrail::new(Vec2::ZERO);
        let target = Vec2::new(200.0, 0.0);
        let mut t = 0.0;
        for _ in 0..10 {
            t += 16.0;
            trail.update(target, t, 0.016);
        }
        let xs: Vec<f32> = trail.dot_positions().map(|p| p.x).collect();
        assert!(xs[0] > xs[CURSOR_TRAIL_COUNT - 1]);
    }

    #[test]
    fn opacity_fades_toward_tail() {
        assert!(CursorTrail::dot_opacity(0) > CursorTrail::dot_opacity(7));
        assert!((CursorTrail::dot_opacity(0) - CURSOR_TRAIL_OPACITY).abs() < 1e-6);
    }

    #[test]
    fn pressed_overrides_hover_scale() {
        let mut trail = CursorTrail::new(Vec2::ZERO);
        trail.set_hovering(true);
        trail.set_pressed(true);
        assert_eq!(trail.ring_scale(), CURSOR_PRESSED_RING_SCALE);
        assert_eq!(trail.dot_scale(), CURSOR_PRESSED_DOT_SCALE);
    }
}
