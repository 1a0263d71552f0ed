// Step responses of the pointer springs at a 60 Hz frame rate.

use canvas_core::constants::*;
use canvas_core::{Spring2, SpringConfig};
use glam::Vec2;

const FRAME_SEC: f32 = 1.0 / 60.0;

/// Run a step from 0 to 100 along x; returns (largest x seen, final x).
fn step_response(cfg: SpringConfig, seconds: f32) -> (f32, f32) {
    let mut s = Spring2::new(cfg, Vec2::ZERO);
    s.set_target(Vec2::new(100.0, 0.0));
    let mut peak = 0.0_f32;
    let frames = (seconds / FRAME_SEC) as usize;
    for _ in 0..frames {
        s.advance(FRAME_SEC);
        peak = peak.max(s.position().x);
        assert_eq!(s.position().y, 0.0);
    }
    (peak, s.position().x)
}

#[test]
fn overdamped_springs_never_pass_the_target() {
    let configs = [
        SpringConfig::new(BACKGROUND_STIFFNESS, BACKGROUND_DAMPING),
        SpringConfig::new(CURSOR_DOT_STIFFNESS, CURSOR_DOT_DAMPING),
        SpringConfig::new(CURSOR_RING_STIFFNESS, CURSOR_RING_DAMPING),
        SpringConfig::new(CURSOR_TRAIL_STIFFNESS, CURSOR_TRAIL_DAMPING),
    ];
    for cfg in configs {
        assert!(cfg.damping_ratio() > 1.0, "{cfg:?}");
        let (peak, _) = step_response(cfg, 5.0);
        assert!(peak <= 100.0 + 1e-3, "{cfg:?} peaked at {peak}");
    }
}

#[test]
fn springs_converge_to_a_fixed_target() {
    let (_, end) = step_response(SpringConfig::default(), 5.0);
    assert!((end - 100.0).abs() < 0.01, "ended at {end}");

    let (_, end) = step_response(SpringConfig::new(CURSOR_DOT_STIFFNESS, CURSOR_DOT_DAMPING), 2.0);
    assert!((end - 100.0).abs() < 0.01, "ended at {end}");
}

#[test]
fn settled_spring_snaps_to_rest() {
    let mut s = Spring2::new(SpringConfig::default(), Vec2::ZERO);
    s.set_target(Vec2::new(3.0, -4.0));
    for _ in 0..600 {
        s.advance(FRAME_SEC);
    }
    assert!(s.is_at_rest());
    assert_eq!(s.position(), Vec2::new(3.0, -4.0));
    assert_eq!(s.velocity(), Vec2::ZERO);
}

#[test]
fn underdamped_overshoot_stays_within_bound() {
    let cfg = SpringConfig::new(100.0, 4.0);
    let bound = cfg.overshoot_bound();
    let (peak, _) = step_response(cfg, 5.0);
    let overshoot = (peak - 100.0) / 100.0;
    assert!(overshoot > 0.0);
    assert!(overshoot <= bound + 0.05, "overshoot {overshoot} bound {bound}");
}

#[test]
fn long_frames_stay_stable() {
    let mut s = Spring2::new(SpringConfig::new(CURSOR_DOT_STIFFNESS, CURSOR_DOT_DAMPING), Vec2::ZERO);
    s.set_target(Vec2::new(500.0, 500.0));
    for _ in 0..20 {
        s.advance(MAX_FRAME_DT_MS as f32 / 1000.0);
        assert!(s.position().is_finite());
        assert!(s.position().max_element() <= 500.0 + 1e-3);
    }
    assert!((s.position() - Vec2::splat(500.0)).length() < 0.01);
}
