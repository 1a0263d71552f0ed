// Particle population sizing, regeneration and the wrap invariant.

use canvas_core::field::{wrap, FieldConfig};
use canvas_core::{CanvasError, ParticleField, SimRng, Size};
use glam::Vec2;

fn in_bounds(field: &ParticleField, size: Size) -> bool {
    let (w, h) = (size.width as f32, size.height as f32);
    field
        .particles()
        .iter()
        .all(|p| p.position.x >= 0.0 && p.position.x < w && p.position.y >= 0.0 && p.position.y < h)
}

#[test]
fn population_is_area_over_density() {
    let mut rng = SimRng::seeded(1);
    let mut particles = ParticleField::new(FieldConfig::particles());
    assert_eq!(particles.regenerate(Size::new(800, 600), &mut rng).unwrap(), 32);
    assert_eq!(particles.len(), 32);

    let mut nodes = ParticleField::new(FieldConfig::network());
    assert_eq!(nodes.regenerate(Size::new(800, 600), &mut rng).unwrap(), 12);
    assert_eq!(nodes.regenerate(Size::new(1920, 1080), &mut rng).unwrap(), 51);
}

#[test]
fn tiny_surface_gets_no_particles() {
    let mut field = ParticleField::new(FieldConfig::particles());
    let n = field.regenerate(Size::new(100, 100), &mut SimRng::seeded(1)).unwrap();
    assert_eq!(n, 0);
    assert!(field.is_empty());
    field.step(16.0, Vec2::new(50.0, 50.0));
}

#[test]
fn regeneration_replaces_the_whole_batch() {
    let mut rng = SimRng::seeded(9);
    let mut field = ParticleField::new(FieldConfig::particles());
    field.regenerate(Size::new(800, 600), &mut rng).unwrap();
    let small = Size::new(400, 300);
    assert_eq!(field.regenerate(small, &mut rng).unwrap(), 8);
    assert_eq!(field.size(), small);
    assert!(in_bounds(&field, small));
}

#[test]
fn regenerating_the_same_size_twice_does_not_accumulate() {
    let mut rng = SimRng::seeded(10);
    let mut field = ParticleField::new(FieldConfig::particles());
    let size = Size::new(800, 600);
    assert_eq!(field.regenerate(size, &mut rng).unwrap(), 32);
    assert_eq!(field.len(), 32);
    assert_eq!(field.regenerate(size, &mut rng).unwrap(), 32);
    assert_eq!(field.len(), 32);
}

#[test]
fn invalid_dimensions_keep_previous_population() {
    let mut rng = SimRng::seeded(3);
    let mut field = ParticleField::new(FieldConfig::particles());
    field.regenerate(Size::new(800, 600), &mut rng).unwrap();
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();

    let err = field.regenerate(Size::new(0, 600), &mut rng).unwrap_err();
    assert!(matches!(err, CanvasError::InvalidDimensions { width: 0, height: 600 }));
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
    assert_eq!(field.size(), Size::new(800, 600));
}

#[test]
fn positions_stay_wrapped_over_long_runs() {
    let size = Size::new(640, 480);
    let mut rng = SimRng::seeded(11);
    for config in [FieldConfig::particles(), FieldConfig::network()] {
        let mut field = ParticleField::new(config);
        field.regenerate(size, &mut rng).unwrap();
        let pointers = [
            Vec2::new(320.0, 240.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(639.9, 479.9),
            Vec2::new(-500.0, 2000.0),
        ];
        for i in 0..4000 {
            let dt = if i % 97 == 0 { 100.0 } else { 16.7 };
            field.step(dt, pointers[i % pointers.len()]);
            assert!(in_bounds(&field, size), "escaped at step {i}");
        }
    }
}

#[test]
fn pointer_pulls_particles_inside_the_radius() {
    let size = Size::new(800, 600);
    let mut field = ParticleField::new(FieldConfig {
        max_speed: 0.0,
        ..FieldConfig::particles()
    });
    field.regenerate(size, &mut SimRng::seeded(5)).unwrap();
    let pointer = Vec2::new(400.0, 300.0);
    let radius = field.config().attract_radius;
    let before: Vec<f32> = field
        .particles()
        .iter()
        .map(|p| p.position.distance(pointer))
        .collect();

    field.step(16.0, pointer);

    for (p, d0) in field.particles().iter().zip(before) {
        let d1 = p.position.distance(pointer);
        if d0 > 0.0 && d0 < radius * 0.9 {
            assert!(d1 < d0, "{d1} !< {d0}");
        } else if d0 < radius {
            assert!(d1 <= d0 + 1e-4);
        } else {
            assert!((d1 - d0).abs() < 1e-3);
        }
    }
}

#[test]
fn wrap_reenters_from_the_opposite_edge() {
    let bounds = Vec2::new(800.0, 600.0);
    assert_eq!(wrap(Vec2::new(-1.0, 650.0), bounds), Vec2::new(799.0, 50.0));
    assert_eq!(wrap(Vec2::new(800.0, 600.0), bounds), Vec2::ZERO);
    let tiny = wrap(Vec2::new(-1e-8, -1e-8), bounds);
    assert!(tiny.x < bounds.x && tiny.y < bounds.y);
    assert_eq!(wrap(Vec2::new(f32::NAN, 10.0), bounds), Vec2::new(0.0, 10.0));
}

#[test]
fn same_seed_same_layout() {
    let layout = |seed| {
        let mut field = ParticleField::new(FieldConfig::particles());
        field.regenerate(Size::new(1024, 768), &mut SimRng::seeded(seed)).unwrap();
        field
            .particles()
            .iter()
            .map(|p| (p.position, p.velocity, p.color))
            .collect::<Vec<_>>()
    };
    assert_eq!(layout(7), layout(7));
    assert_ne!(layout(7), layout(8));
}
