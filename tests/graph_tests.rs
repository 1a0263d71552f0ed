// Connection graph construction and per-frame behaviour.

use canvas_core::constants::*;
use canvas_core::field::FieldConfig;
use canvas_core::{ConnectionGraph, ParticleField, SimRng, Size};
use std::collections::{HashMap, HashSet};

#[test]
fn no_self_edges_and_no_repeated_pairs() {
    for seed in 0..20 {
        let mut g = ConnectionGraph::new();
        g.build(50, &mut SimRng::seeded(seed));
        let mut pairs = HashSet::new();
        for e in g.edges() {
            assert_ne!(e.from, e.to, "seed {seed}");
            assert!(e.from < 50 && e.to < 50);
            assert!(pairs.insert((e.from.min(e.to), e.from.max(e.to))), "seed {seed}");
        }
    }
}

#[test]
fn each_node_adds_at_most_the_max_edges() {
    let mut g = ConnectionGraph::new();
    g.build(50, &mut SimRng::seeded(4));
    let mut out: HashMap<usize, usize> = HashMap::new();
    for e in g.edges() {
        *out.entry(e.from).or_default() += 1;
    }
    assert!(out.values().all(|&n| n <= NETWORK_MAX_EDGES_PER_NODE));
    assert!(g.len() >= 50);
    assert!(g.len() <= 50 * NETWORK_MAX_EDGES_PER_NODE);
}

#[test]
fn some_edges_start_active() {
    let mut g = ConnectionGraph::new();
    g.build(50, &mut SimRng::seeded(8));
    let active = g.edges().iter().filter(|e| e.active).count();
    assert!(active > 0 && active < g.len());
}

#[test]
fn activity_toggles_occasionally() {
    let mut rng = SimRng::seeded(12);
    let mut g = ConnectionGraph::new();
    g.build(30, &mut rng);
    let initial: Vec<bool> = g.edges().iter().map(|e| e.active).collect();
    let mut changes = 0;
    let mut prev = initial.clone();
    for _ in 0..5_000 {
        g.step(&mut rng);
        let now: Vec<bool> = g.edges().iter().map(|e| e.active).collect();
        let flipped = now.iter().zip(&prev).filter(|(a, b)| a != b).count();
        assert!(flipped <= 1);
        changes += flipped;
        prev = now;
    }
    // 0.01 per frame over 5000 frames
    assert!((10..=120).contains(&changes), "{changes} toggles");
}

#[test]
fn only_short_edges_are_visible() {
    let mut rng = SimRng::seeded(21);
    let mut nodes = ParticleField::new(FieldConfig {
        density: 4_000.0,
        ..FieldConfig::network()
    });
    let count = nodes.regenerate(Size::new(800, 600), &mut rng).unwrap();
    let mut g = ConnectionGraph::new();
    g.build(count, &mut rng);

    let visible: Vec<_> = g.visible(nodes.particles(), 1234.0).collect();
    assert!(visible.len() < g.len());
    for v in &visible {
        assert!(v.from.distance(v.to) < NETWORK_EDGE_VISIBLE_DISTANCE);
        assert!((0.1..=0.3 + 1e-6).contains(&v.opacity));
        if let Some(h) = v.highlight {
            let along = v.from.distance(h) + h.distance(v.to);
            assert!((along - v.from.distance(v.to)).abs() < 1e-2);
        }
    }
}
