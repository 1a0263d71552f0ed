//! Sparse connection graph over a particle batch (neural-network variant).

use crate::constants::*;
use crate::field::Particle;
use crate::rng::SimRng;
use fnv::FnvHashSet;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct ConnectionEdge {
    pub from: usize,
    pub to: usize,
    pub active: bool,
    /// Phase offset in radians.
    pub phase: f32,
    /// Opacity oscillation rate in radians per ms.
    pub pulse_rate: f32,
}

impl ConnectionEdge {
    #[inline]
    pub fn pulse(&self, time_ms: f64) -> f32 {
        ((time_ms * self.pulse_rate as f64 + self.phase as f64).sin() * 0.5 + 0.5) as f32
    }

    /// Line opacity at `time_ms`, in [0.1, 0.3].
    #[inline]
    pub fn opacity(&self, time_ms: f64) -> f32 {
        0.1 + self.pulse(time_ms) * 0.2
    }

    /// Distance of the traveling highlight from the source endpoint, wrapped
    /// at the current edge length.
    pub fn highlight_offset(&self, time_ms: f64, length: f32) -> f32 {
        if length <= 0.0 {
            return 0.0;
        }
        let travelled = time_ms * NETWORK_PULSE_SPEED + self.phase as f64 * 10.0;
        travelled.rem_euclid(length as f64) as f32
    }
}

/// An edge resolved against the current particle layout, ready to draw.
#[derive(Clone, Copy, Debug)]
pub struct VisibleEdge {
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
    pub pulse: f32,
    /// Highlight position when the edge is active.
    pub highlight: Option<Vec2>,
}

#[derive(Default)]
pub struct ConnectionGraph {
    edges: Vec<ConnectionEdge>,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn edges(&self) -> &[ConnectionEdge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Rebuild for a batch of `count` particles. Each node draws 2–5 random
    /// targets; self-edges and repeated pairs are dropped rather than
    /// redrawn, so some nodes end up with fewer edges.
    pub fn build(&mut self, count: usize, rng: &mut SimRng) {
        self.edges.clear();
        if count < 2 {
            return;
        }
        let mut seen: FnvHashSet<(usize, usize)> = FnvHashSet::default();
        for from in 0..count {
            let wanted = rng.between(NETWORK_MIN_EDGES_PER_NODE, NETWORK_MAX_EDGES_PER_NODE);
            let picks: SmallVec<[usize; NETWORK_MAX_EDGES_PER_NODE]> =
                (0..wanted).map(|_| rng.index(count)).collect();
            for to in picks {
                if to == from {
                    continue;
                }
                let key = (from.min(to), from.max(to));
                if !seen.insert(key) {
                    continue;
                }
                self.edges.push(ConnectionEdge {
                    from,
                    to,
                    active: rng.chance(NETWORK_INITIAL_ACTIVE_CHANCE),
                    phase: rng.angle(),
                    pulse_rate: rng.range(0.005, 0.015),
                });
            }
        }
        log::debug!("[graph] built {} edges over {} nodes", self.edges.len(), count);
    }

    /// Per-frame activity change: at a low constant probability flip one
    /// random edge.
    pub fn step(&mut self, rng: &mut SimRng) {
        if self.edges.is_empty() || !rng.chance(NETWORK_TOGGLE_CHANCE) {
            return;
        }
        let i = rng.index(self.edges.len());
        self.edges[i].active = !self.edges[i].active;
    }

    /// Edges short enough to draw in the current layout. Long edges are
    /// skipped here, not removed from the graph.
    pub fn visible<'a>(
        &'a self,
        nodes: &'a [Particle],
        time_ms: f64,
    ) -> impl Iterator<Item = VisibleEdge> + 'a {
        self.edges.iter().filter_map(move |e| {
            let from = nodes.get(e.from)?.position;
            let to = nodes.get(e.to)?.position;
            let delta = to - from;
            let length = delta.length();
            if length >= NETWORK_EDGE_VISIBLE_DISTANCE {
                return None;
            }
            let highlight = (e.active && length > 0.0)
                .then(|| from + delta * (e.highlight_offset(time_ms, length) / length));
            Some(VisibleEdge {
                from,
                to,
                opacity: e.opacity(time_ms),
                pulse: e.pulse(time_ms),
                highlight,
            })
        })
    }
}
